//! Storage Adapters
//!
//! Implementations of the GameRepository port.
//!
//! - **InMemoryGameRepository** - Games held in memory for the life of the process

mod in_memory_game_repository;

pub use in_memory_game_repository::InMemoryGameRepository;
