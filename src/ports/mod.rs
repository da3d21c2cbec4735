//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Chat completions from an LLM vendor
//! - `GameMaster` - Case writing, suspect dialogue and suspicion judgement
//! - `GameRepository` - Storage for running games

mod ai_provider;
mod game_master;
mod game_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionPurpose, CompletionRequest, CompletionResponse, FinishReason,
    Message, MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use game_master::{GameMaster, GameMasterError, SuspectTurn};
pub use game_repository::GameRepository;
