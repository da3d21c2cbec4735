//! HTTP adapters - REST API and frontend serving.

pub mod game;
mod router;

pub use game::{game_routes, GameHandlers};
pub use router::app_router;
