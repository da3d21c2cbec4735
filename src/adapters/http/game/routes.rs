//! HTTP routes for game endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{accuse_suspect, ask_question, health, new_game, GameHandlers};

/// Creates the game API router, mounted under `/api`.
pub fn game_routes(handlers: GameHandlers) -> Router {
    Router::new()
        .route("/new_game", post(new_game))
        .route("/ask", post(ask_question))
        .route("/accuse", post(accuse_suspect))
        .route("/health", get(health))
        .with_state(handlers)
}
