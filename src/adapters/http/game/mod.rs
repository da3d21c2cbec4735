//! HTTP adapter for game endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AccuseRequest, AccuseResponse, AskRequest, AskResponse, ErrorResponse, HealthResponse,
    MessageResponse, NewGameRequest, NewGameResponse, SuspectSummary,
};
pub use handlers::GameHandlers;
pub use routes::game_routes;
