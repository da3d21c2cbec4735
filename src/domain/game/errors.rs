//! Game-specific error types.

use thiserror::Error;

use crate::domain::foundation::{SuspectId, ValidationError};

/// Errors raised while playing a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// No game exists under this id (or the id could not name one).
    #[error("Game not found: {0}")]
    NotFound(String),

    /// The game has ended and accepts no further actions.
    #[error("Game is over")]
    GameOver,

    /// The suspect id is not part of this game's scenario.
    #[error("Unknown suspect: {0}")]
    UnknownSuspect(SuspectId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The game master could not write the case or voice a suspect.
    #[error("Game master failed: {0}")]
    GameMaster(String),

    /// Another request changed the game after this one loaded it.
    #[error("Game {id} was changed concurrently (expected version {expected}, found {actual})")]
    Conflict { id: String, expected: u32, actual: u32 },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl GameError {
    pub fn not_found(id: impl Into<String>) -> Self {
        GameError::NotFound(id.into())
    }

    pub fn game_master(message: impl Into<String>) -> Self {
        GameError::GameMaster(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        GameError::Storage(message.into())
    }

    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::NotFound(_) => "GAME_NOT_FOUND",
            GameError::GameOver => "GAME_OVER",
            GameError::UnknownSuspect(_) => "UNKNOWN_SUSPECT",
            GameError::Validation(_) => "VALIDATION_FAILED",
            GameError::GameMaster(_) => "GAME_MASTER_FAILED",
            GameError::Conflict { .. } => "GAME_CONFLICT",
            GameError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_over_message_matches_api_text() {
        assert_eq!(GameError::GameOver.to_string(), "Game is over");
    }

    #[test]
    fn validation_errors_convert() {
        let err: GameError = ValidationError::empty_field("question").into();
        assert_eq!(err.code(), "VALIDATION_FAILED");
        assert_eq!(err.to_string(), "Field 'question' cannot be empty");
    }

    #[test]
    fn conflict_names_both_versions() {
        let err = GameError::Conflict {
            id: "g1".to_string(),
            expected: 2,
            actual: 5,
        };
        assert_eq!(err.code(), "GAME_CONFLICT");
        assert!(err.to_string().contains("expected version 2, found 5"));
    }
}
