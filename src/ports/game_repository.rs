//! Game repository port.
//!
//! Defines the contract for storing and loading Game aggregates. Games only
//! live as long as the process; implementations need not be durable.

use async_trait::async_trait;

use crate::domain::foundation::GameId;
use crate::domain::game::{Game, GameError};

/// Repository port for Game aggregate persistence.
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Save a new game.
    ///
    /// # Errors
    ///
    /// - `Storage` on persistence failure
    async fn save(&self, game: &Game) -> Result<(), GameError>;

    /// Replace an existing game with its updated state.
    ///
    /// `expected_version` is the version the caller loaded. The write is
    /// refused if the stored game has moved on since.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the game doesn't exist
    /// - `GameOver` if the stored game has already ended
    /// - `Conflict` if the stored version differs from `expected_version`
    /// - `Storage` on persistence failure
    async fn update(&self, game: &Game, expected_version: u32) -> Result<(), GameError>;

    /// Find a game by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &GameId) -> Result<Option<Game>, GameError>;

    /// Number of games currently held.
    async fn count(&self) -> Result<usize, GameError>;
}
