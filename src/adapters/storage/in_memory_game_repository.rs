//! In-Memory Game Repository Adapter
//!
//! Keeps every game in a map for the life of the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::GameId;
use crate::domain::game::{Game, GameError};
use crate::ports::GameRepository;

/// In-memory storage for games
#[derive(Debug, Clone, Default)]
pub struct InMemoryGameRepository {
    games: Arc<RwLock<HashMap<GameId, Game>>>,
}

impl InMemoryGameRepository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn save(&self, game: &Game) -> Result<(), GameError> {
        let mut games = self.games.write().await;
        if games.contains_key(game.id()) {
            return Err(GameError::storage(format!("game {} already exists", game.id())));
        }
        games.insert(*game.id(), game.clone());
        Ok(())
    }

    async fn update(&self, game: &Game, expected_version: u32) -> Result<(), GameError> {
        let mut games = self.games.write().await;
        let stored = games
            .get_mut(game.id())
            .ok_or_else(|| GameError::not_found(game.id().to_string()))?;

        if stored.is_over() {
            return Err(GameError::GameOver);
        }
        if stored.version() != expected_version {
            return Err(GameError::Conflict {
                id: game.id().to_string(),
                expected: expected_version,
                actual: stored.version(),
            });
        }

        *stored = game.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &GameId) -> Result<Option<Game>, GameError> {
        Ok(self.games.read().await.get(id).cloned())
    }

    async fn count(&self) -> Result<usize, GameError> {
        Ok(self.games.read().await.len())
    }
}
