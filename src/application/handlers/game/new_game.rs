//! NewGameHandler - Command handler for starting a game.

use std::sync::Arc;

use crate::config::GameConfig;
use crate::domain::foundation::ValidationError;
use crate::domain::game::{Game, GameError};
use crate::ports::{GameMaster, GameRepository};

/// Command to start a new game.
#[derive(Debug, Clone, Default)]
pub struct NewGameCommand {
    /// Requested suspect count; `None` uses the configured default.
    pub num_suspects: Option<i64>,
}

/// Result of successful game creation.
#[derive(Debug, Clone)]
pub struct NewGameResult {
    pub game: Game,
}

/// How many suspects a case may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuspectLimits {
    pub default: usize,
    pub min: usize,
    pub max: usize,
}

impl SuspectLimits {
    /// Resolves a requested count against the limits.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the request is outside `min..=max`
    pub fn resolve(&self, requested: Option<i64>) -> Result<usize, ValidationError> {
        let Some(requested) = requested else {
            return Ok(self.default);
        };
        if requested < self.min as i64 || requested > self.max as i64 {
            return Err(ValidationError::out_of_range(
                "num_suspects",
                self.min as i64,
                self.max as i64,
                requested,
            ));
        }
        Ok(requested as usize)
    }
}

impl Default for SuspectLimits {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}

impl From<&GameConfig> for SuspectLimits {
    fn from(config: &GameConfig) -> Self {
        Self {
            default: config.default_suspects,
            min: config.min_suspects,
            max: config.max_suspects,
        }
    }
}

/// Handler for starting games.
pub struct NewGameHandler {
    game_master: Arc<dyn GameMaster>,
    repository: Arc<dyn GameRepository>,
    limits: SuspectLimits,
}

impl NewGameHandler {
    pub fn new(
        game_master: Arc<dyn GameMaster>,
        repository: Arc<dyn GameRepository>,
        limits: SuspectLimits,
    ) -> Self {
        Self {
            game_master,
            repository,
            limits,
        }
    }

    pub async fn handle(&self, cmd: NewGameCommand) -> Result<NewGameResult, GameError> {
        // 1. Validate the request
        let num_suspects = self.limits.resolve(cmd.num_suspects)?;

        // 2. Have the game master write the case
        let scenario = self
            .game_master
            .generate_scenario(num_suspects)
            .await
            .map_err(|err| {
                tracing::warn!(game_master = %self.game_master.name(), error = %err, "scenario generation failed");
                GameError::from(err)
            })?;

        // 3. Start and persist the game
        let game = Game::start(scenario);
        self.repository.save(&game).await?;

        tracing::info!(
            game_id = %game.id(),
            suspects = num_suspects,
            game_master = %self.game_master.name(),
            "new game started"
        );

        Ok(NewGameResult { game })
    }
}
