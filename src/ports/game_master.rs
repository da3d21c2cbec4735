//! Game Master Port - who writes the case and voices the suspects.
//!
//! A game master produces the scenario for a new game, answers questions in
//! character, and judges how much an answer should raise suspicion.
//! Implementations may call a language model or follow a fixed script.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::GameId;
use crate::domain::game::{Exchange, GameError, Scenario, ScenarioError, Suspect, SuspicionScore};
use crate::ports::AIError;

/// One question put to one suspect, with everything needed to answer it.
#[derive(Debug, Clone, Copy)]
pub struct SuspectTurn<'a> {
    pub game_id: &'a GameId,
    pub scenario: &'a Scenario,
    pub suspect: &'a Suspect,
    pub question: &'a str,
    /// Earlier completed exchanges with this suspect, oldest first.
    pub history: &'a [Exchange],
}

/// Port for the game's storyteller.
#[async_trait]
pub trait GameMaster: Send + Sync {
    /// Write a new case with exactly `num_suspects` suspects.
    ///
    /// # Errors
    ///
    /// - `Provider` if the model could not be reached
    /// - `Scenario` if the model's case could not be used
    async fn generate_scenario(&self, num_suspects: usize) -> Result<Scenario, GameMasterError>;

    /// Answer the question in character.
    async fn suspect_reply(&self, turn: SuspectTurn<'_>) -> Result<String, GameMasterError>;

    /// Suspicion delta for an answer. Never fails; problems yield `0.0`.
    async fn analyze_suspicion(
        &self,
        turn: SuspectTurn<'_>,
        answer: &str,
        current: SuspicionScore,
    ) -> f64;

    /// Short label for logs and the health endpoint.
    fn name(&self) -> String;
}

/// Errors from a game master.
#[derive(Debug, Error)]
pub enum GameMasterError {
    #[error("LLM provider error: {0}")]
    Provider(#[from] AIError),

    #[error("unusable scenario: {0}")]
    Scenario(#[from] ScenarioError),

    #[error("model returned an empty reply")]
    EmptyReply,
}

impl From<GameMasterError> for GameError {
    fn from(err: GameMasterError) -> Self {
        GameError::game_master(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_master_is_object_safe() {
        fn _accepts_dyn(_gm: &dyn GameMaster) {}
    }

    #[test]
    fn errors_become_game_master_failures() {
        let err: GameError = GameMasterError::from(AIError::AuthenticationFailed).into();
        assert_eq!(
            err,
            GameError::GameMaster("LLM provider error: authentication failed".to_string())
        );

        let err: GameError =
            GameMasterError::from(ScenarioError::SuspectCount { expected: 4, actual: 3 }).into();
        assert!(matches!(err, GameError::GameMaster(_)));
    }
}
