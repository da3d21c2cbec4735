//! AccuseSuspectHandler - Command handler for the final accusation.

use std::sync::Arc;

use crate::domain::foundation::{GameId, SuspectId};
use crate::domain::game::{Game, GameError, GameResult};
use crate::ports::GameRepository;

/// Command to accuse a suspect.
#[derive(Debug, Clone)]
pub struct AccuseSuspectCommand {
    pub game_id: GameId,
    pub suspect_id: SuspectId,
}

/// Result of an accusation.
#[derive(Debug, Clone)]
pub struct AccuseSuspectResult {
    pub game: Game,
    pub result: GameResult,
}

/// Handler for accusations.
pub struct AccuseSuspectHandler {
    repository: Arc<dyn GameRepository>,
}

impl AccuseSuspectHandler {
    pub fn new(repository: Arc<dyn GameRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AccuseSuspectCommand) -> Result<AccuseSuspectResult, GameError> {
        let mut game = self
            .repository
            .find_by_id(&cmd.game_id)
            .await?
            .ok_or_else(|| GameError::not_found(cmd.game_id.to_string()))?;
        let loaded_version = game.version();

        let result = game.accuse(&cmd.suspect_id)?;
        self.repository.update(&game, loaded_version).await?;

        tracing::info!(
            game_id = %cmd.game_id,
            accused = %cmd.suspect_id,
            result = result.as_str(),
            questions = game.transcript().iter().filter(|e| e.is_from_player()).count(),
            duration_secs = game.updated_at().duration_since(game.created_at()).num_seconds(),
            "game finished"
        );

        Ok(AccuseSuspectResult { game, result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::game_master::ScriptedGameMaster;
    use crate::adapters::storage::InMemoryGameRepository;
    use crate::domain::game::{CASE_NAME, LOSE_MESSAGE, WIN_MESSAGE};

    async fn setup() -> (AccuseSuspectHandler, Arc<InMemoryGameRepository>, GameId) {
        let repo = Arc::new(InMemoryGameRepository::new());
        let game = Game::start(ScriptedGameMaster::scenario(3));
        repo.save(&game).await.unwrap();
        (AccuseSuspectHandler::new(repo.clone()), repo, *game.id())
    }

    fn accuse(game_id: GameId, suspect: &str) -> AccuseSuspectCommand {
        AccuseSuspectCommand {
            game_id,
            suspect_id: SuspectId::from(suspect),
        }
    }

    #[tokio::test]
    async fn accusing_the_criminal_wins_and_persists() {
        let (handler, repo, game_id) = setup().await;

        let outcome = handler.handle(accuse(game_id, "s1")).await.unwrap();

        assert_eq!(outcome.result, GameResult::Win);
        let stored = repo.find_by_id(&game_id).await.unwrap().unwrap();
        assert!(stored.is_over());
        let last = stored.transcript().last().unwrap();
        assert_eq!(last.name, CASE_NAME);
        assert_eq!(last.content, WIN_MESSAGE);
    }

    #[tokio::test]
    async fn accusing_an_innocent_loses() {
        let (handler, _, game_id) = setup().await;
        let outcome = handler.handle(accuse(game_id, "s3")).await.unwrap();
        assert_eq!(outcome.result, GameResult::Lose);
        assert_eq!(outcome.game.last_answer(), LOSE_MESSAGE);
    }

    #[tokio::test]
    async fn second_accusation_is_rejected() {
        let (handler, _, game_id) = setup().await;
        handler.handle(accuse(game_id, "s2")).await.unwrap();

        let err = handler.handle(accuse(game_id, "s1")).await.unwrap_err();
        assert_eq!(err, GameError::GameOver);
    }

    #[tokio::test]
    async fn unknown_game_is_not_found() {
        let (handler, _, _) = setup().await;
        let err = handler.handle(accuse(GameId::new(), "s1")).await.unwrap_err();
        assert!(matches!(err, GameError::NotFound(_)));
    }
}
