//! AskQuestionHandler - Command handler for interrogating a suspect.

use std::sync::Arc;

use crate::domain::foundation::{GameId, SuspectId};
use crate::domain::game::{Game, GameError, SuspicionScore};
use crate::ports::{GameMaster, GameRepository, SuspectTurn};

/// Command to put a question to a suspect.
#[derive(Debug, Clone)]
pub struct AskQuestionCommand {
    pub game_id: GameId,
    pub suspect_id: SuspectId,
    pub question: String,
}

/// Result of a question.
#[derive(Debug, Clone)]
pub struct AskQuestionResult {
    /// Game state after the exchange.
    pub game: Game,
    /// The suspect's reply.
    pub answer: String,
    /// The suspect's suspicion after scoring the reply.
    pub suspicion: SuspicionScore,
}

/// Handler for questions.
pub struct AskQuestionHandler {
    game_master: Arc<dyn GameMaster>,
    repository: Arc<dyn GameRepository>,
}

impl AskQuestionHandler {
    pub fn new(game_master: Arc<dyn GameMaster>, repository: Arc<dyn GameRepository>) -> Self {
        Self {
            game_master,
            repository,
        }
    }

    pub async fn handle(&self, cmd: AskQuestionCommand) -> Result<AskQuestionResult, GameError> {
        // 1. Load the game
        let mut game = self
            .repository
            .find_by_id(&cmd.game_id)
            .await?
            .ok_or_else(|| GameError::not_found(cmd.game_id.to_string()))?;
        let loaded_version = game.version();

        // 2. Record the question (rejects finished games, strangers and blanks)
        let history = game.history_with(&cmd.suspect_id);
        game.record_question(&cmd.suspect_id, &cmd.question)?;

        let scenario = game.scenario().clone();
        let suspect = game.suspect(&cmd.suspect_id)?.clone();
        let question = cmd.question.trim();
        let turn = SuspectTurn {
            game_id: &cmd.game_id,
            scenario: &scenario,
            suspect: &suspect,
            question,
            history: &history,
        };

        // 3. Get the suspect's answer
        let answer = self.game_master.suspect_reply(turn).await.map_err(|err| {
            tracing::warn!(game_id = %cmd.game_id, suspect_id = %cmd.suspect_id, error = %err, "suspect reply failed");
            GameError::from(err)
        })?;
        game.record_answer(&cmd.suspect_id, &answer)?;

        // 4. Score the answer
        let current = game.suspicion().score(&cmd.suspect_id);
        let delta = self
            .game_master
            .analyze_suspicion(turn, &answer, current)
            .await;
        let suspicion = game.apply_suspicion_delta(&cmd.suspect_id, delta)?;

        // 5. Persist, unless the game moved on while the game master was talking
        self.repository.update(&game, loaded_version).await?;

        tracing::info!(
            game_id = %cmd.game_id,
            suspect_id = %cmd.suspect_id,
            delta,
            suspicion = %suspicion,
            "question answered"
        );

        Ok(AskQuestionResult {
            game,
            answer,
            suspicion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::game_master::{LlmGameMaster, ScriptedGameMaster};
    use crate::adapters::storage::InMemoryGameRepository;
    use crate::application::handlers::game::{AccuseSuspectCommand, AccuseSuspectHandler};
    use crate::domain::game::{GameResult, Speaker, PLAYER_NAME};
    use std::time::Duration;

    async fn setup(game_master: Arc<dyn GameMaster>) -> (AskQuestionHandler, Arc<InMemoryGameRepository>, GameId) {
        let repo = Arc::new(InMemoryGameRepository::new());
        let game = Game::start(ScriptedGameMaster::scenario(3));
        repo.save(&game).await.unwrap();
        (AskQuestionHandler::new(game_master, repo.clone()), repo, *game.id())
    }

    fn ask(game_id: GameId, suspect: &str, question: &str) -> AskQuestionCommand {
        AskQuestionCommand {
            game_id,
            suspect_id: SuspectId::from(suspect),
            question: question.to_string(),
        }
    }

    #[tokio::test]
    async fn records_exchange_and_scores_it() {
        let (handler, repo, game_id) = setup(Arc::new(ScriptedGameMaster)).await;

        let result = handler.handle(ask(game_id, "s2", "Where were you?")).await.unwrap();

        assert!(result.answer.contains("I was at location 2 during the crime."));
        assert!((result.suspicion.value() - 0.3).abs() < 1e-9);

        let stored = repo.find_by_id(&game_id).await.unwrap().unwrap();
        let transcript = stored.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].role, Speaker::Human);
        assert_eq!(transcript[0].name, PLAYER_NAME);
        assert_eq!(transcript[1].name, "Suspect 2");
        assert_eq!(stored.last_answer(), result.answer);
    }

    #[tokio::test]
    async fn unknown_game_is_not_found() {
        let (handler, _, _) = setup(Arc::new(ScriptedGameMaster)).await;
        let err = handler.handle(ask(GameId::new(), "s1", "Hi")).await.unwrap_err();
        assert!(matches!(err, GameError::NotFound(_)));
    }

    #[tokio::test]
    async fn unknown_suspect_is_rejected() {
        let (handler, _, game_id) = setup(Arc::new(ScriptedGameMaster)).await;
        let err = handler.handle(ask(game_id, "s7", "Hi")).await.unwrap_err();
        assert_eq!(err, GameError::UnknownSuspect(SuspectId::from("s7")));
    }

    #[tokio::test]
    async fn finished_game_is_rejected() {
        let (handler, repo, game_id) = setup(Arc::new(ScriptedGameMaster)).await;
        let mut game = repo.find_by_id(&game_id).await.unwrap().unwrap();
        game.accuse(&SuspectId::from("s1")).unwrap();
        repo.update(&game, 0).await.unwrap();

        let err = handler.handle(ask(game_id, "s1", "Why?")).await.unwrap_err();
        assert_eq!(err, GameError::GameOver);
    }

    #[tokio::test]
    async fn reply_failure_leaves_game_untouched() {
        let provider = MockAIProvider::new().with_error(MockError::AuthenticationFailed);
        let (handler, repo, game_id) =
            setup(Arc::new(LlmGameMaster::new(Arc::new(provider)))).await;

        let err = handler.handle(ask(game_id, "s1", "Where were you?")).await.unwrap_err();

        assert!(matches!(err, GameError::GameMaster(_)));
        let stored = repo.find_by_id(&game_id).await.unwrap().unwrap();
        assert!(stored.transcript().is_empty());
    }

    #[tokio::test]
    async fn earlier_exchanges_are_sent_as_history() {
        let provider = MockAIProvider::new()
            .with_response("At the bar.")
            .with_response("0.1")
            .with_response("Still the bar.")
            .with_response("0.2");
        let (handler, _, game_id) =
            setup(Arc::new(LlmGameMaster::new(Arc::new(provider.clone())))).await;

        handler.handle(ask(game_id, "s1", "Where were you?")).await.unwrap();
        let result = handler.handle(ask(game_id, "s1", "Sure?")).await.unwrap();

        assert!((result.suspicion.value() - 0.3).abs() < 1e-9);
        let second_reply = &provider.get_calls()[2];
        assert_eq!(second_reply.messages.len(), 3);
        assert_eq!(second_reply.messages[0].content, "Where were you?");
        assert_eq!(second_reply.messages[1].content, "At the bar.");
    }

    #[tokio::test]
    async fn accusation_during_reply_is_not_undone() {
        let provider = MockAIProvider::new()
            .with_response("I was at home.")
            .with_response("0.2")
            .with_delay(Duration::from_millis(200));
        let (handler, repo, game_id) =
            setup(Arc::new(LlmGameMaster::new(Arc::new(provider)))).await;
        let accuse = AccuseSuspectHandler::new(repo.clone());

        let (asked, accused) = tokio::join!(
            handler.handle(ask(game_id, "s2", "Where were you?")),
            async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                accuse
                    .handle(AccuseSuspectCommand {
                        game_id,
                        suspect_id: SuspectId::from("s1"),
                    })
                    .await
            }
        );

        assert_eq!(accused.unwrap().result, GameResult::Win);
        assert_eq!(asked.unwrap_err(), GameError::GameOver);

        let stored = repo.find_by_id(&game_id).await.unwrap().unwrap();
        assert!(stored.is_over());
        assert_eq!(stored.result(), Some(GameResult::Win));
        assert_eq!(stored.transcript().len(), 1);
    }

    #[tokio::test]
    async fn overlapping_questions_keep_the_first_answer() {
        let slow = MockAIProvider::new()
            .with_response("Slow answer.")
            .with_response("0.1")
            .with_delay(Duration::from_millis(150));
        let (slow_handler, repo, game_id) =
            setup(Arc::new(LlmGameMaster::new(Arc::new(slow)))).await;
        let fast_handler = AskQuestionHandler::new(Arc::new(ScriptedGameMaster), repo.clone());

        let (slow_result, fast_result) = tokio::join!(
            slow_handler.handle(ask(game_id, "s1", "Slow?")),
            async {
                tokio::time::sleep(Duration::from_millis(30)).await;
                fast_handler.handle(ask(game_id, "s2", "Fast?")).await
            }
        );

        assert!(fast_result.is_ok());
        assert!(matches!(slow_result, Err(GameError::Conflict { .. })));
        let stored = repo.find_by_id(&game_id).await.unwrap().unwrap();
        assert_eq!(stored.transcript()[0].content, "Fast?");
    }
}
