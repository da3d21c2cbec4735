//! Game master backed by a language model.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::game::{Scenario, SuspicionScore};
use crate::domain::interrogation::{parse_suspicion_delta, prompts};
use crate::ports::{
    AIProvider, CompletionPurpose, CompletionRequest, GameMaster, GameMasterError, MessageRole,
    RequestMetadata, SuspectTurn,
};

/// Writes cases and voices suspects through an [`AIProvider`].
pub struct LlmGameMaster {
    provider: Arc<dyn AIProvider>,
}

impl LlmGameMaster {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self { provider }
    }

    fn suspect_request(turn: &SuspectTurn<'_>) -> CompletionRequest {
        let mut request = CompletionRequest::new(RequestMetadata::for_game(
            *turn.game_id,
            CompletionPurpose::SuspectReply,
        ))
        .with_system_prompt(prompts::suspect_system_prompt(turn.scenario, turn.suspect))
        .with_temperature(prompts::SUSPECT_TEMPERATURE)
        .with_max_tokens(prompts::SUSPECT_MAX_TOKENS);

        for exchange in turn.history {
            request = request
                .with_message(MessageRole::User, &exchange.question)
                .with_message(MessageRole::Assistant, &exchange.answer);
        }

        request.with_message(MessageRole::User, turn.question)
    }
}

#[async_trait]
impl GameMaster for LlmGameMaster {
    async fn generate_scenario(&self, num_suspects: usize) -> Result<Scenario, GameMasterError> {
        let request = CompletionRequest::new(RequestMetadata::new(None, CompletionPurpose::Scenario))
            .with_system_prompt(prompts::scenario_system_prompt())
            .with_message(MessageRole::User, prompts::scenario_user_prompt(num_suspects))
            .with_temperature(prompts::SCENARIO_TEMPERATURE)
            .with_max_tokens(prompts::SCENARIO_MAX_TOKENS);

        let response = self.provider.complete(request).await?;

        Scenario::normalize(&response.content, num_suspects).map_err(|err| {
            tracing::warn!(error = %err, "model returned an unusable scenario");
            tracing::debug!(raw = %response.content, "rejected scenario output");
            GameMasterError::from(err)
        })
    }

    async fn suspect_reply(&self, turn: SuspectTurn<'_>) -> Result<String, GameMasterError> {
        let response = self.provider.complete(Self::suspect_request(&turn)).await?;

        let reply = response.content.trim();
        if reply.is_empty() {
            return Err(GameMasterError::EmptyReply);
        }
        Ok(reply.to_string())
    }

    async fn analyze_suspicion(
        &self,
        turn: SuspectTurn<'_>,
        answer: &str,
        current: SuspicionScore,
    ) -> f64 {
        let request = CompletionRequest::new(RequestMetadata::for_game(
            *turn.game_id,
            CompletionPurpose::SuspicionScore,
        ))
        .with_system_prompt(prompts::scorer_system_prompt())
        .with_message(
            MessageRole::User,
            prompts::scorer_user_prompt(turn.scenario, turn.suspect, turn.question, answer, current),
        )
        .with_temperature(prompts::SCORER_TEMPERATURE)
        .with_max_tokens(prompts::SCORER_MAX_TOKENS);

        match self.provider.complete(request).await {
            Ok(response) => parse_suspicion_delta(&response.content),
            Err(err) => {
                tracing::warn!(game_id = %turn.game_id, error = %err, "suspicion scoring failed, treating as neutral");
                0.0
            }
        }
    }

    fn name(&self) -> String {
        format!("llm:{}", self.provider.provider_info())
    }
}
