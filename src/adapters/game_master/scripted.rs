//! Deterministic game master used when no LLM is configured.

use async_trait::async_trait;

use crate::domain::foundation::SuspectId;
use crate::domain::game::{CaseDetails, Scenario, Suspect, SuspectRole, SuspicionScore};
use crate::domain::interrogation::heuristic_suspicion_delta;
use crate::ports::{GameMaster, GameMasterError, SuspectTurn};

/// Always writes the same case; suspect 1 did it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedGameMaster;

impl ScriptedGameMaster {
    pub fn new() -> Self {
        Self
    }

    /// The case for `num_suspects` suspects.
    pub fn scenario(num_suspects: usize) -> Scenario {
        let suspects = (1..=num_suspects)
            .map(|i| {
                Suspect::new(
                    SuspectId::ordinal(i),
                    format!("Suspect {}", i),
                    format!("Occupation {}", i),
                    format!("This is suspect {}'s background story.", i),
                    format!("I was at location {} during the crime.", i),
                    if i == 1 {
                        SuspectRole::Criminal
                    } else {
                        SuspectRole::Suspect
                    },
                )
            })
            .collect();

        let details = CaseDetails {
            crime: "Mock theft".to_string(),
            location: "Mock location".to_string(),
            time_window: "Mock time".to_string(),
            clues: vec!["Mock clue 1".to_string(), "Mock clue 2".to_string()],
        };

        Scenario::new(
            "A mock crime has occurred for testing purposes.",
            details,
            suspects,
            Some(SuspectId::ordinal(1)),
        )
    }
}

#[async_trait]
impl GameMaster for ScriptedGameMaster {
    async fn generate_scenario(&self, num_suspects: usize) -> Result<Scenario, GameMasterError> {
        Ok(Self::scenario(num_suspects))
    }

    async fn suspect_reply(&self, turn: SuspectTurn<'_>) -> Result<String, GameMasterError> {
        Ok(format!(
            "[Mock Response from {}] I hear your question: '{}'. {} I don't recall anything suspicious. I was busy with my own tasks.",
            turn.suspect.display_name(),
            turn.question,
            turn.suspect.alibi,
        ))
    }

    async fn analyze_suspicion(
        &self,
        _turn: SuspectTurn<'_>,
        answer: &str,
        _current: SuspicionScore,
    ) -> f64 {
        heuristic_suspicion_delta(answer)
    }

    fn name(&self) -> String {
        "scripted".to_string()
    }
}
