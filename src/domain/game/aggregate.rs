//! Game aggregate.
//!
//! A game is one interrogation session: a scenario, the running transcript
//! and a suspicion score per suspect. It moves from in-progress to over
//! exactly once, on accusation.

use serde::{Deserialize, Serialize};

use super::errors::GameError;
use super::scenario::Scenario;
use super::suspect::Suspect;
use super::suspicion::{SuspicionBoard, SuspicionScore};
use super::transcript::{Exchange, Speaker, TranscriptEntry};
use crate::domain::foundation::{GameId, SuspectId, Timestamp, ValidationError};

/// Verdict narrated after a correct accusation.
pub const WIN_MESSAGE: &str = "Correct! You identified the criminal. The case is closed.";

/// Verdict narrated after a wrong accusation.
pub const LOSE_MESSAGE: &str = "Incorrect accusation. The real criminal slips away for now.";

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Lose,
}

impl GameResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameResult::Win => "win",
            GameResult::Lose => "lose",
        }
    }
}

/// Game aggregate.
///
/// # Invariants
///
/// - every suspect in the scenario has a suspicion score in `[0, 10]`
/// - once `result` is set nothing changes again
/// - `version` grows by one with every change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    scenario: Scenario,
    transcript: Vec<TranscriptEntry>,
    suspicion: SuspicionBoard,
    accused: Option<SuspectId>,
    result: Option<GameResult>,
    version: u32,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Game {
    /// Starts a fresh game for a scenario.
    pub fn start(scenario: Scenario) -> Self {
        let now = Timestamp::now();
        let suspicion = SuspicionBoard::zeroed(scenario.suspect_ids());
        Self {
            id: GameId::new(),
            scenario,
            transcript: Vec::new(),
            suspicion,
            accused: None,
            result: None,
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &GameId {
        &self.id
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn suspicion(&self) -> &SuspicionBoard {
        &self.suspicion
    }

    pub fn accused(&self) -> Option<&SuspectId> {
        self.accused.as_ref()
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Number of changes since the game started.
    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Looks up a suspect of this game.
    ///
    /// # Errors
    ///
    /// - `UnknownSuspect` if the id is not in the scenario
    pub fn suspect(&self, suspect_id: &SuspectId) -> Result<&Suspect, GameError> {
        self.scenario
            .suspect(suspect_id)
            .ok_or_else(|| GameError::UnknownSuspect(suspect_id.clone()))
    }

    /// Content of the most recent line spoken by the game, or empty.
    pub fn last_answer(&self) -> &str {
        self.transcript
            .iter()
            .rev()
            .find(|entry| entry.role == Speaker::Ai)
            .map(|entry| entry.content.as_str())
            .unwrap_or("")
    }

    /// Completed question/answer pairs with one suspect, oldest first.
    pub fn history_with(&self, suspect_id: &SuspectId) -> Vec<Exchange> {
        let mut exchanges = Vec::new();
        let mut pending: Option<&str> = None;

        for entry in self
            .transcript
            .iter()
            .filter(|entry| entry.suspect_id.as_ref() == Some(suspect_id))
        {
            match entry.role {
                Speaker::Human => pending = Some(&entry.content),
                Speaker::Ai => {
                    if let Some(question) = pending.take() {
                        exchanges.push(Exchange {
                            question: question.to_string(),
                            answer: entry.content.clone(),
                        });
                    }
                }
            }
        }

        exchanges
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Records the player's question to a suspect.
    ///
    /// # Errors
    ///
    /// - `GameOver` if the game has ended
    /// - `UnknownSuspect` if the suspect is not in the scenario
    /// - `Validation` if the question is blank
    pub fn record_question(&mut self, suspect_id: &SuspectId, question: &str) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.suspect(suspect_id)?;

        let question = question.trim();
        if question.is_empty() {
            return Err(ValidationError::empty_field("question").into());
        }

        self.transcript
            .push(TranscriptEntry::question(suspect_id.clone(), question));
        self.touch();
        Ok(())
    }

    /// Records a suspect's reply, named after the suspect.
    ///
    /// # Errors
    ///
    /// - `GameOver` if the game has ended
    /// - `UnknownSuspect` if the suspect is not in the scenario
    pub fn record_answer(&mut self, suspect_id: &SuspectId, answer: &str) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        let name = self.suspect(suspect_id)?.display_name().to_string();

        self.transcript
            .push(TranscriptEntry::answer(suspect_id.clone(), name, answer.trim()));
        self.touch();
        Ok(())
    }

    /// Moves a suspect's score by `delta`, clamped to `[0, 10]`.
    ///
    /// # Errors
    ///
    /// - `GameOver` if the game has ended
    /// - `UnknownSuspect` if the suspect is not in the scenario
    pub fn apply_suspicion_delta(
        &mut self,
        suspect_id: &SuspectId,
        delta: f64,
    ) -> Result<SuspicionScore, GameError> {
        self.ensure_in_progress()?;
        self.suspect(suspect_id)?;

        let score = self.suspicion.apply(suspect_id, delta);
        self.touch();
        Ok(score)
    }

    /// Accuses a suspect and ends the game.
    ///
    /// # Errors
    ///
    /// - `GameOver` if the game has already ended
    /// - `UnknownSuspect` if the suspect is not in the scenario
    pub fn accuse(&mut self, suspect_id: &SuspectId) -> Result<GameResult, GameError> {
        self.ensure_in_progress()?;
        self.suspect(suspect_id)?;

        let (result, verdict) = if *suspect_id == self.scenario.criminal_id {
            (GameResult::Win, WIN_MESSAGE)
        } else {
            (GameResult::Lose, LOSE_MESSAGE)
        };

        self.accused = Some(suspect_id.clone());
        self.result = Some(result);
        self.transcript.push(TranscriptEntry::narration(verdict));
        self.touch();
        Ok(result)
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.is_over() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }

    fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Timestamp::now();
    }
}
