//! Interrogation transcript.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SuspectId;

/// Name attached to the player's lines.
pub const PLAYER_NAME: &str = "Player";

/// Name attached to narration such as the accusation verdict.
pub const CASE_NAME: &str = "Case";

/// Who is talking: the player (`human`) or anyone voiced by the game (`ai`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Human,
    Ai,
}

/// One line of the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: Speaker,
    pub name: String,
    pub content: String,
    /// Suspect this line was addressed to or spoken by. `None` for narration.
    pub suspect_id: Option<SuspectId>,
}

impl TranscriptEntry {
    pub fn question(suspect_id: SuspectId, content: impl Into<String>) -> Self {
        Self {
            role: Speaker::Human,
            name: PLAYER_NAME.to_string(),
            content: content.into(),
            suspect_id: Some(suspect_id),
        }
    }

    pub fn answer(suspect_id: SuspectId, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Speaker::Ai,
            name: name.into(),
            content: content.into(),
            suspect_id: Some(suspect_id),
        }
    }

    pub fn narration(content: impl Into<String>) -> Self {
        Self {
            role: Speaker::Ai,
            name: CASE_NAME.to_string(),
            content: content.into(),
            suspect_id: None,
        }
    }

    pub fn is_from_player(&self) -> bool {
        self.role == Speaker::Human
    }
}

/// A completed question and answer with one suspect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub question: String,
    pub answer: String,
}
