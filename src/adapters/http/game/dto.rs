//! Request and response DTOs for the game endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::game::{
    CaseDetails, Game, GameError, GameResult, Speaker, Suspect, SuspicionBoard, TranscriptEntry,
};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/new_game`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewGameRequest {
    #[serde(default)]
    pub num_suspects: Option<i64>,
}

/// Body of `POST /api/ask`.
///
/// Missing fields default to empty so they are reported as domain errors
/// rather than deserialisation failures.
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub suspect_id: String,
    #[serde(default)]
    pub question: String,
}

/// Body of `POST /api/accuse`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccuseRequest {
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub suspect_id: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

/// Public view of a suspect. Bio, alibi and role stay server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspectSummary {
    pub id: String,
    pub name: String,
    pub occupation: String,
}

impl From<&Suspect> for SuspectSummary {
    fn from(suspect: &Suspect) -> Self {
        Self {
            id: suspect.id.to_string(),
            name: suspect.name.clone(),
            occupation: suspect.occupation.clone(),
        }
    }
}

/// One transcript line as the player sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub role: Speaker,
    pub name: String,
    pub content: String,
}

impl From<&TranscriptEntry> for MessageResponse {
    fn from(entry: &TranscriptEntry) -> Self {
        Self {
            role: entry.role,
            name: entry.name.clone(),
            content: entry.content.clone(),
        }
    }
}

/// Transcript of a game in player-facing form.
pub fn messages_of(game: &Game) -> Vec<MessageResponse> {
    game.transcript().iter().map(MessageResponse::from).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct NewGameResponse {
    pub game_id: String,
    pub summary: String,
    pub details: CaseDetails,
    pub suspects: Vec<SuspectSummary>,
    pub suspicion: SuspicionBoard,
}

impl From<&Game> for NewGameResponse {
    fn from(game: &Game) -> Self {
        let scenario = game.scenario();
        Self {
            game_id: game.id().to_string(),
            summary: scenario.summary.clone(),
            details: scenario.details.clone(),
            suspects: scenario.suspects.iter().map(SuspectSummary::from).collect(),
            suspicion: game.suspicion().clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AskResponse {
    pub answer: String,
    pub suspicion: SuspicionBoard,
    pub game_over: bool,
    pub result: Option<GameResult>,
    pub messages: Vec<MessageResponse>,
}

impl AskResponse {
    pub fn new(game: &Game, answer: String) -> Self {
        Self {
            answer,
            suspicion: game.suspicion().clone(),
            game_over: game.is_over(),
            result: game.result(),
            messages: messages_of(game),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccuseResponse {
    pub game_over: bool,
    pub result: GameResult,
    pub messages: Vec<MessageResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub game_master: String,
    pub active_games: usize,
}

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

impl From<&GameError> for ErrorResponse {
    fn from(error: &GameError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}
