//! Game module - the interrogation session and its case.

mod aggregate;
mod errors;
mod scenario;
mod suspect;
mod suspicion;
mod transcript;

pub use aggregate::{Game, GameResult, LOSE_MESSAGE, WIN_MESSAGE};
pub use errors::GameError;
pub use scenario::{strip_code_fences, CaseDetails, Scenario, ScenarioError};
pub use suspect::{Suspect, SuspectRole};
pub use suspicion::{SuspicionBoard, SuspicionScore};
pub use transcript::{Exchange, Speaker, TranscriptEntry, CASE_NAME, PLAYER_NAME};
