//! Case scenario and normalisation of LLM-authored scenario JSON.
//!
//! Language models are asked for strict JSON but routinely wrap it in code
//! fences, invent their own suspect ids, or disagree with themselves about who
//! the criminal is. [`Scenario::normalize`] turns whatever came back into
//! a scenario the rest of the game can rely on:
//!
//! - suspect ids are `s1..sN` in list order
//! - exactly one suspect is the criminal, and it is `criminal_id`

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::suspect::{Suspect, SuspectRole};
use crate::domain::foundation::SuspectId;

static LEADING_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^```[A-Za-z]*[ \t]*\r?\n?").unwrap());
static TRAILING_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n?```$").unwrap());

/// Facts about the crime shared with the player and the suspects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDetails {
    pub crime: String,
    pub location: String,
    pub time_window: String,
    pub clues: Vec<String>,
}

/// A complete mystery: what happened, who was there, who did it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub summary: String,
    pub details: CaseDetails,
    pub suspects: Vec<Suspect>,
    pub criminal_id: SuspectId,
}

/// Why LLM output could not become a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    #[error("scenario is not valid JSON: {0}")]
    Malformed(String),

    #[error("expected {expected} suspects, got {actual}")]
    SuspectCount { expected: usize, actual: usize },
}

impl Scenario {
    /// Builds a scenario from already-structured parts, enforcing the
    /// single-criminal invariant.
    ///
    /// Suspect ids are rewritten to `s1..sN`. If `criminal_id` does not name
    /// one of them, `s1` is the criminal.
    pub fn new(
        summary: impl Into<String>,
        details: CaseDetails,
        mut suspects: Vec<Suspect>,
        criminal_id: Option<SuspectId>,
    ) -> Self {
        for (index, suspect) in suspects.iter_mut().enumerate() {
            suspect.id = SuspectId::ordinal(index + 1);
        }

        let criminal_id = criminal_id
            .or_else(|| suspects.iter().find(|s| s.is_criminal()).map(|s| s.id.clone()))
            .filter(|id| suspects.iter().any(|s| &s.id == id))
            .unwrap_or_else(|| SuspectId::ordinal(1));

        for suspect in suspects.iter_mut() {
            suspect.role = if suspect.id == criminal_id {
                SuspectRole::Criminal
            } else {
                SuspectRole::Suspect
            };
        }

        Self {
            summary: summary.into(),
            details,
            suspects,
            criminal_id,
        }
    }

    /// Parses and normalises the raw text a model returned for a case request.
    pub fn normalize(raw: &str, expected_suspects: usize) -> Result<Self, ScenarioError> {
        let json = strip_code_fences(raw);
        let parsed: RawScenario =
            serde_json::from_str(json).map_err(|e| ScenarioError::Malformed(e.to_string()))?;

        let suspects = parsed.suspects.unwrap_or_default();
        if suspects.is_empty() || suspects.len() != expected_suspects {
            return Err(ScenarioError::SuspectCount {
                expected: expected_suspects,
                actual: suspects.len(),
            });
        }

        let suspects = suspects
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.into_suspect(SuspectId::ordinal(index + 1)))
            .collect();

        let criminal_id = parsed
            .criminal_id
            .as_ref()
            .and_then(value_as_label)
            .filter(|id| !id.is_empty())
            .map(SuspectId::new);

        Ok(Self::new(
            parsed.summary.unwrap_or_default(),
            parsed.details.map(RawDetails::into_details).unwrap_or_default(),
            suspects,
            criminal_id,
        ))
    }

    pub fn suspect(&self, id: &SuspectId) -> Option<&Suspect> {
        self.suspects.iter().find(|s| &s.id == id)
    }

    pub fn suspect_ids(&self) -> impl Iterator<Item = &SuspectId> {
        self.suspects.iter().map(|s| &s.id)
    }
}

/// Removes a surrounding Markdown code fence, if any.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }
    let without_open = match LEADING_FENCE.find(trimmed) {
        Some(m) => &trimmed[m.end()..],
        None => trimmed,
    };
    match TRAILING_FENCE.find(without_open) {
        Some(m) => without_open[..m.start()].trim(),
        None => without_open.trim(),
    }
}

fn value_as_label(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.trim().to_string()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ----- Raw LLM shapes (every field optional, nulls tolerated) -----

#[derive(Debug, Deserialize)]
struct RawScenario {
    summary: Option<String>,
    details: Option<RawDetails>,
    suspects: Option<Vec<RawSuspect>>,
    criminal_id: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawDetails {
    crime: Option<String>,
    location: Option<String>,
    time_window: Option<String>,
    clues: Option<Vec<String>>,
}

impl RawDetails {
    fn into_details(self) -> CaseDetails {
        CaseDetails {
            crime: self.crime.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            time_window: self.time_window.unwrap_or_default(),
            clues: self.clues.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawSuspect {
    name: Option<String>,
    occupation: Option<String>,
    bio: Option<String>,
    alibi: Option<String>,
    role: Option<String>,
}

impl RawSuspect {
    fn into_suspect(self, id: SuspectId) -> Suspect {
        Suspect::new(
            id,
            self.name.unwrap_or_default(),
            self.occupation.unwrap_or_default(),
            self.bio.unwrap_or_default(),
            self.alibi.unwrap_or_default(),
            self.role.as_deref().map(SuspectRole::from_label).unwrap_or_default(),
        )
    }
}
