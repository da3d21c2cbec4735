//! Suspicion score value object and the per-suspect board.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::SuspectId;

/// A suspicion value between 0 and [`SuspicionScore::CEILING`] inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuspicionScore(f64);

impl SuspicionScore {
    /// No suspicion at all.
    pub const ZERO: Self = Self(0.0);

    /// Highest score a suspect can reach.
    pub const CEILING: f64 = 10.0;

    /// Creates a score, clamping to the valid range. NaN becomes zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, Self::CEILING))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns a new score moved by `delta`, clamped to the valid range.
    pub fn adjusted(&self, delta: f64) -> Self {
        if delta.is_nan() {
            return *self;
        }
        Self::new(self.0 + delta)
    }
}

impl Default for SuspicionScore {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for SuspicionScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Suspicion scores keyed by suspect.
///
/// Ordered so JSON output lists suspects in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuspicionBoard(BTreeMap<SuspectId, SuspicionScore>);

impl SuspicionBoard {
    /// Creates a board with every suspect at zero.
    pub fn zeroed<'a>(suspects: impl IntoIterator<Item = &'a SuspectId>) -> Self {
        Self(
            suspects
                .into_iter()
                .map(|id| (id.clone(), SuspicionScore::ZERO))
                .collect(),
        )
    }

    /// Current score for a suspect (zero if unknown).
    pub fn score(&self, suspect_id: &SuspectId) -> SuspicionScore {
        self.0.get(suspect_id).copied().unwrap_or_default()
    }

    /// Applies a delta to one suspect's score and returns the new score.
    pub fn apply(&mut self, suspect_id: &SuspectId, delta: f64) -> SuspicionScore {
        let entry = self.0.entry(suspect_id.clone()).or_default();
        *entry = entry.adjusted(delta);
        *entry
    }

    /// Number of tracked suspects.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no suspects are tracked.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates scores in suspect order.
    pub fn iter(&self) -> impl Iterator<Item = (&SuspectId, &SuspicionScore)> {
        self.0.iter()
    }
}
