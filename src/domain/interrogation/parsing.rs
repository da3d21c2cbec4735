//! Turning model output into suspicion deltas.

use once_cell::sync::Lazy;
use regex::Regex;

/// Smallest delta a scorer may return.
pub const MIN_SCORED_DELTA: f64 = -0.5;
/// Largest delta a scorer may return.
pub const MAX_SCORED_DELTA: f64 = 0.8;

const MIN_HEURISTIC_DELTA: f64 = -0.2;
const MAX_HEURISTIC_DELTA: f64 = 0.8;

const EVASION_MARKERS: [&str; 8] = [
    "avoid",
    "confuse",
    "contrad",
    "maybe",
    "think",
    "unsure",
    "don't recall",
    "forgot",
];

static FIRST_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-+]?\d*\.\d+|[-+]?\d+").unwrap());

/// Extracts the first number in a scorer reply, clamped to the scorer range.
///
/// Replies without a number count as neutral.
pub fn parse_suspicion_delta(text: &str) -> f64 {
    FIRST_NUMBER
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(MIN_SCORED_DELTA, MAX_SCORED_DELTA))
        .unwrap_or(0.0)
}

/// Keyword-based suspicion delta used when no model is available.
pub fn heuristic_suspicion_delta(answer: &str) -> f64 {
    let answer = answer.to_lowercase();

    let mut delta: f64 = EVASION_MARKERS
        .iter()
        .filter(|marker| answer.contains(*marker))
        .count() as f64
        * 0.3;

    if answer.contains("alibi") && (answer.contains("changed") || answer.contains("different")) {
        delta += 0.5;
    }

    delta.clamp(MIN_HEURISTIC_DELTA, MAX_HEURISTIC_DELTA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_float() {
        assert_eq!(parse_suspicion_delta("0.3"), 0.3);
        assert_eq!(parse_suspicion_delta("  -0.25\n"), -0.25);
    }

    #[test]
    fn parses_first_number_in_prose() {
        assert_eq!(parse_suspicion_delta("Delta: .4 (evasive), maybe 0.7"), 0.4);
        assert_eq!(parse_suspicion_delta("I'd say +1"), 0.8);
    }

    #[test]
    fn clamps_to_scorer_range() {
        assert_eq!(parse_suspicion_delta("5.0"), MAX_SCORED_DELTA);
        assert_eq!(parse_suspicion_delta("-3"), MIN_SCORED_DELTA);
    }

    #[test]
    fn no_number_is_neutral() {
        assert_eq!(parse_suspicion_delta("neutral"), 0.0);
        assert_eq!(parse_suspicion_delta(""), 0.0);
    }

    #[test]
    fn heuristic_counts_markers() {
        assert_eq!(heuristic_suspicion_delta("I was at home."), 0.0);
        assert!((heuristic_suspicion_delta("Maybe. I'm unsure.") - 0.6).abs() < 1e-9);
    }

    #[test]
    fn heuristic_flags_changed_alibi() {
        assert_eq!(heuristic_suspicion_delta("My alibi changed, I guess."), 0.5);
    }

    #[test]
    fn heuristic_is_capped() {
        let answer = "I think maybe I forgot, I'm unsure and confused. My alibi is different.";
        assert_eq!(heuristic_suspicion_delta(answer), 0.8);
    }

    #[test]
    fn scripted_reply_reads_as_slightly_suspicious() {
        let reply = "I hear your question. I don't recall anything suspicious.";
        assert!((heuristic_suspicion_delta(reply) - 0.3).abs() < 1e-9);
    }
}
