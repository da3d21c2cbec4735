//! Interrogation module - prompts and reply parsing shared by game masters.

pub mod parsing;
pub mod prompts;

pub use parsing::{heuristic_suspicion_delta, parse_suspicion_delta, MAX_SCORED_DELTA, MIN_SCORED_DELTA};
