//! Domain layer containing game rules and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, validation errors)
//! - `game` - Game aggregate, scenario, suspects and suspicion scoring
//! - `interrogation` - Prompt templates and reply parsing for game masters

pub mod foundation;
pub mod game;
pub mod interrogation;
