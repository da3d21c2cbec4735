//! Detective Game - LLM-driven interrogation game
//!
//! A player questions suspects voiced by a language model, watches their
//! suspicion rise and fall, and accuses one of them of the crime.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
