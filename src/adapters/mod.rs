//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - LLM provider clients (OpenAI-compatible, Gemini, mock)
//! - `game_master` - Game masters backed by an LLM or a fixed script
//! - `http` - Axum REST API and static frontend
//! - `storage` - In-memory game repository

pub mod ai;
pub mod game_master;
pub mod http;
pub mod storage;
