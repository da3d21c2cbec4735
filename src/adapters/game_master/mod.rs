//! Game master adapters.
//!
//! - `LlmGameMaster` - Cases and dialogue from an LLM provider
//! - `ScriptedGameMaster` - Fixed case and canned replies, no network

mod llm;
mod scripted;

pub use llm::LlmGameMaster;
pub use scripted::ScriptedGameMaster;
