//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port for the supported LLM vendors.
//!
//! ## Available Adapters
//!
//! - `OpenAIProvider` - OpenAI Chat Completions; also Qwen (DashScope) and local servers
//! - `GeminiProvider` - Google Gemini `generateContent`
//! - `MockAIProvider` - Configurable mock for testing
//!
//! `select_provider` chooses among them from configuration.

mod gemini_provider;
mod mock_provider;
mod openai_provider;
mod retry;
mod selection;

pub use gemini_provider::{GeminiConfig, GeminiProvider, GEMINI_BASE_URL, GEMINI_DEFAULT_MODEL};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use openai_provider::{OpenAIConfig, OpenAIProvider, OPENAI_BASE_URL, OPENAI_DEFAULT_MODEL};
pub use retry::RetryPolicy;
pub use selection::{provider_kind, select_provider, ProviderKind};
