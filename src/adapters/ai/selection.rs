//! Picks the LLM provider from whichever credentials are configured.
//!
//! Order: Gemini, Qwen, OpenAI, local server. With none of them the game
//! runs on the scripted game master.

use std::sync::Arc;

use super::gemini_provider::{GeminiConfig, GeminiProvider};
use super::openai_provider::{OpenAIConfig, OpenAIProvider};
use crate::config::LlmConfig;
use crate::ports::{AIError, AIProvider};

/// Which backend [`select_provider`] settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    Qwen,
    OpenAI,
    Local,
}

/// Decides the provider kind without building anything.
pub fn provider_kind(config: &LlmConfig) -> Option<ProviderKind> {
    if config.google_key().is_some() {
        Some(ProviderKind::Gemini)
    } else if config.qwen_key().is_some() {
        Some(ProviderKind::Qwen)
    } else if config.openai_key().is_some() {
        Some(ProviderKind::OpenAI)
    } else if config.local_url().is_some() {
        Some(ProviderKind::Local)
    } else {
        None
    }
}

/// Builds the provider for the configured credentials.
///
/// Returns `Ok(None)` when nothing is configured.
///
/// # Errors
///
/// - `InvalidRequest` if the HTTP client cannot be built
pub fn select_provider(config: &LlmConfig) -> Result<Option<Arc<dyn AIProvider>>, AIError> {
    let provider: Arc<dyn AIProvider> = match provider_kind(config) {
        Some(ProviderKind::Gemini) => {
            let key = config.google_key().unwrap_or_default();
            Arc::new(GeminiProvider::new(
                GeminiConfig::new(key)
                    .with_model(config.gemini_model())
                    .with_base_url(config.gemini_base_url())
                    .with_timeout(config.timeout())
                    .with_max_retries(config.max_retries),
            )?)
        }
        Some(ProviderKind::Qwen) => {
            let key = config.qwen_key().unwrap_or_default();
            Arc::new(OpenAIProvider::new(
                OpenAIConfig::new(key)
                    .with_provider_name("qwen")
                    .with_model(config.qwen_model())
                    .with_base_url(config.qwen_base_url())
                    .with_timeout(config.timeout())
                    .with_max_retries(config.max_retries),
            )?)
        }
        Some(ProviderKind::OpenAI) => {
            let key = config.openai_key().unwrap_or_default();
            Arc::new(OpenAIProvider::new(
                OpenAIConfig::new(key)
                    .with_provider_name("openai")
                    .with_model(config.openai_model())
                    .with_base_url(config.openai_base_url())
                    .with_timeout(config.timeout())
                    .with_max_retries(config.max_retries),
            )?)
        }
        Some(ProviderKind::Local) => {
            let url = config.local_url().unwrap_or_default();
            Arc::new(OpenAIProvider::new(
                OpenAIConfig::keyless()
                    .with_provider_name("local")
                    .with_model(config.local_model())
                    .with_base_url(url)
                    .with_timeout(config.timeout())
                    .with_max_retries(config.max_retries),
            )?)
        }
        None => {
            tracing::warn!("no LLM provider configured, using scripted game master");
            return Ok(None);
        }
    };

    let info = provider.provider_info();
    tracing::info!(provider = %info.name, model = %info.model, "LLM provider selected");
    Ok(Some(provider))
}
