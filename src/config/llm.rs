//! LLM provider configuration
//!
//! Keys can be set under the application prefix
//! (`DETECTIVE__LLM__OPENAI_API_KEY`) or through the vendors' well-known
//! variables (`OPENAI_API_KEY`, `GOOGLE_API_KEY`, ...). The prefixed form wins.

use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use super::error::ValidationError;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-lite";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_QWEN_MODEL: &str = "qwen-plus";
pub const DEFAULT_QWEN_BASE_URL: &str = "https://dashscope-intl.aliyuncs.com/compatible-mode/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_LOCAL_MODEL: &str = "phi3:mini";

/// Longest single wait between retries of one LLM call.
pub const MAX_RETRY_DELAY_SECS: u64 = 10;

/// LLM provider configuration
#[derive(Clone, Deserialize)]
pub struct LlmConfig {
    /// Google Generative Language API key
    pub google_api_key: Option<String>,
    pub gemini_model: Option<String>,
    pub gemini_base_url: Option<String>,

    /// DashScope (Qwen) API key
    pub qwen_api_key: Option<String>,
    pub qwen_model: Option<String>,
    pub qwen_base_url: Option<String>,

    /// OpenAI API key
    pub openai_api_key: Option<String>,
    pub openai_model: Option<String>,
    pub openai_base_url: Option<String>,

    /// Base URL of a local OpenAI-compatible server (Ollama, LM Studio)
    pub local_base_url: Option<String>,
    pub local_model: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on transient failures
    #[serde(default = "default_retries")]
    pub max_retries: u32,
}

impl LlmConfig {
    /// Fills unset fields from the vendors' well-known environment variables.
    ///
    /// `lookup` is normally `std::env::var(..).ok()`; tests pass a map.
    pub fn apply_provider_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let fill = |slot: &mut Option<String>, names: &[&str]| {
            if slot.as_deref().map_or(true, |v| v.trim().is_empty()) {
                *slot = names.iter().find_map(|name| non_empty(name));
            }
        };

        fill(&mut self.google_api_key, &["GOOGLE_API_KEY"]);
        fill(&mut self.qwen_api_key, &["DASHSCOPE_API_KEY", "QWEN_API_KEY"]);
        fill(&mut self.qwen_base_url, &["QWEN_BASE_URL", "DASHSCOPE_BASE_URL"]);
        fill(&mut self.qwen_model, &["QWEN_MODEL"]);
        fill(&mut self.openai_api_key, &["OPENAI_API_KEY"]);
        fill(&mut self.local_base_url, &["LOCAL_LLM_BASE_URL"]);
        fill(&mut self.local_model, &["LOCAL_LLM_MODEL"]);
    }

    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn google_key(&self) -> Option<&str> {
        non_blank(&self.google_api_key)
    }

    pub fn qwen_key(&self) -> Option<&str> {
        non_blank(&self.qwen_api_key)
    }

    pub fn openai_key(&self) -> Option<&str> {
        non_blank(&self.openai_api_key)
    }

    pub fn local_url(&self) -> Option<&str> {
        non_blank(&self.local_base_url)
    }

    pub fn gemini_model(&self) -> &str {
        non_blank(&self.gemini_model).unwrap_or(DEFAULT_GEMINI_MODEL)
    }

    pub fn gemini_base_url(&self) -> &str {
        non_blank(&self.gemini_base_url).unwrap_or(DEFAULT_GEMINI_BASE_URL)
    }

    pub fn qwen_model(&self) -> &str {
        non_blank(&self.qwen_model).unwrap_or(DEFAULT_QWEN_MODEL)
    }

    pub fn qwen_base_url(&self) -> &str {
        non_blank(&self.qwen_base_url).unwrap_or(DEFAULT_QWEN_BASE_URL)
    }

    pub fn openai_model(&self) -> &str {
        non_blank(&self.openai_model).unwrap_or(DEFAULT_OPENAI_MODEL)
    }

    pub fn openai_base_url(&self) -> &str {
        non_blank(&self.openai_base_url).unwrap_or(DEFAULT_OPENAI_BASE_URL)
    }

    pub fn local_model(&self) -> &str {
        non_blank(&self.local_model).unwrap_or(DEFAULT_LOCAL_MODEL)
    }

    /// Longest one LLM call can take: every attempt timing out, with the
    /// longest wait between attempts.
    pub fn worst_case_call_secs(&self) -> u64 {
        let attempts = u64::from(self.max_retries).saturating_add(1);
        let waits = u64::from(self.max_retries).saturating_mul(MAX_RETRY_DELAY_SECS);
        self.timeout_secs.saturating_mul(attempts).saturating_add(waits)
    }

    /// Validate LLM configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 600 {
            return Err(ValidationError::InvalidLlmTimeout);
        }

        let urls = [
            ("llm.gemini_base_url", Some(self.gemini_base_url())),
            ("llm.qwen_base_url", Some(self.qwen_base_url())),
            ("llm.openai_base_url", Some(self.openai_base_url())),
            ("llm.local_base_url", self.local_url()),
        ];
        for (field, url) in urls {
            if let Some(url) = url {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ValidationError::InvalidUrl {
                        field,
                        value: url.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn redact(value: &Option<String>) -> &'static str {
    if non_blank(value).is_some() {
        "[set]"
    } else {
        "[unset]"
    }
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("google_api_key", &redact(&self.google_api_key))
            .field("gemini_model", &self.gemini_model())
            .field("qwen_api_key", &redact(&self.qwen_api_key))
            .field("qwen_model", &self.qwen_model())
            .field("qwen_base_url", &self.qwen_base_url())
            .field("openai_api_key", &redact(&self.openai_api_key))
            .field("openai_model", &self.openai_model())
            .field("local_base_url", &self.local_base_url)
            .field("local_model", &self.local_model())
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            gemini_model: None,
            gemini_base_url: None,
            qwen_api_key: None,
            qwen_model: None,
            qwen_base_url: None,
            openai_api_key: None,
            openai_model: None,
            openai_base_url: None,
            local_base_url: None,
            local_model: None,
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
        }
    }
}

fn default_timeout() -> u64 {
    20
}

fn default_retries() -> u32 {
    2
}
