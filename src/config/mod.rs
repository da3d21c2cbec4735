//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DETECTIVE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use detective_game::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod game;
mod llm;
mod server;

pub use error::{ConfigError, ValidationError};
pub use game::GameConfig;
pub use llm::{LlmConfig, MAX_RETRY_DELAY_SECS};
pub use server::{LogFormat, ServerConfig};

use serde::Deserialize;

/// Dotenv file with provider credentials, loaded after `.env` and overriding it.
pub const PROVIDER_ENV_FILE: &str = "qwen.env";

/// Sequential LLM calls behind one request (a question: reply, then score).
pub const LLM_CALLS_PER_REQUEST: u64 = 2;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration that plays with the scripted game master.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, logging, static assets)
    #[serde(default)]
    pub server: ServerConfig,

    /// LLM provider configuration
    #[serde(default)]
    pub llm: LlmConfig,

    /// Game rules
    #[serde(default)]
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env`, then `qwen.env` (overriding), if present
    /// 2. Reads environment variables with `DETECTIVE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Fills unset provider keys from the vendors' own variables
    ///
    /// # Environment Variable Format
    ///
    /// - `DETECTIVE__SERVER__PORT=9000` -> `server.port = 9000`
    /// - `DETECTIVE__LLM__OPENAI_MODEL=gpt-4o` -> `llm.openai_model = gpt-4o`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        dotenvy::from_filename_override(PROVIDER_ENV_FILE).ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DETECTIVE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.llm.apply_provider_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// The LLM calls of one request, retries included, must fit inside the
    /// server's request timeout.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.llm.validate()?;
        self.game.validate()?;

        let budget_secs = self
            .llm
            .worst_case_call_secs()
            .saturating_mul(LLM_CALLS_PER_REQUEST);
        if budget_secs > self.server.request_timeout_secs {
            return Err(ValidationError::LlmBudgetExceedsRequestTimeout {
                budget_secs,
                request_timeout_secs: self.server.request_timeout_secs,
            });
        }
        Ok(())
    }
}
