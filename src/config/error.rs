//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid LLM timeout")]
    InvalidLlmTimeout,

    #[error("Invalid URL for {field}: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error(
        "LLM calls may take {budget_secs}s, longer than the {request_timeout_secs}s request timeout"
    )]
    LlmBudgetExceedsRequestTimeout {
        budget_secs: u64,
        request_timeout_secs: u64,
    },

    #[error("Suspect bounds are inconsistent: min {min}, default {default}, max {max}")]
    InvalidSuspectBounds { min: usize, default: usize, max: usize },
}
