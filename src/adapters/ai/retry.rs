//! Retry with exponential backoff for provider calls.

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

use crate::config::MAX_RETRY_DELAY_SECS;
use crate::ports::AIError;

/// How often and how patiently to retry a failed completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Delay before the first retry; doubles each time (1s, 2s, 4s, ...).
    pub base_delay: Duration,
    /// Upper bound on any single wait, including a provider's `Retry-After`.
    pub max_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(MAX_RETRY_DELAY_SECS),
        }
    }

    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Backoff before retry number `retry_count` (0-based).
    pub fn delay_for(&self, retry_count: u32) -> Duration {
        self.base_delay
            .saturating_mul(1u32 << retry_count.min(16))
            .min(self.max_delay)
    }

    /// Wait before retrying after `err`. A rate limit's `retry_after_secs`
    /// stretches the backoff, never beyond `max_delay`.
    pub fn delay_after(&self, err: &AIError, retry_count: u32) -> Duration {
        let backoff = self.delay_for(retry_count);
        match err {
            AIError::RateLimited { retry_after_secs } => backoff
                .max(Duration::from_secs(u64::from(*retry_after_secs)))
                .min(self.max_delay),
            _ => backoff,
        }
    }

    /// Runs `attempt` until it succeeds, fails with a non-retryable error,
    /// or the retries are used up.
    pub async fn run<T, F, Fut>(&self, provider: &str, mut attempt: F) -> Result<T, AIError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, AIError>>,
    {
        let mut retry_count = 0;

        loop {
            match attempt().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    if !err.is_retryable() || retry_count >= self.max_retries {
                        return Err(err);
                    }

                    let delay = self.delay_after(&err, retry_count);
                    tracing::warn!(
                        provider,
                        error = %err,
                        retry = retry_count + 1,
                        max_retries = self.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        "LLM request failed, retrying"
                    );
                    sleep(delay).await;
                    retry_count += 1;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(2)
    }
}
