//! Bounded fixed-delay retry for provider calls.
//!
//! The system's only resilience mechanism: up to `max_attempts` tries with a
//! fixed pause between them, no backoff. Every failure kind is retried the
//! same way because at this layer a malformed model response cannot be told
//! apart from a transport fault.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::warn;

use trivia_config::PipelineConfig;

/// Retry behavior for one logical operation.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the initial one).
    pub max_attempts: u32,
    /// Fixed delay between attempts.
    pub delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

impl From<&PipelineConfig> for RetryConfig {
    fn from(config: &PipelineConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            delay: Duration::from_millis(config.retry_delay_ms),
        }
    }
}

/// Run `op` until it succeeds or the attempt budget is spent, sleeping the
/// fixed delay between attempts. The final error is returned as-is.
pub async fn retry<T, E, F, Fut>(config: &RetryConfig, op_name: &str, mut op: F) -> Result<T, E>
where
    E: Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(error) if attempt < max_attempts => {
                warn!(attempt, max_attempts, "{op_name} failed: {error}, retrying");
                tokio::time::sleep(config.delay).await;
                attempt += 1;
            }
            Err(error) => {
                warn!(attempt, "{op_name} failed, attempts exhausted");
                return Err(error);
            }
        }
    }
}
