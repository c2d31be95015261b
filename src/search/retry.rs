// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Exponential backoff with jitter for search provider calls

use rand::Rng;
use std::future::Future;
use std::time::Duration;
use tracing::{error, warn};

use super::config::SearchConfig;
use super::types::SearchError;

/// Retry policy for transient search provider errors
///
/// The delay before retry `attempt` (0-based) is
/// `initial_delay * 2^attempt + U(0, max_jitter)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_jitter: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, initial_delay: Duration) -> Self {
        Self {
            max_attempts,
            initial_delay,
            max_jitter: Duration::from_secs(1),
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.max_attempts, config.initial_delay())
    }

    /// Delay after failed attempt `attempt` for a jitter fraction in `[0, 1)`
    pub fn delay_for(&self, attempt: u32, jitter_fraction: f64) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.initial_delay.saturating_mul(factor) + self.max_jitter.mul_f64(jitter_fraction)
    }

    /// Jitter is drawn in whole milliseconds to match the timer resolution
    fn jittered_delay(&self, attempt: u32) -> Duration {
        let steps = self.max_jitter.as_millis().max(1) as u64;
        let fraction = rand::thread_rng().gen_range(0..steps) as f64 / steps as f64;
        self.delay_for(attempt, fraction)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(5, Duration::from_secs(1))
    }
}

/// Run `operation` until it succeeds, fails fatally, or attempts run out
///
/// Only errors for which [`SearchError::is_retryable`] holds are retried.
/// The error of the last attempt is returned without a trailing sleep.
pub async fn retry_with_backoff<T, F, Fut>(
    policy: &RetryPolicy,
    mut operation: F,
) -> Result<T, SearchError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, SearchError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if !e.is_retryable() => return Err(e),
            Err(e) if attempt + 1 >= max_attempts => {
                error!("Search failed after {} attempts: {}", max_attempts, e);
                return Err(e);
            }
            Err(e) => {
                let delay = policy.jittered_delay(attempt);
                warn!(
                    "Search attempt {}/{} failed: {}, retrying in {:.2}s",
                    attempt + 1,
                    max_attempts,
                    e,
                    delay.as_secs_f64()
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
