//! Retry with exponential backoff.
//!
//! Attempt `i` (zero-based) that fails is followed by a sleep of
//! `base_delay * 2^i` when another attempt remains. The last attempt is never
//! followed by a sleep, so a policy of `N` attempts that always fails spends
//! `base_delay * (2^0 + ... + 2^(N-2))` waiting.
//!
//! The wrapped operation may run several times. It must be safe to repeat.

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Default number of attempts.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default delay before the second attempt (1 second).
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);

/// How many times to try an operation and how long to back off in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl RetryPolicy {
    /// Creates a policy. `max_attempts` below 1 is raised to 1.
    #[must_use]
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    /// Number of attempts the policy allows.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before the second attempt.
    #[must_use]
    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    /// Delay that follows failed attempt `attempt` (zero-based).
    ///
    /// Saturates at `Duration::MAX` instead of overflowing.
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        match 1u32.checked_shl(attempt) {
            Some(factor) => self.base_delay.checked_mul(factor).unwrap_or(Duration::MAX),
            None if self.base_delay.is_zero() => Duration::ZERO,
            None => Duration::MAX,
        }
    }

    /// Total time spent sleeping when every attempt fails.
    #[must_use]
    pub fn total_backoff(&self) -> Duration {
        (0..self.max_attempts - 1)
            .map(|attempt| self.delay_for(attempt))
            .fold(Duration::ZERO, Duration::saturating_add)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_BASE_DELAY)
    }
}

/// Runs `operation` until it succeeds or the policy's attempts run out.
///
/// # Errors
///
/// Returns the error from the final attempt, unchanged.
///
/// # Example
///
/// ```ignore
/// let title = retry_with_backoff(|| page.title(), RetryPolicy::default()).await?;
/// ```
pub async fn retry_with_backoff<T, E, F, Fut>(mut operation: F, policy: RetryPolicy) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt + 1 >= policy.max_attempts => {
                debug!(attempts = attempt + 1, error = %e, "retries exhausted");
                return Err(e);
            }
            Err(e) => {
                let delay = policy.delay_for(attempt);
                debug!(attempt = attempt + 1, ?delay, error = %e, "attempt failed, backing off");
                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
