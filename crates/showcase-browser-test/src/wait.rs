//! Polling until the page reaches a state.
//!
//! Scenarios wait on things the page does asynchronously: a banner
//! rendering, a route change, a lightbox opening. Everything here funnels
//! into one loop that evaluates a predicate, returns as soon as it holds,
//! and otherwise sleeps for a fixed poll interval until the time budget is
//! spent.
//!
//! Elapsed time is measured with [`tokio::time::Instant`], so tests can
//! drive the loop with paused virtual time.

use crate::error::{BrowserError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::trace;

/// Budget for an element to show up.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Pause between two evaluations.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Budget for a page load after navigation.
pub const NAVIGATION_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Time budget and cadence of one poll loop.
///
/// Nothing stops `poll_interval` from exceeding `timeout`; the condition is
/// then evaluated once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitConfig {
    pub timeout: Duration,

    pub poll_interval: Duration,
}

impl WaitConfig {
    #[must_use]
    pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
        }
    }

    /// `timeout` at the default cadence.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new(timeout, DEFAULT_POLL_INTERVAL)
    }

    /// Config used for page-load waits after navigation.
    #[must_use]
    pub fn navigation() -> Self {
        Self::with_timeout(NAVIGATION_TIMEOUT)
    }
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_POLL_INTERVAL)
    }
}

/// Evaluates `condition` until it yields `true` or the budget runs out.
///
/// The condition is evaluated while the elapsed time is below
/// `config.timeout`. The call that observes `true` returns immediately;
/// otherwise the loop sleeps `poll_interval` before the next evaluation.
///
/// # Errors
///
/// Returns [`BrowserError::WaitTimeout`] carrying `config.timeout` once the
/// budget is spent without the condition holding.
///
/// ```ignore
/// let banner = Selectors::header();
/// wait_for(|| page.is_visible(&banner), WaitConfig::default(), "header visible").await?;
/// ```
pub async fn wait_for<F, Fut>(condition: F, config: WaitConfig, description: &str) -> Result<()>
where
    F: Fn() -> Fut,
    Fut: Future<Output = bool>,
{
    let started = Instant::now();
    loop {
        let elapsed = started.elapsed();
        if elapsed >= config.timeout {
            break;
        }
        if condition().await {
            trace!(condition = description, ?elapsed, "condition met");
            return Ok(());
        }
        sleep(config.poll_interval).await;
    }

    Err(BrowserError::WaitTimeout {
        condition: description.to_string(),
        timeout: config.timeout,
    })
}

/// [`wait_for`] for fallible conditions.
///
/// Errors from the condition are treated like `false`: DOM lookups fail
/// transiently while a page is still rendering, so the loop keeps polling
/// until the budget runs out.
///
/// # Errors
///
/// Returns [`BrowserError::WaitTimeout`] when the condition never holds.
pub async fn wait_for_result<F, Fut>(
    condition: F,
    config: WaitConfig,
    description: &str,
) -> Result<()>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    wait_for(
        || {
            let check = condition();
            async move {
                match check.await {
                    Ok(met) => met,
                    Err(e) => {
                        trace!(condition = description, error = %e, "condition check failed");
                        false
                    }
                }
            }
        },
        config,
        description,
    )
    .await
}

/// Polls `condition` until it holds or `timeout` elapses.
///
/// Shorthand for [`wait_for`] with raw durations and a generic
/// description, for step code that has no better name for what it waits on.
///
/// # Errors
///
/// Returns [`BrowserError::WaitTimeout`] mentioning `timeout` in
/// milliseconds.
pub async fn wait_for_condition<F, Fut>(
    condition: F,
    timeout: Duration,
    poll_interval: Duration,
) -> Result<()>
where
    F: Fn() -> Fut,
    Fut: Future<Output = bool>,
{
    wait_for(condition, WaitConfig::new(timeout, poll_interval), "condition").await
}
