//! Failures surfaced by the browser layer.
//!
//! The hierarchy separates failures of the browser process itself (launch,
//! CDP connection) from failures of the things a scenario asks for: a page
//! that does not load, a condition that never becomes true, an operation
//! that keeps failing after every retry.

use std::time::Duration;
use thiserror::Error;

/// Everything that can go wrong between a scenario and Chrome.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// Chrome could not be started, usually because no binary was found.
    #[error("could not start chrome: {reason}")]
    LaunchFailed {
        /// What went wrong, in words.
        reason: String,
        /// Lower-level cause, when there is one.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The DevTools connection rejected or dropped a command.
    #[error("devtools connection: {0}")]
    ConnectionFailed(String),

    /// A page did not load.
    #[error("could not load '{url}': {reason}")]
    NavigationFailed {
        /// Address that was requested.
        url: String,
        /// Failure reported by Chrome or the load wait.
        reason: String,
    },

    /// A polled condition did not become true within its time budget.
    ///
    /// The message always carries the configured timeout in milliseconds so
    /// that a failing scenario shows which budget ran out.
    #[error("condition '{condition}' not met within {}ms", .timeout.as_millis())]
    WaitTimeout {
        /// What was being waited for.
        condition: String,
        /// Budget that ran out.
        timeout: Duration,
    },

    /// A retried operation failed on every permitted attempt.
    #[error("operation failed after {attempts} attempts: {source}")]
    ExhaustedRetries {
        /// How many attempts were made
        attempts: u32,
        /// The error from the final attempt
        #[source]
        source: Box<BrowserError>,
    },

    /// A script evaluated in the page threw or returned something unusable.
    #[error("page script failed: {0}")]
    ScriptExecutionFailed(String),

    /// No element matched a selector that an action needed.
    #[error("no element matches '{0}'")]
    ElementNotFound(String),

    /// The browser was used after `close`.
    #[error("browser already closed")]
    AlreadyClosed,

    /// Raw protocol error from chromiumoxide.
    #[error(transparent)]
    ChromiumOxide(#[from] chromiumoxide::error::CdpError),

    /// Writing a screenshot or touching a profile directory failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl BrowserError {
    /// Returns true if this error is a poller timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, BrowserError::WaitTimeout { .. })
    }
}

/// Result alias for the browser layer.
pub type Result<T> = std::result::Result<T, BrowserError>;
