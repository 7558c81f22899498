//! Errors raised by page checks and harness setup.

use showcase_browser_test::BrowserError;
use thiserror::Error;

/// Why a check failed.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The page was reachable but did not look the way the scenario
    /// expects.
    #[error("assertion failed: {0}")]
    Assertion(String),

    /// A browser operation failed, including poller timeouts and
    /// exhausted retries. Passed through unchanged.
    #[error(transparent)]
    Browser(#[from] BrowserError),

    /// The harness configuration could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// A step ran past its time budget.
    #[error("step did not finish within {}ms", .0.as_millis())]
    StepTimeout(std::time::Duration),
}

impl CheckError {
    /// Builds an assertion failure.
    pub fn assertion(message: impl Into<String>) -> Self {
        CheckError::Assertion(message.into())
    }
}

impl From<figment::Error> for CheckError {
    fn from(e: figment::Error) -> Self {
        CheckError::Config(Box::new(e))
    }
}

/// Result of a page check.
pub type CheckResult<T = ()> = std::result::Result<T, CheckError>;
