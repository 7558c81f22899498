//! The site under test.
//!
//! The harness never starts the site itself; it only needs to know where
//! it is served and whether it is up. [`DevServer`] is that seam, and
//! [`StaticUrlServer`] covers the usual case of a dev server that is
//! already running (`ng serve` on port 4200).

use crate::error::{BrowserError, Result};
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Base URL of the site when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4200";

/// A running server that pages can navigate to.
#[async_trait]
pub trait DevServer: Send + Sync {
    /// Returns the base URL of the server (e.g., `<http://localhost:4200>`).
    fn base_url(&self) -> &str;

    /// Checks that the server is reachable before navigating.
    ///
    /// The default implementation assumes the server is healthy.
    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    /// `path` resolved against the base URL, with exactly one slash between.
    ///
    /// ```ignore
    /// server.url("/gallery") // "http://localhost:4200/gallery"
    /// ```
    fn url(&self, path: &str) -> String {
        let base = self.base_url().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl fmt::Debug for dyn DevServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DevServer")
            .field("base_url", &self.base_url())
            .finish()
    }
}

/// A server that is already running at a fixed URL.
#[derive(Debug, Clone)]
pub struct StaticUrlServer {
    base_url: String,
    connect_timeout: Option<Duration>,
}

impl StaticUrlServer {
    /// Creates a server handle for `base_url` with no health check.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: None,
        }
    }

    /// Checks that the server's host and port accept a TCP connection
    /// before each navigation.
    #[must_use]
    pub fn with_port_check(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }

    /// `host:port` of the base URL, defaulting the port from the scheme.
    #[must_use]
    pub fn authority(&self) -> Option<String> {
        let (scheme, rest) = self.base_url.split_once("://")?;
        let host_port = rest.split(['/', '?', '#']).next()?;
        if host_port.is_empty() {
            return None;
        }
        if host_port.rsplit_once(':').is_some_and(|(_, port)| port.parse::<u16>().is_ok()) {
            return Some(host_port.to_string());
        }
        let port = match scheme {
            "https" => 443,
            _ => 80,
        };
        Some(format!("{host_port}:{port}"))
    }
}

impl Default for StaticUrlServer {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl DevServer for StaticUrlServer {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn health_check(&self) -> Result<()> {
        let Some(connect_timeout) = self.connect_timeout else {
            return Ok(());
        };
        let authority = self
            .authority()
            .ok_or_else(|| BrowserError::NavigationFailed {
                url: self.base_url.clone(),
                reason: "base URL has no host".to_string(),
            })?;

        match timeout(connect_timeout, TcpStream::connect(&authority)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(BrowserError::NavigationFailed {
                url: self.base_url.clone(),
                reason: format!("server not reachable at {authority}: {e}"),
            }),
            Err(_) => Err(BrowserError::NavigationFailed {
                url: self.base_url.clone(),
                reason: format!("no answer from {authority} within {connect_timeout:?}"),
            }),
        }
    }
}
