//! Launching and shutting down the Chrome instance a scenario drives.
//!
//! Every scenario gets its own [`TestBrowser`] with a throwaway profile, so
//! scenarios running side by side never share cookies, storage or tabs.
//! The CDP event stream is pumped on a spawned task for as long as the
//! browser lives.
//!
//! Call [`TestBrowser::close`] at the end of a scenario. Dropping the handle
//! still kills Chrome, but nothing waits for the process to exit and shutdown
//! errors are lost.

use crate::error::{BrowserError, Result};
use crate::page::Page;
use crate::viewport::Viewport;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Flags every scenario browser starts with. Containers rarely offer the
/// user namespaces Chrome's sandbox needs, and `/dev/shm` is often tiny.
const CONTAINER_FLAGS: [&str; 2] = ["--no-sandbox", "--disable-dev-shm-usage"];

/// How a scenario browser is started.
#[derive(Debug, Clone)]
pub struct TestBrowserConfig {
    /// No window is shown. Off when the crate's `visible` feature is enabled.
    pub headless: bool,
    /// Size of the first window; pages can resize later.
    pub window_size: Viewport,
    /// Extra command-line flags.
    pub args: Vec<String>,
    /// Chrome binary to run instead of the one chromiumoxide finds.
    pub chrome_path: Option<String>,
}

impl TestBrowserConfig {
    /// Same as [`Default::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a real window so a run can be watched.
    #[must_use]
    pub fn visible(mut self) -> Self {
        self.headless = false;
        self
    }

    /// Sets the size of the first window.
    #[must_use]
    pub fn with_window_size(mut self, viewport: Viewport) -> Self {
        self.window_size = viewport;
        self
    }

    /// Appends flags after the container defaults.
    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args.extend(args);
        self
    }

    /// Uses this Chrome binary.
    #[must_use]
    pub fn with_chrome_path(mut self, path: impl Into<String>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }

    /// Window size flag followed by the extra flags. The profile directory
    /// and headless switch are chosen at launch.
    #[must_use]
    pub fn chrome_args(&self) -> Vec<String> {
        std::iter::once(format!(
            "--window-size={},{}",
            self.window_size.width, self.window_size.height
        ))
        .chain(self.args.iter().cloned())
        .collect()
    }

    #[allow(clippy::result_large_err)]
    fn build(&self, profile_dir: &std::path::Path) -> Result<BrowserConfig> {
        let mut builder = BrowserConfig::builder()
            .arg(format!("--user-data-dir={}", profile_dir.display()))
            .args(self.chrome_args());

        if !self.headless {
            builder = builder.with_head();
        }
        if let Some(path) = &self.chrome_path {
            builder = builder.chrome_executable(path);
        }

        builder.build().map_err(|reason| BrowserError::LaunchFailed {
            reason: format!("rejected browser settings: {reason}"),
            source: None,
        })
    }
}

impl Default for TestBrowserConfig {
    fn default() -> Self {
        Self {
            headless: !cfg!(feature = "visible"),
            window_size: Viewport::DESKTOP,
            args: CONTAINER_FLAGS.iter().map(ToString::to_string).collect(),
            chrome_path: None,
        }
    }
}

/// One Chrome process owned by one scenario.
///
/// ```ignore
/// let browser = TestBrowser::launch(TestBrowserConfig::default()).await?;
/// let page = browser.new_page().await?;
/// page.navigate("http://localhost:4200/").await?;
/// browser.close().await?;
/// ```
pub struct TestBrowser {
    chrome: Arc<Mutex<Option<Browser>>>,
    profile_dir: PathBuf,
}

impl TestBrowser {
    /// Starts Chrome with a fresh profile directory.
    ///
    /// # Errors
    ///
    /// `LaunchFailed` when the settings are rejected or Chrome cannot be
    /// started, typically because no binary was found.
    pub async fn launch(config: TestBrowserConfig) -> Result<Self> {
        let profile_dir = std::env::temp_dir().join(format!(
            "showcase-browser-test-{}",
            uuid::Uuid::new_v4()
        ));
        debug!(
            headless = config.headless,
            window = %config.window_size,
            profile = %profile_dir.display(),
            "starting chrome"
        );

        let (chrome, mut events) = Browser::launch(config.build(&profile_dir)?)
            .await
            .map_err(|e| BrowserError::LaunchFailed {
                reason: "chrome did not start".to_string(),
                source: Some(Box::new(e)),
            })?;

        // CDP replies are only delivered while this stream is polled.
        tokio::spawn(async move {
            while let Some(event) = events.next().await {
                if let Err(error) = event {
                    warn!(%error, "cdp event stream error");
                }
            }
        });

        Ok(Self {
            chrome: Arc::new(Mutex::new(Some(chrome))),
            profile_dir,
        })
    }

    /// Opens a blank tab.
    ///
    /// # Errors
    ///
    /// `AlreadyClosed` after [`close`](Self::close), `ConnectionFailed` when
    /// Chrome refuses the new target.
    pub async fn new_page(&self) -> Result<Page> {
        let guard = self.chrome.lock().await;
        let chrome = guard.as_ref().ok_or(BrowserError::AlreadyClosed)?;
        let tab = chrome
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))?;
        Ok(Page::new(tab))
    }

    /// Asks Chrome to quit, waits for the process and removes the profile.
    ///
    /// # Errors
    ///
    /// `ConnectionFailed` when the quit command cannot be delivered. A slow
    /// or unclean exit is only logged.
    pub async fn close(self) -> Result<()> {
        let Some(mut chrome) = self.chrome.lock().await.take() else {
            return Ok(());
        };

        debug!(profile = %self.profile_dir.display(), "shutting chrome down");
        chrome
            .close()
            .await
            .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))?;
        if let Err(error) = chrome.wait().await {
            warn!(%error, "chrome exited uncleanly");
        }
        if let Err(error) = tokio::fs::remove_dir_all(&self.profile_dir).await {
            debug!(%error, "profile directory left behind");
        }
        Ok(())
    }

    /// Whether [`close`](Self::close) already ran.
    pub async fn is_closed(&self) -> bool {
        self.chrome.lock().await.is_none()
    }
}

impl fmt::Debug for TestBrowser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.chrome.try_lock() {
            Ok(guard) if guard.is_some() => "open",
            Ok(_) => "closed",
            Err(_) => "busy",
        };
        f.debug_struct("TestBrowser")
            .field("state", &state)
            .field("profile_dir", &self.profile_dir)
            .finish()
    }
}

impl Drop for TestBrowser {
    fn drop(&mut self) {
        let still_open = self
            .chrome
            .try_lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false);
        if still_open {
            warn!("browser dropped while open; chrome is killed without a clean shutdown");
        }
    }
}
