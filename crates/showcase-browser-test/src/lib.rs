//! Chrome plumbing for the showcase site's end-to-end scenarios.
//!
//! The crate knows nothing about features or steps. It launches a browser
//! per scenario, loads pages, waits for them to reach a state and answers
//! read-only DOM questions through [`DomQuery`]. Assertions built on top of
//! those answers live in `showcase-e2e`.
//!
//! | module | role |
//! |---|---|
//! | [`wait`] | fixed-cadence poller with a time budget |
//! | [`retry`] | exponential backoff for flaky operations |
//! | [`viewport`] | mobile, tablet and desktop sizes |
//! | [`selectors`] | forgiving selectors for the site's sections |
//! | [`browser`], [`page`] | one Chrome process and one tab per scenario |
//! | [`server`] | where the site is served and whether it answers |
//!
//! ```ignore
//! use showcase_browser_test::{DomQuery, Selectors, TestBrowser, TestBrowserConfig, WaitConfig};
//!
//! let browser = TestBrowser::launch(TestBrowserConfig::default()).await?;
//! let page = browser.new_page().await?;
//! page.navigate("http://localhost:4200/").await?;
//! page.wait_for_visible(&Selectors::nav_menu(), WaitConfig::default()).await?;
//! assert!(page.count(&Selectors::nav_link("About")).await? > 0);
//! browser.close().await?;
//! ```
//!
//! Unit tests run on paused tokio time. Tests that need Chrome are
//! `#[ignore]`d; run them with `cargo test -- --ignored`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod browser;
pub mod error;
pub mod page;
pub mod query;
pub mod retry;
pub mod selectors;
pub mod server;
pub mod viewport;
pub mod wait;

pub use browser::{TestBrowser, TestBrowserConfig};
pub use error::{BrowserError, Result};
pub use page::{Page, PageWaits};
pub use query::DomQuery;
pub use retry::{retry_with_backoff, RetryPolicy, DEFAULT_BASE_DELAY, DEFAULT_MAX_ATTEMPTS};
pub use selectors::{class_contains, id_contains, site, Selector, Selectors};
pub use server::{DevServer, StaticUrlServer, DEFAULT_BASE_URL};
pub use viewport::{UnknownPreset, Viewport, ViewportPreset};
pub use wait::{
    wait_for, wait_for_condition, wait_for_result, WaitConfig, DEFAULT_POLL_INTERVAL,
    DEFAULT_TIMEOUT, NAVIGATION_TIMEOUT,
};
