//! Harness configuration with multi-source loading.
//!
//! Merges built-in defaults, an optional `site-e2e.toml`, and
//! `SITE_E2E_*` environment variables.
//! Priority: Environment > File > Defaults

use crate::error::CheckResult;
use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use showcase_browser_test::{
    PageWaits, RetryPolicy, StaticUrlServer, TestBrowserConfig, Viewport, WaitConfig,
    DEFAULT_BASE_URL,
};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "site-e2e.toml";

/// Prefix of environment overrides (`SITE_E2E_BASE_URL`, ...).
pub const ENV_PREFIX: &str = "SITE_E2E_";

/// Switch that enables the browser-driven suite.
pub const ENABLE_VAR: &str = "SITE_E2E";

/// Reads an environment variable, falling back to `default` when it is
/// unset or empty.
#[must_use]
pub fn env_var(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Whether the browser-driven suite should run.
#[must_use]
pub fn suite_enabled() -> bool {
    matches!(
        env_var(ENABLE_VAR, "").to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Contact details typed into forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestUser {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Default for TestUser {
    fn default() -> Self {
        Self {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            phone: "123-456-7890".to_string(),
        }
    }
}

/// Everything a scenario needs to know about the site and its budgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Where the site is served.
    pub base_url: String,

    pub timeout_short_ms: u64,
    pub timeout_medium_ms: u64,
    /// Budget for "should be visible" checks.
    pub timeout_long_ms: u64,
    pub navigation_timeout_ms: u64,
    pub wait_for_element_ms: u64,
    pub poll_interval_ms: u64,

    /// Budget for a whole step.
    pub step_timeout_ms: u64,

    pub max_retries: u32,
    pub retry_delay_ms: u64,

    /// Where screenshots are written.
    pub screenshot_dir: PathBuf,

    pub headless: bool,
    pub chrome_path: Option<String>,

    /// Scenarios run concurrently, each with its own browser.
    pub parallel: usize,

    /// Check the site's port accepts connections before each navigation.
    pub check_port: bool,

    pub test_user: TestUser,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_short_ms: 3_000,
            timeout_medium_ms: 5_000,
            timeout_long_ms: 10_000,
            navigation_timeout_ms: 15_000,
            wait_for_element_ms: 5_000,
            poll_interval_ms: 100,
            step_timeout_ms: 20_000,
            max_retries: 3,
            retry_delay_ms: 1_000,
            screenshot_dir: PathBuf::from("test-results"),
            headless: true,
            chrome_path: None,
            parallel: 2,
            check_port: true,
            test_user: TestUser::default(),
        }
    }
}

impl SiteConfig {
    /// Loads configuration from defaults, `config_path` (or
    /// `site-e2e.toml` when it exists) and the environment.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Config` when a source has the wrong shape.
    pub fn load(config_path: Option<&Path>) -> CheckResult<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = config_path.map(Path::to_path_buf).or_else(|| {
            let default_path = Path::new(CONFIG_FILE);
            default_path.exists().then(|| default_path.to_path_buf())
        });

        if let Some(path) = config_file {
            tracing::debug!(path = %path.display(), "loading harness config");
            figment = figment.merge(Toml::file(path));
        }

        // SITE_E2E_TEST_USER__EMAIL reaches test_user.email
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        Ok(figment.extract()?)
    }

    /// Absolute URL of a route on the site.
    #[must_use]
    pub fn url(&self, route: Route) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), route.path())
    }

    pub fn timeout_short(&self) -> Duration {
        Duration::from_millis(self.timeout_short_ms)
    }

    pub fn timeout_medium(&self) -> Duration {
        Duration::from_millis(self.timeout_medium_ms)
    }

    pub fn timeout_long(&self) -> Duration {
        Duration::from_millis(self.timeout_long_ms)
    }

    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_millis(self.navigation_timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn step_timeout(&self) -> Duration {
        Duration::from_millis(self.step_timeout_ms)
    }

    /// Poller settings for visibility checks.
    #[must_use]
    pub fn visibility_wait(&self) -> WaitConfig {
        WaitConfig::new(self.timeout_long(), self.poll_interval())
    }

    /// Poller settings for waiting on an element to exist.
    #[must_use]
    pub fn element_wait(&self) -> WaitConfig {
        WaitConfig::new(
            Duration::from_millis(self.wait_for_element_ms),
            self.poll_interval(),
        )
    }

    /// Poller settings for page loads.
    #[must_use]
    pub fn navigation_wait(&self) -> WaitConfig {
        WaitConfig::new(self.navigation_timeout(), self.poll_interval())
    }

    /// Poller settings for short-lived conditions such as a URL change
    /// after a click.
    #[must_use]
    pub fn condition_wait(&self) -> WaitConfig {
        WaitConfig::new(self.timeout_medium(), self.poll_interval())
    }

    /// Budgets for the waits built into page actions.
    #[must_use]
    pub fn page_waits(&self) -> PageWaits {
        PageWaits {
            load: self.navigation_wait(),
            element: self.element_wait(),
        }
    }

    /// Backoff policy for flaky operations such as the first navigation.
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries, Duration::from_millis(self.retry_delay_ms))
    }

    /// Handle on the site under test.
    #[must_use]
    pub fn server(&self) -> StaticUrlServer {
        let server = StaticUrlServer::new(self.base_url.clone());
        if self.check_port {
            server.with_port_check(self.timeout_short())
        } else {
            server
        }
    }

    /// Browser launch settings.
    #[must_use]
    pub fn browser_config(&self) -> TestBrowserConfig {
        let mut config = TestBrowserConfig::new().with_window_size(Viewport::DESKTOP);
        config.headless = self.headless;
        if let Some(path) = &self.chrome_path {
            config = config.with_chrome_path(path.clone());
        }
        config
    }
}

/// Pages of the showcase site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Gallery,
    Services,
    Clients,
    Testimonials,
    Pricing,
    /// A path the site does not serve, for the not-found page.
    NonExistent,
}

impl Route {
    /// Every page the site serves.
    pub const PAGES: [Route; 7] = [
        Route::Home,
        Route::About,
        Route::Gallery,
        Route::Services,
        Route::Clients,
        Route::Testimonials,
        Route::Pricing,
    ];

    /// Path relative to the base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Gallery => "/gallery",
            Route::Services => "/services",
            Route::Clients => "/clients",
            Route::Testimonials => "/testimonials",
            Route::Pricing => "/pricing",
            Route::NonExistent => "/non-existent-page-12345",
        }
    }

    /// Name used in feature files and navigation links.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::About => "about",
            Route::Gallery => "gallery",
            Route::Services => "services",
            Route::Clients => "clients",
            Route::Testimonials => "testimonials",
            Route::Pricing => "pricing",
            Route::NonExistent => "non-existent",
        }
    }

    /// Text of the navigation link pointing at this route.
    #[must_use]
    pub fn link_text(self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a page name is not one of the site's routes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page '{0}'")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Route::PAGES
            .into_iter()
            .chain([Route::NonExistent])
            .find(|route| route.name() == wanted)
            .ok_or_else(|| UnknownRoute(s.to_string()))
    }
}
