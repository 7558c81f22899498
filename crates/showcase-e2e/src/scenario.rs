//! Per-scenario browser ownership.
//!
//! A [`ScenarioContext`] is created by the `before` hook, lent to every step
//! of its scenario through the cucumber world, and consumed by the `after`
//! hook. Nothing about the browser lives in a global.

use crate::checks::PageChecks;
use crate::config::{Route, SiteConfig};
use crate::error::{CheckError, CheckResult};
use showcase_browser_test::{
    retry_with_backoff, wait_for_result, BrowserError, DevServer, DomQuery, Page, RetryPolicy,
    Selector, Selectors, StaticUrlServer, TestBrowser, Viewport, ViewportPreset,
};
use std::future::Future;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// One browser and one page, owned for the length of a scenario.
#[derive(Debug)]
pub struct ScenarioContext {
    browser: TestBrowser,
    page: Page,
    server: StaticUrlServer,
    config: SiteConfig,
    viewport: Viewport,
}

impl ScenarioContext {
    /// Launches a browser and opens the scenario's page.
    ///
    /// # Errors
    ///
    /// Returns the launch or page-creation error. A browser that launched
    /// but could not open a page is closed before returning.
    pub async fn setup(config: &SiteConfig) -> CheckResult<Self> {
        let browser_config = config.browser_config();
        let viewport = browser_config.window_size;
        let browser = TestBrowser::launch(browser_config).await?;

        let page = match browser.new_page().await {
            Ok(page) => page.with_waits(config.page_waits()),
            Err(e) => {
                if let Err(close_err) = browser.close().await {
                    warn!(error = %close_err, "failed to close browser after setup error");
                }
                return Err(e.into());
            }
        };

        debug!(base_url = %config.base_url, "scenario context ready");
        Ok(Self {
            browser,
            page,
            server: config.server(),
            config: config.clone(),
            viewport,
        })
    }

    /// Closes the page, then the browser.
    ///
    /// Both are attempted even if the first fails; the first error wins.
    ///
    /// # Errors
    ///
    /// Returns the first close error.
    pub async fn teardown(self) -> CheckResult {
        let page_closed = self.page.close().await;
        if let Err(e) = &page_closed {
            warn!(error = %e, "failed to close page");
        }
        let browser_closed = self.browser.close().await;
        if let Err(e) = &browser_closed {
            warn!(error = %e, "failed to close browser");
        }
        page_closed?;
        browser_closed?;
        Ok(())
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Viewport last applied to the page.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Checks against the current page with the configured visibility
    /// budget.
    pub fn checks(&self) -> PageChecks<'_, Page> {
        PageChecks::new(&self.page, self.config.visibility_wait())
    }

    /// Opens `route`, retrying with backoff while the site warms up.
    ///
    /// # Errors
    ///
    /// `ExhaustedRetries` carrying the last health-check or navigation
    /// error when no attempt got through.
    pub async fn navigate(&self, route: Route) -> CheckResult {
        let url = self.config.url(route);
        info!(%route, %url, "navigating");
        let url = url.as_str();
        open_when_ready(&self.server, self.config.retry_policy(), || {
            self.page.navigate(url)
        })
        .await
    }

    /// Emulates `preset`, then opens `route`.
    ///
    /// # Errors
    ///
    /// See [`set_viewport`](Self::set_viewport) and
    /// [`navigate`](Self::navigate).
    pub async fn navigate_with_viewport(&mut self, route: Route, preset: ViewportPreset) -> CheckResult {
        self.set_viewport(preset).await?;
        self.navigate(route).await
    }

    /// Resizes the page to a preset.
    ///
    /// # Errors
    ///
    /// Returns the CDP error when emulation fails.
    pub async fn set_viewport(&mut self, preset: ViewportPreset) -> CheckResult {
        let viewport = preset.viewport();
        self.page.set_viewport(viewport).await?;
        self.viewport = viewport;
        debug!(%preset, %viewport, "viewport set");
        Ok(())
    }

    /// Clicks the navigation link for `route` and waits for the new page.
    ///
    /// # Errors
    ///
    /// `WaitTimeout` when the link never appears or the URL never reaches
    /// the route.
    pub async fn click_nav_link(&self, route: Route) -> CheckResult {
        let link = Selectors::nav_link(&route.link_text());
        self.page.click_and_wait_for_load(&link).await?;

        let page = &self.page;
        let path = route.path();
        wait_for_result(
            move || page.url_contains(path),
            self.config.condition_wait(),
            &format!("url to reach {path}"),
        )
        .await?;
        Ok(())
    }

    /// Clicks the first element matching `css`.
    ///
    /// # Errors
    ///
    /// `WaitTimeout` when nothing matches in time.
    pub async fn click(&self, css: &str) -> CheckResult {
        self.page.click(&Selector::css(css)).await?;
        Ok(())
    }

    /// Scrolls the first element matching `selector` into view.
    ///
    /// # Errors
    ///
    /// `ElementNotFound` when nothing matches.
    pub async fn scroll_into_view(&self, selector: &Selector) -> CheckResult {
        self.page.scroll_into_view(selector).await?;
        Ok(())
    }

    /// Scrolls to the end of the document.
    ///
    /// # Errors
    ///
    /// Returns the script error when the scroll fails.
    pub async fn scroll_to_bottom(&self) -> CheckResult {
        self.page.scroll_to_bottom().await?;
        Ok(())
    }

    /// Saves a PNG of the page as `<screenshot_dir>/<name>.png`.
    ///
    /// # Errors
    ///
    /// Returns the capture or write error.
    pub async fn screenshot(&self, name: &str) -> CheckResult<PathBuf> {
        let path = self
            .page
            .save_screenshot(&self.config.screenshot_dir, name)
            .await?;
        info!(path = %path.display(), "screenshot saved");
        Ok(path)
    }

    /// Runs a step body under the configured step budget.
    ///
    /// # Errors
    ///
    /// `StepTimeout` when the body overruns, otherwise whatever the body
    /// returned.
    pub async fn within<T, F>(&self, step: F) -> CheckResult<T>
    where
        F: Future<Output = CheckResult<T>>,
    {
        within_budget(self.config.step_timeout(), step).await
    }
}

/// Health-checks `server` and then runs `open`, retrying the pair with
/// backoff so a site that is still starting gets the whole policy.
///
/// # Errors
///
/// `ExhaustedRetries` wrapping the error of the last attempt.
pub async fn open_when_ready<S, F, Fut>(server: &S, policy: RetryPolicy, open: F) -> CheckResult
where
    S: DevServer + ?Sized,
    F: Fn() -> Fut,
    Fut: Future<Output = showcase_browser_test::Result<()>>,
{
    let open = &open;
    retry_with_backoff(
        move || async move {
            server.health_check().await?;
            open().await
        },
        policy,
    )
    .await
    .map_err(|last| BrowserError::ExhaustedRetries {
        attempts: policy.max_attempts(),
        source: Box::new(last),
    })?;
    Ok(())
}

/// Runs `step`, failing with `StepTimeout` if it takes longer than `budget`.
///
/// # Errors
///
/// `StepTimeout` on overrun, otherwise the step's own result.
pub async fn within_budget<T, F>(budget: std::time::Duration, step: F) -> CheckResult<T>
where
    F: Future<Output = CheckResult<T>>,
{
    tokio::time::timeout(budget, step)
        .await
        .map_err(|_| CheckError::StepTimeout(budget))?
}
