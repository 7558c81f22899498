//! Driving one tab of the site under test.
//!
//! [`Page`] wraps a chromiumoxide tab. Element access goes through small
//! JavaScript snippets built from a [`Selector`], so text-filtered and
//! substring-class selectors behave the same as in the scenario catalogue.

use crate::error::{BrowserError, Result};
use crate::query::DomQuery;
use crate::retry::{retry_with_backoff, RetryPolicy};
use crate::selectors::Selector;
use crate::server::DevServer;
use crate::viewport::Viewport;
use crate::wait::{wait_for, wait_for_result, WaitConfig};
use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams;
use chromiumoxide::page::{Page as ChromePage, ScreenshotParams};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Time given to scroll-triggered rendering (lazy images, sticky headers)
/// before the next step runs.
pub const SCROLL_SETTLE: Duration = Duration::from_millis(500);

/// Budgets a [`Page`] uses for the waits built into its actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWaits {
    /// Document load after navigating or following a link.
    pub load: WaitConfig,
    /// Element lookup before a click or fill.
    pub element: WaitConfig,
}

impl Default for PageWaits {
    fn default() -> Self {
        Self {
            load: WaitConfig::navigation(),
            element: WaitConfig::default(),
        }
    }
}

/// A browser tab owned by one scenario.
#[derive(Debug)]
pub struct Page {
    inner: ChromePage,
    waits: PageWaits,
}

impl Page {
    /// Wraps a chromiumoxide page. Created by `TestBrowser::new_page`.
    pub(crate) fn new(page: ChromePage) -> Self {
        Self {
            inner: page,
            waits: PageWaits::default(),
        }
    }

    /// Replaces the load and element budgets.
    #[must_use]
    pub fn with_waits(mut self, waits: PageWaits) -> Self {
        self.waits = waits;
        self
    }

    /// Budgets in effect.
    #[must_use]
    pub fn waits(&self) -> PageWaits {
        self.waits
    }

    /// Navigates to an absolute URL and waits for the document to finish
    /// loading.
    ///
    /// # Errors
    ///
    /// Returns `NavigationFailed` if the page fails to load, or
    /// `WaitTimeout` if it never reaches `readyState == "complete"`.
    pub async fn navigate(&self, url: &str) -> Result<()> {
        debug!(url, "navigating");
        self.inner
            .goto(url)
            .await
            .map_err(|e| BrowserError::NavigationFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        self.wait_for_load(self.waits.load).await
    }

    /// Opens `path` on `server` after checking the server answers.
    ///
    /// # Errors
    ///
    /// Returns an error if the health check or navigation fails.
    pub async fn navigate_to(&self, server: &dyn DevServer, path: &str) -> Result<()> {
        server.health_check().await?;

        let url = server.url(path);
        self.navigate(&url).await
    }

    /// Navigates with exponential backoff between failed attempts.
    ///
    /// # Errors
    ///
    /// Returns `ExhaustedRetries` carrying the last navigation error when
    /// every attempt fails.
    pub async fn navigate_with_retry(&self, url: &str, policy: RetryPolicy) -> Result<()> {
        retry_with_backoff(|| self.navigate(url), policy)
            .await
            .map_err(|last| BrowserError::ExhaustedRetries {
                attempts: policy.max_attempts(),
                source: Box::new(last),
            })
    }

    /// Waits for `document.readyState` to reach `"complete"`.
    ///
    /// # Errors
    ///
    /// Returns `WaitTimeout` if the document does not finish loading in time.
    pub async fn wait_for_load(&self, config: WaitConfig) -> Result<()> {
        wait_for_result(
            || async {
                let state: String = self.evaluate("document.readyState").await?;
                Ok::<_, BrowserError>(state == "complete")
            },
            config,
            "document ready",
        )
        .await
    }

    /// Executes JavaScript in the page context and deserializes the result.
    ///
    /// Do not interpolate unsanitized input into `script`; selectors and
    /// text are JSON-encoded by [`Selector::to_js_array`].
    ///
    /// # Errors
    ///
    /// Returns `ScriptExecutionFailed` if the script throws or the result
    /// cannot be deserialized.
    pub async fn evaluate<T>(&self, script: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let result = self
            .inner
            .evaluate(script)
            .await
            .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))?;

        result
            .into_value()
            .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))
    }

    /// Evaluates an expression through `JSON.stringify`, so `null` and
    /// `undefined` results deserialize into `Option::None`.
    async fn query<T>(&self, expression: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let json: String = self.evaluate(&json_query(expression)).await?;
        serde_json::from_str(&json).map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))
    }

    /// Runs `body` against the first match, bound to `el`. Fails with
    /// `ElementNotFound` when nothing matches.
    async fn with_first(&self, selector: &Selector, body: &str) -> Result<()> {
        let found: bool = self.evaluate(&on_first_match(selector, body)).await?;
        if found {
            Ok(())
        } else {
            Err(BrowserError::ElementNotFound(selector.to_string()))
        }
    }

    /// Waits for at least one element to match `selector`.
    ///
    /// # Errors
    ///
    /// Returns `WaitTimeout` if nothing matches in time.
    pub async fn wait_for_selector(&self, selector: &Selector, config: WaitConfig) -> Result<()> {
        wait_for_result(
            || async { Ok::<_, BrowserError>(self.count(selector).await? > 0) },
            config,
            &format!("selector '{selector}'"),
        )
        .await
    }

    /// Waits for the first match of `selector` to be visible.
    ///
    /// # Errors
    ///
    /// Returns `WaitTimeout` if it is not visible in time.
    pub async fn wait_for_visible(&self, selector: &Selector, config: WaitConfig) -> Result<()> {
        wait_for(
            || self.is_visible(selector),
            config,
            &format!("'{selector}' visible"),
        )
        .await
    }

    /// Waits for an element matching `selector` whose text contains `text`.
    ///
    /// # Errors
    ///
    /// Returns `WaitTimeout` if no such element appears in time.
    pub async fn wait_for_text(
        &self,
        selector: &Selector,
        text: &str,
        config: WaitConfig,
    ) -> Result<()> {
        let narrowed = selector.clone().with_text(text);
        self.wait_for_selector(&narrowed, config).await
    }

    /// Clicks the first match.
    ///
    /// # Errors
    ///
    /// Returns `WaitTimeout` if the element does not appear within the
    /// element budget.
    pub async fn click(&self, selector: &Selector) -> Result<()> {
        self.wait_for_selector(selector, self.waits.element).await?;
        debug!(%selector, "click");
        self.with_first(selector, "el.click()").await
    }

    /// Clicks the first match and waits for the resulting page load.
    ///
    /// # Errors
    ///
    /// Returns an error if the click or the load wait fails.
    pub async fn click_and_wait_for_load(&self, selector: &Selector) -> Result<()> {
        self.click(selector).await?;
        self.wait_for_load(self.waits.load).await
    }

    /// Sets the value of a form field and fires `input` and `change`.
    ///
    /// # Errors
    ///
    /// Returns `WaitTimeout` if the field never appears.
    pub async fn fill(&self, selector: &Selector, value: &str) -> Result<()> {
        self.wait_for_selector(selector, self.waits.element).await?;
        let value = js_string(value);
        self.with_first(
            selector,
            &format!(
                "el.focus(); el.value = {value}; \
                 el.dispatchEvent(new Event('input', {{ bubbles: true }})); \
                 el.dispatchEvent(new Event('change', {{ bubbles: true }}))"
            ),
        )
        .await
    }

    /// Clicks the submit button inside `form` and waits for the page to
    /// settle.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no submit button or the load wait fails.
    pub async fn submit_form(&self, form: &Selector) -> Result<()> {
        let submit = Selector::within(form.as_css(), r#"button[type="submit"]"#);
        self.click_and_wait_for_load(&submit).await
    }

    /// Scrolls the first match into view.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` when nothing matches.
    pub async fn scroll_into_view(&self, selector: &Selector) -> Result<()> {
        self.with_first(selector, "el.scrollIntoView({ block: 'center' })")
            .await?;
        sleep(SCROLL_SETTLE).await;
        Ok(())
    }

    /// Scrolls to the bottom of the document.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn scroll_to_bottom(&self) -> Result<()> {
        self.query::<serde_json::Value>("window.scrollTo(0, document.body.scrollHeight)")
            .await?;
        sleep(SCROLL_SETTLE).await;
        Ok(())
    }

    /// Scrolls to the top of the document.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn scroll_to_top(&self) -> Result<()> {
        self.query::<serde_json::Value>("window.scrollTo(0, 0)")
            .await?;
        sleep(SCROLL_SETTLE).await;
        Ok(())
    }

    /// Emulates a device of the given size.
    ///
    /// # Errors
    ///
    /// Returns an error if the CDP command fails.
    pub async fn set_viewport(&self, viewport: Viewport) -> Result<()> {
        debug!(%viewport, "setting viewport");
        let params = SetDeviceMetricsOverrideParams::new(
            i64::from(viewport.width),
            i64::from(viewport.height),
            1.0,
            viewport.is_mobile(),
        );
        self.inner.execute(params).await?;
        Ok(())
    }

    /// Current layout viewport size as reported by the page.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn viewport(&self) -> Result<Viewport> {
        self.query("({ width: window.innerWidth, height: window.innerHeight })")
            .await
    }

    /// PNG capture of the visible viewport.
    ///
    /// # Errors
    ///
    /// `ScriptExecutionFailed` when Chrome cannot capture the tab.
    pub async fn screenshot(&self) -> Result<Vec<u8>> {
        self.inner
            .screenshot(ScreenshotParams::default())
            .await
            .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))
    }

    /// Writes a screenshot to `<dir>/<name>.png`, creating `dir` if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if capture or the file write fails.
    pub async fn save_screenshot(&self, dir: &Path, name: &str) -> Result<PathBuf> {
        let bytes = self.screenshot().await?;
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(format!("{name}.png"));
        tokio::fs::write(&path, bytes).await?;
        debug!(path = %path.display(), "screenshot saved");
        Ok(path)
    }

    /// Closes the tab.
    ///
    /// # Errors
    ///
    /// Returns the protocol error when Chrome refuses to close the target.
    pub async fn close(self) -> Result<()> {
        if let Err(e) = self.inner.close().await {
            warn!("failed to close page: {}", e);
            return Err(BrowserError::ChromiumOxide(e));
        }
        Ok(())
    }
}

#[async_trait]
impl DomQuery for Page {
    async fn count(&self, selector: &Selector) -> Result<usize> {
        self.query(&format!("{}.length", selector.to_js_array()))
            .await
    }

    async fn visibility(&self, selector: &Selector) -> Result<bool> {
        self.query(&format!(
            "(() => {{ const el = {}[0]; if (!el) return false; \
             const r = el.getBoundingClientRect(); const s = window.getComputedStyle(el); \
             return r.width > 0 && r.height > 0 && s.visibility !== 'hidden' && s.display !== 'none'; }})()",
            selector.to_js_array()
        ))
        .await
    }

    async fn text_content(&self, selector: &Selector) -> Result<Option<String>> {
        self.query(&format!(
            "(() => {{ const el = {}[0]; return el ? el.textContent : null; }})()",
            selector.to_js_array()
        ))
        .await
    }

    async fn all_text_content(&self, selector: &Selector) -> Result<Vec<String>> {
        self.query(&format!(
            "{}.map(e => (e.textContent || '').trim()).filter(t => t.length > 0)",
            selector.to_js_array()
        ))
        .await
    }

    async fn all_attributes(&self, selector: &Selector, name: &str) -> Result<Vec<Option<String>>> {
        let name = serde_json::Value::String(name.to_string());
        self.query(&format!(
            "{}.map(e => e.getAttribute({name}))",
            selector.to_js_array()
        ))
        .await
    }

    async fn computed_style(&self, selector: &Selector, property: &str) -> Result<Option<String>> {
        let property = serde_json::Value::String(property.to_string());
        self.query(&format!(
            "(() => {{ const el = {}[0]; return el ? window.getComputedStyle(el).getPropertyValue({property}) : null; }})()",
            selector.to_js_array()
        ))
        .await
    }

    async fn parent_style(&self, selector: &Selector, property: &str) -> Result<Option<String>> {
        let property = serde_json::Value::String(property.to_string());
        self.query(&format!(
            "(() => {{ const el = {}[0]; const parent = el && el.parentElement; \
             return parent ? window.getComputedStyle(parent).getPropertyValue({property}) : null; }})()",
            selector.to_js_array()
        ))
        .await
    }

    async fn element_width(&self, selector: &Selector) -> Result<Option<f64>> {
        self.query(&format!(
            "(() => {{ const el = {}[0]; return el ? (el.naturalWidth || el.clientWidth) : null; }})()",
            selector.to_js_array()
        ))
        .await
    }

    async fn url(&self) -> Result<String> {
        self.evaluate("window.location.href").await
    }

    async fn title(&self) -> Result<String> {
        self.evaluate("document.title").await
    }
}

/// Wraps `expression` so its value crosses CDP as a JSON string.
fn json_query(expression: &str) -> String {
    format!("JSON.stringify(({expression}) ?? null)")
}

/// Runs `body` with `el` bound to the first match; evaluates to whether
/// anything matched.
fn on_first_match(selector: &Selector, body: &str) -> String {
    format!(
        "(() => {{ const el = {}[0]; if (!el) return false; {body}; return true; }})()",
        selector.to_js_array()
    )
}

/// A JavaScript string literal holding `value`.
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_owned()).to_string()
}
