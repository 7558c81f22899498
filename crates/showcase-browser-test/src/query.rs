//! Read-only DOM queries.
//!
//! Page checks are written against [`DomQuery`] rather than [`Page`]
//! directly, so the same check code runs against a live Chrome tab or an
//! in-memory document in unit tests.
//!
//! [`Page`]: crate::Page

use crate::error::Result;
use crate::selectors::Selector;
use async_trait::async_trait;

/// Queries a scenario can ask of the current document.
///
/// Element-level methods look at the first match unless their name says
/// otherwise.
#[async_trait]
pub trait DomQuery: Send + Sync {
    /// Number of elements matching `selector`.
    async fn count(&self, selector: &Selector) -> Result<usize>;

    /// Whether the first match is rendered with a non-empty box and is not
    /// hidden. `false` when nothing matches.
    async fn visibility(&self, selector: &Selector) -> Result<bool>;

    /// Text content of the first match, `None` when nothing matches.
    async fn text_content(&self, selector: &Selector) -> Result<Option<String>>;

    /// Trimmed, non-empty text content of every match.
    async fn all_text_content(&self, selector: &Selector) -> Result<Vec<String>>;

    /// Attribute of every match, in document order.
    async fn all_attributes(&self, selector: &Selector, name: &str) -> Result<Vec<Option<String>>>;

    /// Computed CSS property of the first match.
    async fn computed_style(&self, selector: &Selector, property: &str) -> Result<Option<String>>;

    /// Computed CSS property of the first match's parent element.
    async fn parent_style(&self, selector: &Selector, property: &str) -> Result<Option<String>>;

    /// Width of the first match in pixels: `naturalWidth` for loaded
    /// images, `clientWidth` otherwise.
    async fn element_width(&self, selector: &Selector) -> Result<Option<f64>>;

    /// Current document URL.
    async fn url(&self) -> Result<String>;

    /// Current document title.
    async fn title(&self) -> Result<String>;

    /// Attribute of the first match.
    async fn attribute(&self, selector: &Selector, name: &str) -> Result<Option<String>> {
        Ok(self
            .all_attributes(selector, name)
            .await?
            .into_iter()
            .next()
            .flatten())
    }

    /// Soft visibility check: lookup failures count as "not visible".
    async fn is_visible(&self, selector: &Selector) -> bool {
        self.visibility(selector).await.unwrap_or(false)
    }

    /// Whether the current URL contains `path`.
    async fn url_contains(&self, path: &str) -> Result<bool> {
        Ok(self.url().await?.contains(path))
    }

    /// Whether the first match's class attribute contains `class_name`.
    ///
    /// Substring semantics, like the `[class*=...]` selectors.
    async fn element_has_class(&self, selector: &Selector, class_name: &str) -> Result<bool> {
        Ok(self
            .attribute(selector, "class")
            .await?
            .is_some_and(|classes| classes.contains(class_name)))
    }
}
