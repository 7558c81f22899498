//! Reusable page checks behind the `Then` steps.
//!
//! Every check is written against [`DomQuery`], so it runs the same way on
//! a live Chrome page and on an in-memory document. Visibility checks poll
//! until the configured budget runs out; count checks poll until the
//! minimum is reached and then report what was actually found.

use crate::error::{CheckError, CheckResult};
use crate::util::assert_matches;
use once_cell::sync::Lazy;
use regex::Regex;
use showcase_browser_test::{
    class_contains, site, wait_for, wait_for_result, BrowserError, DomQuery, Selector, Selectors,
    Viewport, WaitConfig,
};
use tracing::debug;

static COPYRIGHT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)copyright|©|rights reserved|made with").expect("valid copyright regex")
});

/// Parent display values accepted as a laid-out group of blocks.
const GROUP_DISPLAYS: &[&str] = &["grid", "flex", "block", "inline"];

/// Checks bound to one document and one wait budget.
pub struct PageChecks<'a, D: ?Sized + DomQuery> {
    dom: &'a D,
    wait: WaitConfig,
}

impl<'a, D: ?Sized + DomQuery> PageChecks<'a, D> {
    pub fn new(dom: &'a D, wait: WaitConfig) -> Self {
        Self { dom, wait }
    }

    /// Waits until the first match of `selector` is visible.
    ///
    /// # Errors
    ///
    /// Passes the poller's `WaitTimeout` through unchanged.
    pub async fn expect_visible(&self, selector: &Selector, what: &str) -> CheckResult {
        let dom = self.dom;
        wait_for(move || dom.is_visible(selector), self.wait, what).await?;
        Ok(())
    }

    /// Waits until at least `min` elements match `selector` and returns
    /// how many did.
    ///
    /// # Errors
    ///
    /// `Assertion` naming the count actually found when the budget runs out
    /// first; lookup errors on the final count pass through.
    pub async fn expect_at_least(
        &self,
        selector: &Selector,
        min: usize,
        what: &str,
    ) -> CheckResult<usize> {
        let dom = self.dom;
        let reached = wait_for_result(
            move || async move { Ok::<_, BrowserError>(dom.count(selector).await? >= min) },
            self.wait,
            what,
        )
        .await;
        if let Err(e) = reached {
            debug!(selector = %selector, error = %e, "count check ran out of time");
        }

        let found = dom.count(selector).await?;
        if found >= min {
            Ok(found)
        } else {
            Err(CheckError::assertion(format!(
                "expected at least {min} {what}, found {found}"
            )))
        }
    }

    /// Text of the first match, trimmed; fails when it is not longer than
    /// `min_len` characters.
    async fn expect_text(&self, selector: &Selector, min_len: usize, what: &str) -> CheckResult<String> {
        let text = self
            .dom
            .text_content(selector)
            .await?
            .unwrap_or_default()
            .trim()
            .to_string();
        if text.chars().count() > min_len {
            Ok(text)
        } else {
            Err(CheckError::assertion(format!(
                "expected {what} to have more than {min_len} characters of text, got '{text}'"
            )))
        }
    }

    async fn expect_attribute(&self, selector: &Selector, name: &str, what: &str) -> CheckResult<String> {
        match self.dom.attribute(selector, name).await? {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(CheckError::assertion(format!("{what} has no {name} attribute"))),
        }
    }

    async fn expect_parent_display(&self, selector: &Selector, what: &str) -> CheckResult<String> {
        let display = self
            .dom
            .parent_style(selector, "display")
            .await?
            .unwrap_or_default();
        if GROUP_DISPLAYS.contains(&display.as_str()) {
            Ok(display)
        } else {
            Err(CheckError::assertion(format!(
                "expected the container of {what} to use a grid, flex or block layout, got '{display}'"
            )))
        }
    }

    /// Waits for `inner` inside feature blocks; passes when the page has
    /// no feature blocks at all.
    async fn expect_visible_in_features(&self, inner: &str, what: &str) -> CheckResult {
        if self.dom.count(&Selector::css(site::FEATURE_BLOCK)).await? == 0 {
            debug!(what, "no feature blocks to inspect");
            return Ok(());
        }
        self.expect_visible(&Selector::within(site::FEATURE_BLOCK, inner), what)
            .await
    }

    // Navigation

    /// The document has a non-empty title.
    pub async fn title_present(&self) -> CheckResult<String> {
        let title = self.dom.title().await?;
        if title.trim().is_empty() {
            Err(CheckError::assertion("page title is empty"))
        } else {
            Ok(title)
        }
    }

    pub async fn navigation_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css(site::NAVIGATION), "navigation menu")
            .await
    }

    pub async fn main_navigation_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css(site::NAVIGATION_LOOSE), "main navigation")
            .await
    }

    pub async fn navigation_links_accessible(&self) -> CheckResult<usize> {
        self.expect_at_least(
            &Selector::css(site::NAVIGATION_LINKS_LOOSE),
            1,
            "navigation links",
        )
        .await
    }

    /// The navigation bar stays in place while scrolling.
    pub async fn navigation_fixed_or_sticky(&self) -> CheckResult {
        let position = self
            .dom
            .computed_style(&Selector::css(site::NAVIGATION_LOOSE), "position")
            .await?
            .unwrap_or_default();
        match position.as_str() {
            "fixed" | "sticky" => Ok(()),
            other => Err(CheckError::assertion(format!(
                "expected navigation to be fixed or sticky, got '{other}'"
            ))),
        }
    }

    /// Waits for the current URL to mention `page`, ignoring case.
    ///
    /// # Errors
    ///
    /// `Assertion` naming the last URL seen when the budget runs out.
    pub async fn on_page(&self, page: &str) -> CheckResult {
        let dom = self.dom;
        let wanted = page.to_lowercase();
        let wanted = wanted.as_str();
        let reached = wait_for_result(
            move || async move {
                Ok::<_, BrowserError>(dom.url().await?.to_lowercase().contains(wanted))
            },
            self.wait,
            "url to name the page",
        )
        .await;
        if reached.is_ok() {
            return Ok(());
        }

        let url = dom.url().await?;
        Err(CheckError::assertion(format!(
            "expected to be on the {page} page, but the URL is {url}"
        )))
    }

    pub async fn about_content_shown(&self) -> CheckResult {
        self.expect_visible(&Selector::css(site::ABOUT_CONTENT), "about content")
            .await
    }

    /// A not-found marker is shown, or at least the URL still names the
    /// missing page.
    pub async fn not_found_page_shown(&self) -> CheckResult {
        let Err(primary) = self
            .expect_visible(&Selector::css(site::NOT_FOUND), "not-found page")
            .await
        else {
            return Ok(());
        };

        debug!(error = %primary, "no not-found marker, falling back to the URL");
        let url = self.dom.url().await?;
        if url.contains("non-existent") {
            Ok(())
        } else {
            Err(CheckError::assertion(format!(
                "no not-found page and the URL {url} does not name the missing page"
            )))
        }
    }

    /// An error message is shown, or at least the page rendered something.
    pub async fn error_message_shown(&self) -> CheckResult {
        let Err(primary) = self
            .expect_visible(&Selector::css(site::MESSAGE), "error message")
            .await
        else {
            return Ok(());
        };

        debug!(error = %primary, "no error message, falling back to the page body");
        self.content_readable().await
    }

    // Home

    pub async fn hero_banner_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css(site::HERO_BANNER), "hero banner")
            .await
    }

    pub async fn header_title_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css(site::HEADER_TITLE), "header title")
            .await
    }

    pub async fn header_description_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css(site::HEADER_DESCRIPTION), "header description")
            .await
    }

    pub async fn call_to_action_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css(site::BANNER_CTA), "call-to-action button")
            .await
    }

    /// The banner sets a background through its inline style.
    pub async fn banner_has_background_image(&self) -> CheckResult {
        let style = self
            .expect_attribute(&Selector::css("header#banner"), "style", "banner")
            .await?;
        if style.to_lowercase().contains("background") {
            Ok(())
        } else {
            Err(CheckError::assertion(format!(
                "banner style has no background: '{style}'"
            )))
        }
    }

    pub async fn banner_content_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css(site::BANNER_CONTENT), "banner content")
            .await
    }

    /// The banner rendered with some text from the header data.
    pub async fn header_data_loaded(&self) -> CheckResult {
        let banner = Selector::css(site::BANNER);
        self.expect_visible(&banner, "page header").await?;
        self.expect_text(&banner, 0, "page header").await.map(drop)
    }

    // Footer and social links

    pub async fn footer_visible(&self) -> CheckResult {
        self.expect_visible(&Selectors::footer(), "footer").await
    }

    pub async fn footer_has_copyright(&self) -> CheckResult {
        let text = self
            .dom
            .text_content(&Selectors::footer())
            .await?
            .unwrap_or_default();
        assert_matches(&text.to_lowercase(), &COPYRIGHT_RE)
    }

    pub async fn footer_has_company_info(&self) -> CheckResult {
        self.expect_text(&Selectors::footer(), 10, "footer").await.map(drop)
    }

    pub async fn social_icons_shown(&self) -> CheckResult<usize> {
        let icons = Selector::within(&class_contains("social"), "a, i");
        self.expect_at_least(&icons, 1, "social media icons").await
    }

    pub async fn social_links_at_least(&self, min: usize) -> CheckResult<usize> {
        self.expect_at_least(&Selectors::social_links(), min, "social media links")
            .await
    }

    /// The first social link exists and is not disabled.
    pub async fn social_links_clickable(&self) -> CheckResult {
        let links = Selectors::social_links();
        self.social_links_at_least(1).await?;

        let disabled = self.dom.attribute(&links, "disabled").await?.is_some()
            || self.dom.attribute(&links, "aria-disabled").await?.as_deref() == Some("true");
        if disabled {
            Err(CheckError::assertion("social media link is disabled"))
        } else {
            Ok(())
        }
    }

    // About

    pub async fn introduction_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css(class_contains("intro")), "introduction section")
            .await
    }

    pub async fn about_section_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css(site::ABOUT_SECTION), "about section")
            .await
    }

    pub async fn about_title_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css(site::ABOUT_TITLE), "company title")
            .await
    }

    pub async fn about_tagline_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css(site::ABOUT_TAGLINE), "tagline")
            .await
    }

    /// The about title rendered with text.
    pub async fn introduction_data_loaded(&self) -> CheckResult {
        let title = Selector::css(site::ABOUT_TITLE);
        self.expect_visible(&title, "company title").await?;
        self.expect_text(&title, 0, "company title").await.map(drop)
    }

    pub async fn company_description_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css(site::DESCRIPTION), "company description")
            .await
    }

    pub async fn section_description_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css("section p"), "section description")
            .await
    }

    pub async fn section_heading_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css(site::SECTION_HEADING), "section heading")
            .await
    }

    pub async fn feature_blocks_at_least(&self, min: usize) -> CheckResult<usize> {
        self.expect_at_least(&Selectors::feature(), min, "feature blocks")
            .await
    }

    pub async fn features_have_titles(&self) -> CheckResult {
        self.expect_visible_in_features("h3, h4, .title", "feature title").await
    }

    pub async fn features_have_text(&self) -> CheckResult {
        self.expect_visible_in_features("p, .description", "feature text").await
    }

    pub async fn features_have_icons(&self) -> CheckResult {
        self.expect_visible_in_features("i, svg, img", "feature icon").await
    }

    pub async fn feature_icons_visible(&self) -> CheckResult<usize> {
        self.expect_at_least(&Selector::css(site::ABOUT_ICONS), 1, "feature icons")
            .await
    }

    pub async fn features_in_layout(&self) -> CheckResult {
        self.expect_parent_display(&Selectors::feature(), "feature blocks")
            .await
            .map(drop)
    }

    /// Feature blocks exist and the first one has a margin.
    pub async fn feature_blocks_spaced(&self) -> CheckResult {
        let blocks = Selectors::feature();
        self.feature_blocks_at_least(1).await?;
        let margin = self
            .dom
            .computed_style(&blocks, "margin")
            .await?
            .unwrap_or_default();
        if margin.trim().is_empty() {
            Err(CheckError::assertion("first feature block has no margin"))
        } else {
            Ok(())
        }
    }

    pub async fn feature_icons_centered(&self) -> CheckResult {
        self.expect_visible_in_features(".icon", "feature icon container")
            .await
    }

    /// The first section on the page is showing.
    pub async fn first_section_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css("section"), "page section")
            .await
    }

    /// The first three feature titles have text.
    pub async fn feature_titles_readable(&self) -> CheckResult {
        let titles = Selector::within(site::FEATURE_BLOCK, "h4");
        let expected = self.dom.count(&titles).await?.min(3);
        let readable = self.dom.all_text_content(&titles).await?.len();
        if readable >= expected {
            Ok(())
        } else {
            Err(CheckError::assertion(format!(
                "only {readable} of the first {expected} feature titles have text"
            )))
        }
    }

    // Gallery

    pub async fn gallery_images_at_least(&self, min: usize) -> CheckResult<usize> {
        self.expect_at_least(&Selector::css(site::GALLERY_IMAGES_LOOSE), min, "gallery images")
            .await
    }

    pub async fn gallery_image_visible(&self) -> CheckResult {
        let image = Selectors::gallery().or(format!("img{}", class_contains("gallery")));
        self.expect_visible(&image, "gallery image").await
    }

    pub async fn gallery_section_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css(site::GALLERY_SECTION), "gallery section")
            .await
    }

    pub async fn gallery_images_have_sources(&self) -> CheckResult {
        self.expect_attribute(&Selectors::gallery(), "src", "gallery image")
            .await
            .map(drop)
    }

    pub async fn gallery_images_have_alt_text(&self) -> CheckResult {
        self.expect_attribute(&Selectors::gallery(), "alt", "gallery image")
            .await
            .map(drop)
    }

    /// The first gallery image has a non-zero width.
    pub async fn gallery_images_sized(&self) -> CheckResult {
        let gallery = Selectors::gallery();
        self.expect_at_least(&gallery, 1, "gallery images").await?;
        self.expect_width(&gallery, None, "gallery image").await
    }

    pub async fn lightbox_open(&self) -> CheckResult {
        self.expect_visible(&Selector::css(site::LIGHTBOX), "lightbox").await
    }

    /// Either lightbox arrow is showing.
    pub async fn lightbox_controls_visible(&self) -> CheckResult {
        let prev = self.dom.is_visible(&Selector::css(site::LIGHTBOX_PREV)).await;
        if prev || self.dom.is_visible(&Selector::css(site::LIGHTBOX_NEXT)).await {
            Ok(())
        } else {
            Err(CheckError::assertion("no lightbox navigation controls are visible"))
        }
    }

    /// A showing "previous" arrow must not be disabled. Passes when no
    /// arrow is shown.
    pub async fn lightbox_previous_usable(&self) -> CheckResult {
        let prev = Selector::css(site::LIGHTBOX_PREV);
        if !self.dom.is_visible(&prev).await {
            debug!("no previous arrow showing");
            return Ok(());
        }
        let disabled = self.dom.attribute(&prev, "disabled").await?.is_some()
            || self.dom.attribute(&prev, "aria-disabled").await?.as_deref() == Some("true");
        if disabled {
            Err(CheckError::assertion("previous arrow is disabled"))
        } else {
            Ok(())
        }
    }

    // Services, clients, pricing, testimonials

    pub async fn service_cards_at_least(&self, min: usize) -> CheckResult<usize> {
        self.expect_at_least(&Selector::css(site::SERVICE_OR_CARD), min, "service cards")
            .await
    }

    pub async fn service_cards_have_titles(&self) -> CheckResult {
        self.expect_visible(
            &Selector::within(site::SERVICE_OR_CARD, "h3, h4, .title"),
            "service card title",
        )
        .await
    }

    pub async fn service_cards_have_descriptions(&self) -> CheckResult {
        self.expect_visible(
            &Selector::within(site::SERVICE_OR_CARD, "p, .description"),
            "service card description",
        )
        .await
    }

    pub async fn service_cards_have_icons(&self) -> CheckResult {
        self.expect_visible(
            &Selector::within(site::SERVICE_OR_CARD, "i, svg, img"),
            "service card icon",
        )
        .await
    }

    pub async fn service_cards_in_layout(&self) -> CheckResult {
        self.expect_parent_display(&Selector::css(site::SERVICE_CARD), "service cards")
            .await
            .map(drop)
    }

    pub async fn services_text_present(&self) -> CheckResult<usize> {
        self.expect_at_least(&Selector::css(site::SECTION_TEXT), 1, "service paragraphs")
            .await
    }

    pub async fn video_link_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css(site::VIDEO_LINK), "video link")
            .await
    }

    pub async fn video_link_has_icon(&self) -> CheckResult {
        self.expect_visible(&Selector::within(site::VIDEO_LINK, "i"), "video icon")
            .await
    }

    /// The video link says what to play, through `href` or `data-videoid`.
    pub async fn video_link_has_target(&self) -> CheckResult {
        let link = Selector::css(site::VIDEO_TARGET);
        let set = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        let href = set(self.dom.attribute(&link, "href").await?);
        if href.is_some() || set(self.dom.attribute(&link, "data-videoid").await?).is_some() {
            Ok(())
        } else {
            Err(CheckError::assertion(
                "video link has neither an href nor a data-videoid",
            ))
        }
    }

    pub async fn service_image_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css(site::SECTION_IMAGE), "service image")
            .await
    }

    pub async fn service_image_has_source(&self) -> CheckResult {
        self.expect_attribute(&Selector::css(site::SECTION_IMAGE), "src", "service image")
            .await
            .map(drop)
    }

    pub async fn service_image_sized(&self) -> CheckResult {
        self.expect_width(&Selector::css(site::SECTION_IMAGE), None, "service image")
            .await
    }

    /// The first section is laid out as grid, flex or block.
    pub async fn sections_in_columns(&self) -> CheckResult {
        let display = self
            .dom
            .computed_style(&Selector::css("section"), "display")
            .await?
            .unwrap_or_default();
        match display.as_str() {
            "grid" | "flex" | "block" => Ok(()),
            other => Err(CheckError::assertion(format!(
                "expected the first section to use a grid, flex or block layout, got '{other}'"
            ))),
        }
    }

    pub async fn client_logos_at_least(&self, min: usize) -> CheckResult<usize> {
        self.expect_at_least(&Selector::css(site::CLIENT_LOGO), min, "client logos")
            .await
    }

    /// First client logo has a width, no wider than `max` when given.
    pub async fn client_logos_sized(&self, max: Option<f64>) -> CheckResult {
        self.expect_width(&Selector::css(site::CLIENT_LOGO), max, "client logo")
            .await
    }

    pub async fn client_blocks_at_least(&self, min: usize) -> CheckResult<usize> {
        self.expect_at_least(&Selector::css(site::CLIENT_BLOCK), min, "client blocks")
            .await
    }

    pub async fn client_block_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css(site::CLIENT_BLOCK), "client block")
            .await
    }

    /// The first client block carries a company name.
    pub async fn client_blocks_named(&self) -> CheckResult {
        self.expect_text(&Selector::css(site::CLIENT_BLOCK), 0, "client block")
            .await
            .map(drop)
    }

    pub async fn companies_at_least(&self, min: usize) -> CheckResult<usize> {
        self.expect_at_least(&Selector::css(site::COMPANY), min, "client companies")
            .await
    }

    pub async fn pricing_plans_at_least(&self, min: usize) -> CheckResult<usize> {
        self.expect_at_least(&Selector::css(site::PRICING_PLAN), min, "pricing plans")
            .await
    }

    pub async fn pricing_plan_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css(site::PRICING_PLAN), "pricing plan")
            .await
    }

    pub async fn pricing_plans_have_names(&self) -> CheckResult {
        self.expect_visible(&Selector::within(site::PRICING_PLAN, "h3, h4, h5"), "plan name")
            .await
    }

    pub async fn pricing_plans_have_prices(&self) -> CheckResult {
        self.expect_visible(
            &Selector::within(site::PRICING_PLAN, &format!("{}, .amount", class_contains("price"))),
            "plan price",
        )
        .await
    }

    pub async fn pricing_plans_have_features(&self) -> CheckResult<usize> {
        let features =
            Selector::within(site::PRICING_PLAN, &format!("li, {}", site::FEATURE_BLOCK));
        self.expect_at_least(&features, 1, "plan features").await
    }

    pub async fn pricing_plans_have_cta(&self) -> CheckResult {
        self.expect_visible(
            &Selector::within(site::PRICING_PLAN, site::BUTTON),
            "plan call-to-action",
        )
        .await
    }

    pub async fn pricing_plans_in_layout(&self) -> CheckResult {
        self.expect_parent_display(&Selector::css(class_contains("pricing")), "pricing plans")
            .await
            .map(drop)
    }

    pub async fn testimonials_at_least(&self, min: usize) -> CheckResult<usize> {
        self.expect_at_least(&Selector::css(site::TESTIMONIAL), min, "testimonials")
            .await
    }

    pub async fn testimonial_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css(site::TESTIMONIAL), "testimonial")
            .await
    }

    pub async fn testimonial_section_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css(site::TESTIMONIAL_SECTION), "testimonial section")
            .await
    }

    /// The first quote on the page has text.
    pub async fn customer_quote_present(&self) -> CheckResult {
        self.expect_text(&Selector::css(site::QUOTE), 0, "customer quote")
            .await
            .map(drop)
    }

    pub async fn customer_info_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::css(site::CUSTOMER_INFO), "customer information")
            .await
    }

    /// The first testimonial card has text.
    pub async fn testimonials_have_content(&self) -> CheckResult {
        self.expect_text(&Selector::css(site::TESTIMONIAL), 0, "testimonial")
            .await
            .map(drop)
    }

    pub async fn testimonial_client_name_visible(&self) -> CheckResult {
        self.expect_visible(
            &Selector::within(site::TESTIMONIAL, site::TESTIMONIAL_NAME),
            "client name",
        )
        .await
    }

    pub async fn testimonial_position_visible(&self) -> CheckResult {
        self.expect_visible(&Selector::within(site::TESTIMONIAL, "footer"), "client position")
            .await
    }

    pub async fn testimonial_text_visible(&self) -> CheckResult {
        self.expect_visible(
            &Selector::within(site::TESTIMONIAL, site::TESTIMONIAL_TEXT),
            "testimonial text",
        )
        .await
    }

    pub async fn testimonial_avatar_visible(&self) -> CheckResult {
        self.expect_visible(
            &Selector::within(site::TESTIMONIAL, site::TESTIMONIAL_IMAGE),
            "client avatar",
        )
        .await
    }

    // Responsive layout

    /// The page body has some text.
    pub async fn content_readable(&self) -> CheckResult {
        self.expect_text(&Selector::css("body"), 0, "page body")
            .await
            .map(drop)
    }

    /// The first card-like element is rendered no wider than `viewport`.
    pub async fn cards_fit(&self, card: &Selector, viewport: Viewport) -> CheckResult {
        let limit = if viewport.is_mobile() {
            // cards may overhang a phone screen slightly
            400.0
        } else {
            f64::from(viewport.width)
        };
        self.expect_width(card, Some(limit), "card").await
    }

    async fn expect_width(&self, selector: &Selector, max: Option<f64>, what: &str) -> CheckResult {
        let width = self.dom.element_width(selector).await?.unwrap_or(0.0);
        if width <= 0.0 {
            return Err(CheckError::assertion(format!("{what} has no width")));
        }
        match max {
            Some(max) if width > max => Err(CheckError::assertion(format!(
                "{what} is {width}px wide, more than {max}px"
            ))),
            _ => Ok(()),
        }
    }
}
