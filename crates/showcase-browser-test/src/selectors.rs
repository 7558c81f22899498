//! Selector registry for the showcase site.
//!
//! Selectors are deliberately loose. Most of them match on a class
//! *containing* a fragment (`[class*="gallery"]`) rather than on an exact
//! class or id, so markup can be restyled without breaking scenarios. Keep
//! that form when adding entries: scenarios encode assumptions about the
//! markup that a stricter selector would break.
//!
//! A [`Selector`] is a CSS selector plus an optional text filter, printed
//! as `css:has-text("...")`. The filter is applied in the page against
//! each candidate's `textContent`.

use serde_json::Value;
use std::fmt;

/// A CSS selector, optionally narrowed to elements containing some text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    css: String,
    has_text: Option<String>,
}

impl Selector {
    /// Creates a selector from a CSS selector string.
    pub fn css(css: impl Into<String>) -> Self {
        Self {
            css: css.into(),
            has_text: None,
        }
    }

    /// Narrows the selector to elements whose text contains `text`.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.has_text = Some(text.into());
        self
    }

    /// The CSS part of the selector.
    #[must_use]
    pub fn as_css(&self) -> &str {
        &self.css
    }

    /// The text filter, if any.
    #[must_use]
    pub fn text_filter(&self) -> Option<&str> {
        self.has_text.as_deref()
    }

    /// Matches either this selector or `other`.
    ///
    /// Text filters cannot be expressed in a CSS selector list, so the
    /// union keeps the filter of `self` only when both sides agree.
    #[must_use]
    pub fn or(self, other: impl Into<Selector>) -> Self {
        let other = other.into();
        let has_text = if self.has_text == other.has_text {
            self.has_text
        } else {
            None
        };
        Self {
            css: format!("{}, {}", self.css, other.css),
            has_text,
        }
    }

    /// Scopes the selector to descendants of `ancestor`.
    ///
    /// Both sides may be selector lists; every ancestor entry is paired
    /// with every inner entry, so `within("header, footer", "a")` becomes
    /// `header a, footer a`.
    #[must_use]
    pub fn within(ancestor: &str, inner: &str) -> Self {
        let inner: Vec<&str> = list_entries(inner).collect();
        let css = list_entries(ancestor)
            .flat_map(|outer| inner.iter().map(move |part| format!("{outer} {part}")))
            .collect::<Vec<_>>()
            .join(", ");
        Self::css(css)
    }

    /// JavaScript expression evaluating to the array of matching elements.
    ///
    /// Both the CSS and the text filter are JSON-encoded, which makes them
    /// safe string literals whatever they contain.
    #[must_use]
    pub fn to_js_array(&self) -> String {
        let css = Value::String(self.css.clone()).to_string();
        match &self.has_text {
            None => format!("Array.from(document.querySelectorAll({css}))"),
            Some(text) => {
                let text = Value::String(text.clone()).to_string();
                format!(
                    "Array.from(document.querySelectorAll({css}))\
                     .filter(e => (e.textContent || '').includes({text}))"
                )
            }
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.has_text {
            None => f.write_str(&self.css),
            Some(text) => write!(f, "{}:has-text({:?})", self.css, text),
        }
    }
}

impl From<&str> for Selector {
    fn from(css: &str) -> Self {
        Selector::css(css)
    }
}

impl From<String> for Selector {
    fn from(css: String) -> Self {
        Selector::css(css)
    }
}

impl From<&Selector> for Selector {
    fn from(selector: &Selector) -> Self {
        selector.clone()
    }
}

fn list_entries(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|part| !part.is_empty())
}

/// `[class*="fragment"]`: any element whose class attribute contains
/// `fragment` as a substring.
#[must_use]
pub fn class_contains(fragment: &str) -> String {
    format!(r#"[class*="{fragment}"]"#)
}

/// `[id*="fragment"]`.
#[must_use]
pub fn id_contains(fragment: &str) -> String {
    format!(r#"[id*="{fragment}"]"#)
}

/// Builders for the common element kinds.
#[derive(Debug, Clone, Copy)]
pub struct Selectors;

impl Selectors {
    /// The navigation bar.
    #[must_use]
    pub fn nav_menu() -> Selector {
        Selector::css("nav")
    }

    /// A link whose text contains `text`.
    #[must_use]
    pub fn nav_link(text: &str) -> Selector {
        Selector::css("a").with_text(text)
    }

    /// A heading of the given level, clamped to `h1`..`h6`.
    #[must_use]
    pub fn heading(level: u8) -> Selector {
        Selector::css(format!("h{}", level.clamp(1, 6)))
    }

    /// Any button, or a button containing `text`.
    #[must_use]
    pub fn button(text: Option<&str>) -> Selector {
        let selector = Selector::css("button");
        match text {
            Some(text) => selector.with_text(text),
            None => selector,
        }
    }

    /// Any link, or a link containing `text`.
    #[must_use]
    pub fn link(text: Option<&str>) -> Selector {
        let selector = Selector::css("a");
        match text {
            Some(text) => selector.with_text(text),
            None => selector,
        }
    }

    /// Page header, by tag or class.
    #[must_use]
    pub fn header() -> Selector {
        Selector::css("header").or(class_contains("header"))
    }

    /// Page footer, by tag or class.
    #[must_use]
    pub fn footer() -> Selector {
        Selector::css("footer").or(class_contains("footer"))
    }

    /// A named section, by class fragment or section id fragment.
    #[must_use]
    pub fn section(name: &str) -> Selector {
        Selector::css(class_contains(name)).or(format!("section{}", id_contains(name)))
    }

    /// Card-like elements.
    #[must_use]
    pub fn card() -> Selector {
        Selector::css(class_contains("card"))
    }

    /// Block-like elements.
    #[must_use]
    pub fn block() -> Selector {
        Selector::css(class_contains("block"))
    }

    /// Feature blocks.
    #[must_use]
    pub fn feature() -> Selector {
        Selector::css(class_contains("feature"))
    }

    /// Any image, or an image with exactly this alt text.
    #[must_use]
    pub fn image(alt: Option<&str>) -> Selector {
        match alt {
            Some(alt) => Selector::css(format!("img[alt={}]", Value::String(alt.to_string()))),
            None => Selector::css("img"),
        }
    }

    /// Images inside a gallery.
    #[must_use]
    pub fn gallery() -> Selector {
        Selector::css(format!("{} img", class_contains("gallery")))
    }

    /// Any form.
    #[must_use]
    pub fn form() -> Selector {
        Selector::css("form")
    }

    /// Any input, or inputs of the given type.
    #[must_use]
    pub fn input(kind: Option<&str>) -> Selector {
        match kind {
            Some(kind) => {
                Selector::css(format!("input[type={}]", Value::String(kind.to_string())))
            }
            None => Selector::css("input"),
        }
    }

    /// Any textarea.
    #[must_use]
    pub fn textarea() -> Selector {
        Selector::css("textarea")
    }

    /// Any select box.
    #[must_use]
    pub fn select() -> Selector {
        Selector::css("select")
    }

    /// Links inside a social block.
    #[must_use]
    pub fn social_links() -> Selector {
        Selector::css(format!("{} a", class_contains("social")))
    }

    /// Icons inside a social block.
    #[must_use]
    pub fn social_icons() -> Selector {
        let social = class_contains("social");
        Selector::css(format!("{social} i, {social} svg"))
    }
}

/// Selectors for the sections of the showcase site.
pub mod site {
    /// Main navigation.
    pub const NAVIGATION: &str = "nav";
    /// Links in the main navigation.
    pub const NAVIGATION_MENU: &str = "nav a";
    /// Page footer.
    pub const FOOTER: &str = "footer";
    /// Links in the footer.
    pub const FOOTER_LINKS: &str = "footer a";
    /// Hero banner at the top of the home page.
    pub const HERO_BANNER: &str = r#"[class*="banner"], [class*="hero"]"#;
    /// Main page title.
    pub const PAGE_TITLE: &str = "h1";
    /// Body copy.
    pub const PAGE_DESCRIPTION: &str = "p";
    /// Cards on the services page.
    pub const SERVICE_CARD: &str = r#"[class*="service"]"#;
    /// Plans on the pricing page.
    pub const PRICING_PLAN: &str = r#"[class*="pricing"], [class*="plan"]"#;
    /// Customer testimonials.
    pub const TESTIMONIAL: &str = r#"[class*="testimonial"], [class*="feedback"]"#;
    /// Gallery images.
    pub const GALLERY_IMAGE: &str = r#"[class*="gallery"] img"#;
    /// Client logos.
    pub const CLIENT_LOGO: &str = r#"[class*="client"] img, [class*="company"] img"#;
    /// Feature blocks on the about page.
    pub const FEATURE_BLOCK: &str = r#"[class*="feature"]"#;
    /// Buttons, including links styled as buttons.
    pub const BUTTON: &str = r#"button, a[class*="btn"]"#;
    /// Any form.
    pub const FORM: &str = "form";
    /// Error and alert messages.
    pub const ERROR_MESSAGE: &str = r#"[class*="error"], [class*="alert"]"#;

    /// About section content, by class or id.
    pub const ABOUT_CONTENT: &str = r#"[class*="about"], [id*="about"]"#;
    /// Not-found page markers.
    pub const NOT_FOUND: &str = r#"[class*="not-found"], [class*="notfound"], [class*="error"]"#;
    /// Generic message boxes, used as a looser error-message match.
    pub const MESSAGE: &str = r#"[class*="error"], [class*="message"]"#;
    /// Header title.
    pub const HEADER_TITLE: &str = r#"h1, [class*="title"]"#;
    /// Header description.
    pub const HEADER_DESCRIPTION: &str = r#"[class*="description"], p"#;
    /// Call to action inside the home banner.
    pub const BANNER_CTA: &str = "header#banner a.button, header#banner button";
    /// Home banner element carrying the background image.
    pub const BANNER: &str = r#"header#banner, header[class*="banner"]"#;
    /// Banner content wrapper.
    pub const BANNER_CONTENT: &str = "#banner-content";
    /// Navigation by tag or class.
    pub const NAVIGATION_LOOSE: &str = r#"nav, [class*="nav"]"#;
    /// Navigation links by tag or class.
    pub const NAVIGATION_LINKS_LOOSE: &str = r#"nav a, [class*="nav"] a"#;
    /// About section.
    pub const ABOUT_SECTION: &str = "section#about";
    /// About section title.
    pub const ABOUT_TITLE: &str = "section#about .section-title";
    /// About section tagline.
    pub const ABOUT_TAGLINE: &str = "section#about h3";
    /// Feature icons inside the about section.
    pub const ABOUT_ICONS: &str = r#"section#about i[class*="fa"], section#about svg"#;
    /// Company description copy.
    pub const DESCRIPTION: &str = r#"[class*="description"]"#;
    /// Gallery images matched by class or id.
    pub const GALLERY_IMAGES_LOOSE: &str = r#"[class*="gallery"] img, [id*="gallery"] img"#;
    /// Gallery section.
    pub const GALLERY_SECTION: &str = r#"section#gallery, [class*="gallery"]"#;
    /// Lightbox overlay.
    pub const LIGHTBOX: &str = r#"[class*="lightbox"], [role="dialog"]"#;
    /// Lightbox "next" control.
    pub const LIGHTBOX_NEXT: &str = r#"[class*="next"]"#;
    /// Lightbox "previous" control.
    pub const LIGHTBOX_PREV: &str = r#"[class*="prev"], [class*="previous"]"#;
    /// Lightbox close control.
    pub const LIGHTBOX_CLOSE: &str = r#"[class*="close"], [aria-label*="lose"]"#;
    /// Service cards matched by service or card class.
    pub const SERVICE_OR_CARD: &str = r#"[class*="service"], [class*="card"]"#;
    /// Section headings.
    pub const SECTION_HEADING: &str = r#"section [class*="heading"], section h3"#;
    /// A testimonial block as a whole.
    pub const TESTIMONIAL_SECTION: &str = r#"blockquote.testimonial, [class*="testimonial"]"#;
    /// Client name inside a testimonial card.
    pub const TESTIMONIAL_NAME: &str = r#"h4, h5, strong, [class*="name"]"#;
    /// Quoted text inside a testimonial card.
    pub const TESTIMONIAL_TEXT: &str = r#"p, q, blockquote, [class*="text"]"#;
    /// Photo or avatar inside a testimonial card.
    pub const TESTIMONIAL_IMAGE: &str = r#"img, [class*="avatar"]"#;
    pub const QUOTE: &str = "q, blockquote";
    pub const CUSTOMER_INFO: &str = r#"blockquote footer, [class*="testimonial"] footer"#;
    pub const VIDEO_LINK: &str = r#"[data-videoid], .video, [class*="video"]"#;
    /// Elements that carry the video to play.
    pub const VIDEO_TARGET: &str = "[data-videoid], .video";
    pub const CLIENT_BLOCK: &str = r#"[class*="client"], [class*="company"]"#;
    pub const COMPANY: &str = r#"[class*="company"]"#;
    pub const SECTION_IMAGE: &str = "section img";
    pub const SECTION_TEXT: &str = "section p";
}
