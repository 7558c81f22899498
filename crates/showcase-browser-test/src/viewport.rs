//! Named viewport sizes used to simulate device classes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Phone-sized viewport (375×667).
    pub const MOBILE: Viewport = Viewport::new(375, 667);

    /// Tablet-sized viewport (768×1024).
    pub const TABLET: Viewport = Viewport::new(768, 1024);

    /// Desktop viewport (1920×1080).
    pub const DESKTOP: Viewport = Viewport::new(1920, 1080);

    /// Creates a viewport of the given size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether Chrome should emulate a mobile device at this size.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.width < Viewport::TABLET.width
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::DESKTOP
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The device classes scenarios refer to by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportPreset {
    /// See [`Viewport::MOBILE`].
    Mobile,
    /// See [`Viewport::TABLET`].
    Tablet,
    /// See [`Viewport::DESKTOP`].
    Desktop,
}

impl ViewportPreset {
    /// All presets, smallest first.
    pub const ALL: [ViewportPreset; 3] = [
        ViewportPreset::Mobile,
        ViewportPreset::Tablet,
        ViewportPreset::Desktop,
    ];

    /// The size this preset stands for.
    #[must_use]
    pub const fn viewport(self) -> Viewport {
        match self {
            ViewportPreset::Mobile => Viewport::MOBILE,
            ViewportPreset::Tablet => Viewport::TABLET,
            ViewportPreset::Desktop => Viewport::DESKTOP,
        }
    }

    /// Lowercase name as written in feature files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ViewportPreset::Mobile => "mobile",
            ViewportPreset::Tablet => "tablet",
            ViewportPreset::Desktop => "desktop",
        }
    }
}

impl From<ViewportPreset> for Viewport {
    fn from(preset: ViewportPreset) -> Self {
        preset.viewport()
    }
}

impl fmt::Display for ViewportPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name does not match any preset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown viewport preset '{0}' (expected mobile, tablet or desktop)")]
pub struct UnknownPreset(pub String);

impl FromStr for ViewportPreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" | "phone" => Ok(ViewportPreset::Mobile),
            "tablet" => Ok(ViewportPreset::Tablet),
            "desktop" => Ok(ViewportPreset::Desktop),
            _ => Err(UnknownPreset(s.to_string())),
        }
    }
}
