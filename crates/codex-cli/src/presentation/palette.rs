//! Fixed color policy for the codex view.
//!
//! Tints and ratios are lookup data rather than logic so they can be tuned
//! and tested on their own.

use codex_types::{ContentConfig, Rgba};
use serde::Serialize;

pub const FALLBACK_ACCENT: Rgba = Rgba::rgb(120, 90, 200);
pub const MUTED_OVERLAY: Rgba = Rgba::rgba(32, 24, 56, 180);
pub const SOFT_HIGHLIGHT: Rgba = Rgba::rgba(255, 255, 255, 28);

pub const HERO_TEXT: Rgba = Rgba::rgb(240, 242, 252);
pub const MUTED_TEXT: Rgba = Rgba::rgb(210, 212, 230);
pub const SOURCE_TEXT: Rgba = Rgba::rgb(190, 194, 215);
pub const CARD_TEXT: Rgba = Rgba::rgb(224, 226, 240);
pub const CARD_VALUE_TEXT: Rgba = Rgba::WHITE;
pub const SPOTLIGHT_META_TEXT: Rgba = Rgba::rgb(233, 234, 247);
pub const ROW_LABEL_TEXT: Rgba = Rgba::rgb(214, 216, 234);
pub const ROW_VALUE_TEXT: Rgba = Rgba::rgb(235, 237, 250);
pub const PARAGRAPH_TEXT: Rgba = Rgba::rgb(212, 214, 231);
pub const REALM_VALUE_TEXT: Rgba = Rgba::rgb(232, 234, 249);

/// Blend of the view accent toward a reference color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub reference: Rgba,
    pub ratio: f32,
}

impl Tint {
    pub const fn new(reference: Rgba, ratio: f32) -> Self {
        Self { reference, ratio }
    }

    pub fn apply(&self, accent: Rgba) -> Rgba {
        accent.mix(self.reference, self.ratio)
    }
}

/// Total souls, high-grade focus, affinity spectrum.
pub const SUMMARY_CARD_TINTS: [Tint; 3] = [
    Tint::new(Rgba::rgb(76, 100, 196), 0.35),
    Tint::new(Rgba::rgb(180, 130, 255), 0.42),
    Tint::new(Rgba::rgb(88, 150, 255), 0.38),
];

pub const PLACEHOLDER_CARD_TINT: Tint = Tint::new(Rgba::rgb(40, 32, 68), 0.5);
pub const PLACEHOLDER_SPOTLIGHT_TINT: Tint = Tint::new(Rgba::rgb(24, 20, 40), 0.6);

/// Weight of the view accent in a spotlight's affinity color.
pub const SPOTLIGHT_ACCENT_RATIO: f32 = 0.4;

pub const AFFINITY_COLORS: &[(&str, Rgba)] = &[
    ("FIRE", Rgba::rgb(247, 120, 88)),
    ("WATER", Rgba::rgb(86, 149, 255)),
    ("EARTH", Rgba::rgb(190, 140, 92)),
    ("WIND", Rgba::rgb(134, 214, 255)),
    ("AIR", Rgba::rgb(134, 214, 255)),
    ("WOOD", Rgba::rgb(108, 196, 128)),
    ("NATURE", Rgba::rgb(108, 196, 128)),
    ("METAL", Rgba::rgb(210, 215, 225)),
    ("LIGHTNING", Rgba::rgb(150, 120, 255)),
    ("LIGHT", Rgba::rgb(255, 238, 188)),
    ("DARKNESS", Rgba::rgb(120, 102, 168)),
    ("ICE", Rgba::rgb(148, 210, 255)),
    ("POISON", Rgba::rgb(168, 228, 132)),
    ("VOID", Rgba::rgb(98, 80, 160)),
];

/// Table color for an affinity (case-insensitive), else `fallback`.
pub fn affinity_color(affinity: Option<&str>, fallback: Rgba) -> Rgba {
    let Some(affinity) = affinity else {
        return fallback;
    };
    let key = affinity.to_uppercase();
    AFFINITY_COLORS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, color)| *color)
        .unwrap_or(fallback)
}

/// Colors resolved from content at activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub accent: Rgba,
    pub gradient_start: Rgba,
    pub gradient_end: Rgba,
    pub hero_text: Rgba,
}

impl Default for Theme {
    fn default() -> Self {
        Self::resolve(&ContentConfig::default())
    }
}

impl Theme {
    pub fn resolve(content: &ContentConfig) -> Self {
        let accent = Rgba::parse_or(ContentConfig::text(&content.accent_color), FALLBACK_ACCENT);
        let gradient_start = Rgba::parse_or(content.gradient_stop(0), accent);
        let gradient_end = Rgba::parse_or(content.gradient_stop(1), accent.mix(gradient_start, 0.35));

        Self {
            accent,
            gradient_start,
            gradient_end,
            hero_text: HERO_TEXT,
        }
    }
}
