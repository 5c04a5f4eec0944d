//! Presentation cache for the codex view.
//!
//! Everything the layout pass needs is measured up front and stored here.
//! A cache is never patched: the presenter builds a fresh value and the view
//! swaps it in whole.

use codex_types::{Rgba, Size};
use serde::Serialize;

use crate::presentation::palette::Theme;
use crate::presentation::renderers::{FontRole, TextMeasurer};

/// A string measured with a font and color, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CachedText {
    pub text: String,
    pub font: FontRole,
    pub color: Rgba,
    pub size: Size,
}

impl CachedText {
    pub fn measure<M: TextMeasurer + ?Sized>(
        measurer: &M,
        text: impl Into<String>,
        font: FontRole,
        color: Rgba,
    ) -> Self {
        let text = text.into();
        let size = measurer.measure(&text, font);
        Self {
            text,
            font,
            color,
            size,
        }
    }

    /// Empty strings are kept in the cache but never drawn.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentationCache {
    pub theme: Theme,
    pub hero: HeroBlock,
    pub summary_cards: Vec<SummaryCard>,
    pub spotlights: Vec<SpotlightCard>,
    pub affinity_title: CachedText,
    pub affinity_rows: Vec<LabelValueRow>,
    pub grade_title: CachedText,
    pub grade_rows: Vec<LabelValueRow>,
    pub guide_title: CachedText,
    pub paragraphs: Vec<CachedText>,
    pub realm_title: CachedText,
    pub realm_rows: Vec<LabelValueRow>,
}

/// Header panel contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroBlock {
    pub heading: CachedText,
    pub tagline: CachedText,
    pub highlights: Vec<CachedText>,
    pub dataset_summary: CachedText,
    pub dataset_source: CachedText,
    pub primary_action_label: CachedText,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCard {
    pub label: CachedText,
    pub value: CachedText,
    pub caption: CachedText,
    pub accent: Rgba,
    pub placeholder: bool,
}

/// The entity a spotlight card stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpotlightEntity {
    pub name: String,
    pub grade: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotlightCard {
    /// `None` on the placeholder card.
    pub entity: Option<SpotlightEntity>,
    pub accent: Rgba,
    pub name: CachedText,
    pub affinity: CachedText,
    pub description: Option<CachedText>,
    pub badge: Option<CachedText>,
}

impl SpotlightCard {
    pub fn is_placeholder(&self) -> bool {
        self.entity.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelValueRow {
    pub label: CachedText,
    pub value: CachedText,
    pub placeholder: bool,
}
