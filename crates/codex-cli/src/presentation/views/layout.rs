//! Layout pass for the codex view.
//!
//! A fixed hierarchical recipe: hero panel, summary card row, then the
//! two-column compendium. All distances are authored units passed through
//! [`LayoutMetrics::px`]. The pass reads the cache only and returns the
//! primary action's hit rectangle.

use codex_types::{Rect, Rgba};
use tracing::debug;

use super::metrics::LayoutMetrics;
use crate::presentation::palette::{MUTED_OVERLAY, SOFT_HIGHLIGHT};
use crate::presentation::renderers::{Corners, RenderSurface};
use crate::presentation::view_models::{
    CachedText, LabelValueRow, PresentationCache, SpotlightCard,
};

/// Lay out `cache` inside `bounds` and draw it onto `surface`.
///
/// Returns the primary action rectangle, or `None` when nothing was drawn.
pub fn render_layout<S: RenderSurface + ?Sized>(
    cache: &PresentationCache,
    surface: &mut S,
    bounds: Rect,
    metrics: &LayoutMetrics,
) -> Option<Rect> {
    if bounds.is_empty() {
        debug!(?bounds, "skipping layout for empty bounds");
        return None;
    }

    let mut pass = LayoutPass {
        cache,
        surface,
        metrics,
        accent: cache.theme.accent,
    };

    let (hero, hit) = pass.hero(bounds);

    let summary_top = hero.bottom() + pass.px(24);
    let summary_bottom = pass.summary_row(summary_top, bounds.x, bounds.width);

    let compendium_top = summary_bottom + pass.px(30);
    let padding = pass.px(28);
    let compendium = Rect::new(
        bounds.x + padding,
        compendium_top,
        bounds.width - padding * 2,
        (bounds.bottom() - compendium_top - padding).max(0),
    );
    pass.compendium(compendium);

    hit
}

struct LayoutPass<'a, S: ?Sized> {
    cache: &'a PresentationCache,
    surface: &'a mut S,
    metrics: &'a LayoutMetrics,
    accent: Rgba,
}

impl<S: RenderSurface + ?Sized> LayoutPass<'_, S> {
    fn px(&self, units: i32) -> i32 {
        self.metrics.px(units)
    }

    fn text(&mut self, text: &CachedText, rect: Rect) {
        if !text.is_empty() {
            self.surface.draw_text(text, rect);
        }
    }

    fn text_at(&mut self, text: &CachedText, x: i32, y: i32) -> Rect {
        let rect = Rect::new(x, y, text.width(), text.height());
        self.text(text, rect);
        rect
    }

    fn text_centered(&mut self, text: &CachedText, within: Rect) {
        let rect = Rect::new(
            within.x + (within.width - text.width()) / 2,
            within.y + (within.height - text.height()) / 2,
            text.width(),
            text.height(),
        );
        self.text(text, rect);
    }

    fn hero(&mut self, bounds: Rect) -> (Rect, Option<Rect>) {
        let padding = self.px(28);
        let height = self.px(280).max(bounds.height / 3);
        let hero = Rect::new(
            bounds.x + padding,
            bounds.y + padding,
            bounds.width - padding * 2,
            height,
        );
        if hero.is_empty() {
            return (hero, None);
        }

        let cache = self.cache;
        let theme = cache.theme;
        let accent = self.accent;
        let radius = self.px(28);

        self.surface
            .fill_rounded_rect(hero, radius, accent.with_alpha(235), Corners::All);

        let inner = hero.inset(self.px(4));
        let inner_color = theme.gradient_start.mix(theme.gradient_end, 0.45);
        self.surface.fill_rounded_rect(
            inner,
            radius - self.px(4),
            inner_color.with_alpha(240),
            Corners::All,
        );

        let overlay_top = Rect::new(
            inner.x + self.px(6),
            inner.y + self.px(6),
            inner.width - self.px(12),
            inner.height / 2,
        );
        self.surface.fill_rounded_rect(
            overlay_top,
            radius - self.px(6),
            theme.gradient_start.mix(Rgba::WHITE, 0.12).with_alpha(200),
            Corners::Top,
        );

        let overlay_bottom = Rect::new(
            inner.x + self.px(6),
            inner.y + inner.height / 2,
            inner.width - self.px(12),
            inner.height / 2 - self.px(6),
        );
        self.surface.fill_rounded_rect(
            overlay_bottom,
            radius - self.px(6),
            theme.gradient_end.mix(accent, 0.25).with_alpha(220),
            Corners::Bottom,
        );

        let accent_bar = Rect::new(
            inner.x,
            inner.y + self.px(12),
            self.px(6),
            inner.height - self.px(24),
        );
        self.surface.fill_rect(accent_bar, accent);

        let content_padding = self.px(28);
        let left_width = inner.width * 5 / 9;
        let left = Rect::new(
            inner.x + content_padding,
            inner.y + content_padding,
            left_width - content_padding,
            inner.height - content_padding * 2,
        );
        let right_x = inner.x + left_width + content_padding / 2;
        let right = Rect::new(
            right_x,
            inner.y + content_padding,
            inner.right() - content_padding - right_x,
            inner.height - content_padding * 2,
        );

        let hero_block = &cache.hero;
        let mut cursor = left.y;
        if !hero_block.heading.is_empty() {
            let rect = self.text_at(&hero_block.heading, left.x, cursor);
            cursor += rect.height + self.px(14);
        }
        if !hero_block.tagline.is_empty() {
            let rect = self.text_at(&hero_block.tagline, left.x, cursor);
            cursor += rect.height + self.px(18);
        }

        for highlight in &hero_block.highlights {
            let bullet = Rect::new(left.x, cursor, self.px(10), self.px(10));
            self.surface
                .fill_rounded_rect(bullet, self.px(5), accent, Corners::All);
            self.text_at(highlight, left.x + self.px(18), cursor - self.px(4));
            cursor += highlight.height() + self.px(20);
        }

        self.text_at(
            &hero_block.dataset_summary,
            left.x,
            left.bottom() - self.px(110),
        );

        let button_height = self.px(50);
        let button = Rect::new(
            left.x,
            left.bottom() - button_height,
            self.px(240).min(left.width),
            button_height,
        );
        self.surface
            .fill_rounded_rect(button, button_height / 2, accent, Corners::All);
        self.surface.stroke_rounded_rect(
            button,
            button_height / 2,
            accent.mix(Rgba::WHITE, 0.2),
        );
        self.text_centered(&hero_block.primary_action_label, button);

        let mut right_cursor = right.y;
        if !hero_block.dataset_source.is_empty() {
            let rect = self.text_at(&hero_block.dataset_source, right.x, right_cursor);
            right_cursor += rect.height + self.px(16);
        }

        if let Some(spotlight) = cache.spotlights.first() {
            self.hero_preview(spotlight, right, right_cursor);
        }

        self.surface.fill_rect(right, SOFT_HIGHLIGHT);

        (hero, Some(button))
    }

    /// First spotlight shown beside the hero copy.
    fn hero_preview(&mut self, spotlight: &SpotlightCard, right: Rect, top: i32) {
        let mut cursor = top;

        let badge = Rect::new(right.x, cursor, self.px(120), self.px(36));
        self.surface.fill_rounded_rect(
            badge,
            badge.height / 2,
            spotlight.accent.mix(Rgba::BLACK, 0.25).with_alpha(230),
            Corners::All,
        );
        if let Some(text) = &spotlight.badge {
            self.text_centered(text, badge);
        }
        cursor += badge.height + self.px(12);

        if !spotlight.name.is_empty() {
            let rect = self.text_at(&spotlight.name, right.x, cursor);
            cursor += rect.height + self.px(8);
        }
        if !spotlight.affinity.is_empty() {
            let rect = self.text_at(&spotlight.affinity, right.x, cursor);
            cursor += rect.height + self.px(12);
        }
        if let Some(description) = spotlight.description.as_ref().filter(|d| !d.is_empty()) {
            let rect = Rect::new(
                right.x,
                cursor,
                description.width().min(right.width),
                description.height(),
            );
            self.text(description, rect);
        }
    }

    /// Returns the bottom edge of the card row.
    fn summary_row(&mut self, top: i32, origin_x: i32, width: i32) -> i32 {
        let cache = self.cache;
        let cards = &cache.summary_cards;
        if cards.is_empty() {
            return top;
        }

        let padding = self.px(28);
        let spacing = self.px(22);
        let count = cards.len() as i32;
        let available = width - padding * 2 - spacing * (count - 1);
        let card_width = available / count;
        let card_height = self.px(150);

        let mut card_rect = Rect::new(origin_x + padding, top, card_width, card_height);
        for card in cards {
            self.surface.fill_rounded_rect(
                card_rect,
                self.px(20),
                card.accent.with_alpha(230),
                Corners::All,
            );

            let inner = card_rect.inset(self.px(18));
            self.surface.fill_rect(inner, MUTED_OVERLAY);

            let mut cursor = inner.y;
            if !card.label.is_empty() {
                let rect = self.text_at(&card.label, inner.x, cursor);
                cursor += rect.height + self.px(10);
            }
            if !card.value.is_empty() {
                let rect = self.text_at(&card.value, inner.x, cursor);
                cursor += rect.height + self.px(12);
            }
            self.text(
                &card.caption,
                Rect::new(inner.x, cursor, inner.width, card.caption.height()),
            );

            card_rect.x += card_rect.width + spacing;
        }

        top + card_height
    }

    fn compendium(&mut self, bounds: Rect) {
        if bounds.is_empty() {
            return;
        }

        let column_spacing = self.px(28);
        let left_width = (bounds.width as f32 * 0.6) as i32;
        let left = Rect::new(
            bounds.x,
            bounds.y,
            left_width - column_spacing / 2,
            bounds.height,
        );
        let right = Rect::new(
            bounds.x + left_width + column_spacing / 2,
            bounds.y,
            bounds.width - left_width - column_spacing / 2,
            bounds.height,
        );

        let cache = self.cache;
        let card_spacing = self.px(22);
        let mut cursor = left.y;
        for card in &cache.spotlights {
            let used = self.soul_card(Rect::new(left.x, cursor, left.width, 0), card);
            cursor += used + card_spacing;
        }

        if cache.spotlights.is_empty() {
            let fallback = Rect::new(left.x, left.y, left.width, self.px(200));
            self.surface.fill_rounded_rect(
                fallback,
                self.px(22),
                self.accent.with_alpha(220),
                Corners::All,
            );
            let inner = fallback.inset(self.px(16));
            self.surface.fill_rect(inner, MUTED_OVERLAY);

            let tagline = &cache.hero.tagline;
            self.text(
                tagline,
                Rect::new(
                    inner.x,
                    inner.y,
                    tagline.width().min(inner.width),
                    tagline.height(),
                ),
            );
        }

        self.affinity_column(right);
    }

    /// Draws one spotlight card sized to its content and returns its height.
    fn soul_card(&mut self, slot: Rect, card: &SpotlightCard) -> i32 {
        let padding = self.px(24);
        let mut required = padding * 2;
        if !card.name.is_empty() {
            required += card.name.height() + self.px(10);
        }
        if !card.affinity.is_empty() {
            required += card.affinity.height() + self.px(10);
        }
        if let Some(description) = card.description.as_ref().filter(|d| !d.is_empty()) {
            required += description.height();
        }
        // badge row
        required += self.px(40);

        let card_rect = Rect::new(slot.x, slot.y, slot.width, required);
        self.surface.fill_rounded_rect(
            card_rect,
            self.px(22),
            card.accent.with_alpha(225),
            Corners::All,
        );

        let inner = card_rect.inset(self.px(18));
        self.surface.fill_rect(inner, MUTED_OVERLAY);

        let badge = Rect::new(inner.x, inner.y, self.px(110), self.px(34));
        self.surface.fill_rounded_rect(
            badge,
            badge.height / 2,
            card.accent.mix(Rgba::BLACK, 0.35).with_alpha(230),
            Corners::All,
        );
        if let Some(text) = &card.badge {
            self.text_centered(text, badge);
        }

        let mut cursor = badge.bottom() + self.px(12);
        if !card.name.is_empty() {
            self.text(
                &card.name,
                Rect::new(
                    inner.x,
                    cursor,
                    card.name.width().min(inner.width),
                    card.name.height(),
                ),
            );
            cursor += card.name.height() + self.px(10);
        }
        if !card.affinity.is_empty() {
            self.text(
                &card.affinity,
                Rect::new(
                    inner.x,
                    cursor,
                    card.affinity.width().min(inner.width),
                    card.affinity.height(),
                ),
            );
            cursor += card.affinity.height() + self.px(12);
        }
        if let Some(description) = &card.description {
            self.text(
                description,
                Rect::new(
                    inner.x,
                    cursor,
                    description.width().min(inner.width),
                    description.height(),
                ),
            );
        }

        required
    }

    fn affinity_column(&mut self, rect: Rect) {
        let cache = self.cache;
        self.surface.fill_rounded_rect(
            rect,
            self.px(22),
            self.accent.with_alpha(210),
            Corners::All,
        );
        let inner = rect.inset(self.px(16));
        self.surface.fill_rect(inner, MUTED_OVERLAY);

        let row_spacing = self.px(14);
        let mut cursor = inner.y;

        cursor = self.section_title(&cache.affinity_title, inner, cursor);
        for row in &cache.affinity_rows {
            cursor = self.split_row(row, inner, cursor) + row_spacing;
        }

        cursor += self.px(10);
        cursor = self.section_title(&cache.grade_title, inner, cursor);
        for row in &cache.grade_rows {
            cursor = self.split_row(row, inner, cursor) + row_spacing;
        }

        cursor += self.px(8);
        cursor = self.section_title(&cache.guide_title, inner, cursor);
        for block in &cache.paragraphs {
            self.text(
                block,
                Rect::new(inner.x, cursor, block.width().min(inner.width), block.height()),
            );
            cursor += block.height() + row_spacing;
        }

        cursor += self.px(8);
        cursor = self.section_title(&cache.realm_title, inner, cursor);
        for row in &cache.realm_rows {
            cursor = self.stacked_row(row, inner, cursor) + row_spacing;
        }
    }

    fn section_title(&mut self, title: &CachedText, inner: Rect, cursor: i32) -> i32 {
        if title.is_empty() {
            return cursor;
        }
        let rect = self.text_at(title, inner.x, cursor);
        cursor + rect.height + self.px(12)
    }

    /// Label flush left, value flush right. Returns the row's bottom edge.
    fn split_row(&mut self, row: &LabelValueRow, inner: Rect, cursor: i32) -> i32 {
        let half = inner.width / 2;
        let label = Rect::new(
            inner.x,
            cursor,
            row.label.width().min(half),
            row.label.height(),
        );
        self.text(&row.label, label);

        let value_width = row.value.width().min(half);
        let value = Rect::new(
            inner.right() - value_width,
            cursor,
            value_width,
            row.value.height(),
        );
        self.text(&row.value, value);

        cursor + label.height.max(value.height)
    }

    /// Label above an indented value. Returns the row's bottom edge.
    fn stacked_row(&mut self, row: &LabelValueRow, inner: Rect, cursor: i32) -> i32 {
        let label = Rect::new(
            inner.x,
            cursor,
            row.label.width().min(inner.width / 2),
            row.label.height(),
        );
        self.text(&row.label, label);

        let value = Rect::new(
            inner.x + self.px(6),
            label.bottom() + self.px(6),
            row.value.width().min(inner.width - self.px(12)),
            row.value.height(),
        );
        self.text(&row.value, value);

        value.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::palette::Theme;
    use crate::presentation::presenters::{BuildInput, build_cache};
    use crate::presentation::renderers::{DrawCall, RecordingSurface};
    use codex_engine::SourceLocation;
    use codex_types::{ContentConfig, Entity, Summary};

    fn placeholder_cache() -> PresentationCache {
        let summary = Summary::default();
        let content = ContentConfig::default();
        let input = BuildInput {
            summary: &summary,
            entities: &[],
            content: &content,
            source: &SourceLocation::Unavailable,
            loaded: false,
        };
        build_cache(&input, &Theme::default(), &RecordingSurface::new())
    }

    fn loaded_cache() -> PresentationCache {
        let entities = vec![
            Entity::new("Clear Sky Hammer", 9)
                .with_affinities(["metal"])
                .with_description("A heaven-shaking hammer."),
            Entity::new("Evil Eyes White Tiger", 8)
                .with_affinities(["metal"])
                .with_description("A white tiger."),
            Entity::new("Blue Silver Grass", 3).with_affinities(["wood"]),
        ];
        let summary = codex_engine::summarize(&entities);
        let content = ContentConfig::default();
        let input = BuildInput {
            summary: &summary,
            entities: &entities,
            content: &content,
            source: &SourceLocation::Unavailable,
            loaded: true,
        };
        build_cache(&input, &Theme::default(), &RecordingSurface::new())
    }

    #[test]
    fn test_zero_width_is_noop() {
        let cache = placeholder_cache();
        let mut surface = RecordingSurface::new();

        let hit = render_layout(
            &cache,
            &mut surface,
            Rect::new(0, 0, 0, 600),
            &LayoutMetrics::default(),
        );

        assert!(hit.is_none());
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_negative_height_is_noop() {
        let cache = placeholder_cache();
        let mut surface = RecordingSurface::new();

        let hit = render_layout(
            &cache,
            &mut surface,
            Rect::new(10, 10, 800, -1),
            &LayoutMetrics::default(),
        );

        assert!(hit.is_none());
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_hit_rect_is_primary_button() {
        let cache = placeholder_cache();
        let mut surface = RecordingSurface::new();

        let hit = render_layout(
            &cache,
            &mut surface,
            Rect::new(0, 0, 1280, 900),
            &LayoutMetrics::default(),
        );

        assert_eq!(hit, Some(Rect::new(60, 246, 240, 50)));
        let label = surface.text_rect("Launch codex");
        assert!(label.is_some_and(|rect| hit.is_some_and(|hit| hit.contains(rect.x, rect.y))));
    }

    #[test]
    fn test_huge_scale_lays_out_without_overflow() {
        let cache = loaded_cache();
        let mut surface = RecordingSurface::new();
        let metrics = LayoutMetrics::new(1.0e9);

        let hit = render_layout(&cache, &mut surface, Rect::new(0, 0, 1280, 900), &metrics);

        assert_eq!(metrics.scale, 16.0);
        assert!(!surface.calls().is_empty());
        assert!(hit.is_none_or(|rect| rect.width >= 0));
    }

    #[test]
    fn test_summary_cards_share_width() {
        let cache = loaded_cache();
        let mut surface = RecordingSurface::new();

        render_layout(
            &cache,
            &mut surface,
            Rect::new(0, 0, 1280, 900),
            &LayoutMetrics::default(),
        );

        assert_eq!(
            surface.text_rect("Martial souls"),
            Some(Rect::new(46, 370, 117, 20))
        );
        let card_fills: Vec<Rect> = surface
            .calls()
            .iter()
            .filter_map(|call| match call {
                DrawCall::FillRoundedRect { rect, radius: 20, .. } => Some(*rect),
                _ => None,
            })
            .collect();
        assert_eq!(
            card_fills,
            vec![
                Rect::new(28, 352, 393, 150),
                Rect::new(443, 352, 393, 150),
                Rect::new(858, 352, 393, 150),
            ]
        );
    }

    #[test]
    fn test_spotlight_cards_size_to_content() {
        let cache = loaded_cache();
        let mut surface = RecordingSurface::new();

        render_layout(
            &cache,
            &mut surface,
            Rect::new(0, 0, 1280, 900),
            &LayoutMetrics::default(),
        );

        // Hero preview, high-grade caption, then the compendium card.
        let hammer: Vec<Rect> = surface
            .texts()
            .filter(|(text, _)| *text == "Clear Sky Hammer")
            .map(|(_, rect)| rect)
            .collect();
        assert_eq!(hammer.len(), 3);
        assert_eq!(hammer.last().map(|rect| rect.y), Some(596));
        assert_eq!(
            surface.text_rect("Evil Eyes White Tiger").map(|rect| rect.y),
            Some(792)
        );
    }

    #[test]
    fn test_empty_spotlights_render_fallback_panel() {
        let mut cache = placeholder_cache();
        cache.spotlights.clear();
        let mut surface = RecordingSurface::new();

        render_layout(
            &cache,
            &mut surface,
            Rect::new(0, 0, 1280, 900),
            &LayoutMetrics::default(),
        );

        let tagline_draws = surface
            .texts()
            .filter(|(text, _)| *text == cache.hero.tagline.text)
            .count();
        assert_eq!(tagline_draws, 2);
    }

    #[test]
    fn test_realm_rows_stack_label_above_value() {
        let cache = placeholder_cache();
        let mut surface = RecordingSurface::new();

        render_layout(
            &cache,
            &mut surface,
            Rect::new(0, 0, 1280, 2000),
            &LayoutMetrics::default(),
        );

        let label = surface.text_rect("Mortal Realm");
        let value = surface.text_rect("60–80 years of tempered living");
        match (label, value) {
            (Some(label), Some(value)) => {
                assert_eq!(value.x, label.x + 6);
                assert_eq!(value.y, label.bottom() + 6);
            }
            other => panic!("realm row missing: {other:?}"),
        }
    }
}
