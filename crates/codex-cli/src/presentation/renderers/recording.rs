use super::surface::{Corners, FontRole, RenderSurface, TextMeasurer};
use crate::presentation::view_models::CachedText;
use codex_types::{Rect, Rgba, Size};
use serde::Serialize;

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCall {
    FillRect {
        rect: Rect,
        color: Rgba,
    },
    FillRoundedRect {
        rect: Rect,
        radius: i32,
        color: Rgba,
        corners: Corners,
    },
    StrokeRoundedRect {
        rect: Rect,
        radius: i32,
        color: Rgba,
    },
    Text {
        rect: Rect,
        text: String,
        font: FontRole,
        color: Rgba,
    },
}

/// Headless surface that records draw calls instead of rasterizing.
///
/// Text is measured with fixed per-font glyph cells so layouts are
/// reproducible across machines.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Rect)> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Text { text, rect, .. } => Some((text.as_str(), *rect)),
            _ => None,
        })
    }

    pub fn text_rect(&self, needle: &str) -> Option<Rect> {
        self.texts()
            .find(|(text, _)| *text == needle)
            .map(|(_, rect)| rect)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    fn glyph_cell(font: FontRole) -> Size {
        match font {
            FontRole::Heading => Size::new(14, 28),
            FontRole::Paragraph => Size::new(8, 18),
            FontRole::Button => Size::new(9, 20),
        }
    }
}

impl TextMeasurer for RecordingSurface {
    fn measure(&self, text: &str, font: FontRole) -> Size {
        if text.is_empty() {
            return Size::default();
        }
        let cell = Self::glyph_cell(font);
        Size::new(cell.width * text.chars().count() as i32, cell.height)
    }
}

impl RenderSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.calls.push(DrawCall::FillRect { rect, color });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: i32, color: Rgba, corners: Corners) {
        self.calls.push(DrawCall::FillRoundedRect {
            rect,
            radius,
            color,
            corners,
        });
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: i32, color: Rgba) {
        self.calls
            .push(DrawCall::StrokeRoundedRect { rect, radius, color });
    }

    fn draw_text(&mut self, text: &CachedText, rect: Rect) {
        self.calls.push(DrawCall::Text {
            rect,
            text: text.text.clone(),
            font: text.font,
            color: text.color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_uses_glyph_cells() {
        let surface = RecordingSurface::new();
        assert_eq!(surface.measure("Codex", FontRole::Heading), Size::new(70, 28));
        assert_eq!(surface.measure("Codex", FontRole::Paragraph), Size::new(40, 18));
        assert_eq!(surface.measure("", FontRole::Button), Size::default());
    }

    #[test]
    fn test_records_in_order() {
        let mut surface = RecordingSurface::new();
        surface.fill_rect(Rect::new(0, 0, 1, 1), Rgba::BLACK);
        surface.stroke_rounded_rect(Rect::new(0, 0, 2, 2), 1, Rgba::WHITE);

        assert_eq!(surface.calls().len(), 2);
        assert!(matches!(surface.calls()[0], DrawCall::FillRect { .. }));
        surface.clear();
        assert!(surface.calls().is_empty());
    }
}
