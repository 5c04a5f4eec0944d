use crate::presentation::view_models::CachedText;
use codex_types::{Rect, Rgba, Size};
use serde::Serialize;

/// The three font handles a host provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontRole {
    Heading,
    Paragraph,
    Button,
}

/// Which corners of a filled panel are rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Corners {
    All,
    Top,
    Bottom,
}

/// Text measurement, needed when the presentation cache is built.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: FontRole) -> Size;
}

/// Drawing operations the layout pass emits.
///
/// Implementations clip to their own extent; the layout may hand out
/// rectangles that are partly or fully off-surface.
pub trait RenderSurface: TextMeasurer {
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn fill_rounded_rect(&mut self, rect: Rect, radius: i32, color: Rgba, corners: Corners);
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: i32, color: Rgba);
    fn draw_text(&mut self, text: &CachedText, rect: Rect);
}
