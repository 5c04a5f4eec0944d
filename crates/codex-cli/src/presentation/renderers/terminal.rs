//! Terminal render surface backed by a ratatui [`Buffer`].
//!
//! One surface unit is one cell. Fills alpha-blend over whatever background
//! the cell already has, so stacked panels read the same way they do on a
//! pixel surface.

use codex_types::{Rect, Rgba, Size};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as CellRect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Widget};
use unicode_width::UnicodeWidthChar;

use super::surface::{Corners, FontRole, RenderSurface, TextMeasurer};
use crate::presentation::view_models::CachedText;

/// Measures text in terminal cells: display width by one row.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalMetrics;

impl TextMeasurer for TerminalMetrics {
    fn measure(&self, text: &str, _font: FontRole) -> Size {
        let width = Line::from(text).width() as i32;
        if width == 0 {
            Size::default()
        } else {
            Size::new(width, 1)
        }
    }
}

pub fn to_color(color: Rgba) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

fn from_color(color: Color) -> Rgba {
    match color {
        Color::Rgb(r, g, b) => Rgba::rgb(r, g, b),
        _ => Rgba::BLACK,
    }
}

pub struct TerminalSurface<'a> {
    buf: &'a mut Buffer,
}

impl<'a> TerminalSurface<'a> {
    pub fn new(buf: &'a mut Buffer) -> Self {
        Self { buf }
    }

    /// The buffer area in surface coordinates.
    pub fn bounds(&self) -> Rect {
        let area = self.buf.area;
        Rect::new(
            area.x as i32,
            area.y as i32,
            area.width as i32,
            area.height as i32,
        )
    }

    fn clip(&self, rect: Rect) -> Option<CellRect> {
        let visible = rect.intersection(&self.bounds())?;
        Some(CellRect::new(
            visible.x as u16,
            visible.y as u16,
            visible.width as u16,
            visible.height as u16,
        ))
    }

    fn blend_cell(&mut self, x: i32, y: i32, color: Rgba) {
        if color.a == 0 || x < 0 || y < 0 {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((x as u16, y as u16)) {
            let below = from_color(cell.bg);
            let blended = below.mix(color.with_alpha(255), color.a as f32 / 255.0);
            cell.set_bg(to_color(blended));
        }
    }

    fn is_cut_corner(rect: Rect, x: i32, y: i32, corners: Corners) -> bool {
        let left = x == rect.x;
        let right = x == rect.right() - 1;
        let top = y == rect.y;
        let bottom = y == rect.bottom() - 1;
        match corners {
            Corners::All => (left || right) && (top || bottom),
            Corners::Top => (left || right) && top,
            Corners::Bottom => (left || right) && bottom,
        }
    }
}

impl TextMeasurer for TerminalSurface<'_> {
    fn measure(&self, text: &str, font: FontRole) -> Size {
        TerminalMetrics.measure(text, font)
    }
}

impl RenderSurface for TerminalSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let Some(area) = self.clip(rect) else {
            return;
        };
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                self.blend_cell(x as i32, y as i32, color);
            }
        }
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: i32, color: Rgba, corners: Corners) {
        let Some(area) = self.clip(rect) else {
            return;
        };
        let round = radius > 0 && rect.width >= 3 && rect.height >= 2;
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let (x, y) = (x as i32, y as i32);
                if round && Self::is_cut_corner(rect, x, y, corners) {
                    continue;
                }
                self.blend_cell(x, y, color);
            }
        }
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, _radius: i32, color: Rgba) {
        let Some(area) = self.clip(rect) else {
            return;
        };
        if area.width < 2 || area.height < 2 {
            return;
        }
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(to_color(color)))
            .render(area, self.buf);
    }

    fn draw_text(&mut self, text: &CachedText, rect: Rect) {
        let bounds = self.bounds();
        if text.is_empty() || rect.y < bounds.y || rect.y >= bounds.bottom() {
            return;
        }

        let start = rect.x.max(bounds.x);
        let end = rect.right().min(bounds.right());
        if end <= start {
            return;
        }

        // Skip whole characters by display width; a wide character cut by
        // the left edge is dropped and the rest shifts right past it.
        let skipped = (start - rect.x) as usize;
        let mut consumed = 0;
        let mut visible = String::new();
        for ch in text.text.chars() {
            if consumed < skipped {
                consumed += UnicodeWidthChar::width(ch).unwrap_or(0);
            } else {
                visible.push(ch);
            }
        }
        let start = start + consumed.saturating_sub(skipped) as i32;
        if end <= start {
            return;
        }

        let mut style = Style::default().fg(to_color(text.color));
        if text.font == FontRole::Heading {
            style = style.add_modifier(Modifier::BOLD);
        }

        self.buf.set_stringn(
            start as u16,
            rect.y as u16,
            visible,
            (end - start) as usize,
            style,
        );
    }
}
