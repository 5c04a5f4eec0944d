use std::fmt;

use codex_types::Rect;

use crate::presentation::renderers::DrawCall;
use crate::presentation::view_models::LayoutReport;

pub struct LayoutReportView<'a> {
    data: &'a LayoutReport,
}

impl<'a> LayoutReportView<'a> {
    pub fn new(data: &'a LayoutReport) -> Self {
        Self { data }
    }
}

fn rect(rect: &Rect) -> String {
    format!("{},{} {}x{}", rect.x, rect.y, rect.width, rect.height)
}

impl fmt::Display for LayoutReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for call in &self.data.calls {
            match call {
                DrawCall::FillRect { rect: r, color } => {
                    writeln!(f, "fill          {:<22} {}", rect(r), color)?;
                }
                DrawCall::FillRoundedRect {
                    rect: r,
                    radius,
                    color,
                    ..
                } => {
                    writeln!(f, "fill_rounded  {:<22} {} r={}", rect(r), color, radius)?;
                }
                DrawCall::StrokeRoundedRect {
                    rect: r,
                    radius,
                    color,
                } => {
                    writeln!(f, "stroke        {:<22} {} r={}", rect(r), color, radius)?;
                }
                DrawCall::Text {
                    rect: r,
                    text,
                    color,
                    ..
                } => {
                    writeln!(f, "text          {:<22} {} {:?}", rect(r), color, text)?;
                }
            }
        }

        match &self.data.hit_rect {
            Some(hit) => writeln!(f, "hit_rect: {}", rect(hit)),
            None => writeln!(f, "hit_rect: none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codex_types::Rgba;

    #[test]
    fn test_lists_calls_then_hit_rect() {
        let report = LayoutReport {
            bounds: Rect::new(0, 0, 10, 10),
            data_available: false,
            hit_rect: None,
            calls: vec![DrawCall::FillRect {
                rect: Rect::new(1, 2, 3, 4),
                color: Rgba::rgb(255, 0, 0),
            }],
        };

        let output = LayoutReportView::new(&report).to_string();

        assert_eq!(
            output.lines().collect::<Vec<_>>(),
            vec![
                "fill          1,2 3x4                  #ff0000",
                "hit_rect: none"
            ]
        );
    }
}
