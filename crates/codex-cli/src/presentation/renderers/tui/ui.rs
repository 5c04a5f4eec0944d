use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect as CellRect},
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::{App, KEY_HINTS};
use crate::presentation::renderers::TerminalSurface;
use codex_types::Rect;

const FOOTER_HEIGHT: u16 = 3;

pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)])
        .split(f.area());

    let body = chunks[0];
    {
        let mut surface = TerminalSurface::new(f.buffer_mut());
        app.view.render(
            &mut surface,
            Rect::new(
                body.x as i32,
                body.y as i32,
                body.width as i32,
                body.height as i32,
            ),
        );
    }

    render_footer(f, chunks[1], app);
}

fn render_footer(f: &mut Frame, area: CellRect, app: &App) {
    let lines = vec![
        Line::from(app.status.as_str()),
        Line::from(KEY_HINTS).style(Style::default().fg(Color::DarkGray)),
    ];

    let footer = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    // Layout output may spill past the body; the footer always wins.
    f.render_widget(Clear, area);
    f.render_widget(footer, area);
}
