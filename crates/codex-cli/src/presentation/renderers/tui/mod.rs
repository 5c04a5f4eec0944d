mod app;
mod ui;

use anyhow::Result;
use codex_types::ContentConfig;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

use crate::presentation::renderers::TerminalMetrics;
use crate::presentation::view::CodexView;
use app::App;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Runs the interactive dashboard until the user quits.
///
/// `reload` re-reads the content configuration when `r` is pressed.
pub fn run<F>(mut view: CodexView, mut reload: F) -> Result<()>
where
    F: FnMut() -> Result<ContentConfig>,
{
    view.activate(&TerminalMetrics);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = restore_terminal();
        std::process::exit(0);
    })?;

    let mut app = App::new(view);
    let result = event_loop(&mut terminal, &mut app, &mut reload);

    restore_terminal()?;
    terminal.show_cursor()?;
    app.view.deactivate();

    result
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

fn event_loop<B, F>(terminal: &mut Terminal<B>, app: &mut App, reload: &mut F) -> Result<()>
where
    B: ratatui::backend::Backend,
    F: FnMut() -> Result<ContentConfig>,
{
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Enter | KeyCode::Char(' ') => app.primary_action(),
                KeyCode::Char('r') => app.rebind(reload()),
                _ => {}
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.click(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    Ok(())
}
