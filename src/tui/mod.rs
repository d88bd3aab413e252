//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::App;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

use crate::config::TuiConfig;
use crate::logging::init_file_logging;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the terminal UI until the user quits.
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    init_file_logging(config.log_file(), config.log_filter())?;
    let palette = config.palette()?;

    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut terminal = cleanup_on_err(enter_terminal(), abandon_terminal)?;

    let mut app = App::new(palette, *config.show_history());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.game().move_count(), status = %app.game().status(), "TUI closed");

    res
}

fn enter_terminal() -> Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Best-effort restore when setup fails part way; raw mode is already on.
fn abandon_terminal() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    let _ = disable_raw_mode();
}

/// Runs `cleanup` if `result` is an error, then passes the result through.
fn cleanup_on_err<T>(result: Result<T>, cleanup: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        cleanup();
    }
    result
}

/// Event loop: one input event handled to completion per iteration.
#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                debug!(code = ?key.code, "Key pressed");
                app.handle_key(key.code);
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                if let Some(pos) = ui::cell_at(area, app.show_history(), mouse.column, mouse.row) {
                    debug!(position = %pos, "Cell clicked");
                    app.request_move(pos);
                }
            }
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_cleanup_runs_when_setup_fails() {
        let cleaned = Cell::new(false);
        let result: Result<()> = cleanup_on_err(Err(anyhow::anyhow!("no tty")), || cleaned.set(true));
        assert!(result.is_err());
        assert!(cleaned.get());
    }

    #[test]
    fn test_cleanup_skipped_on_success() {
        let cleaned = Cell::new(false);
        let value = cleanup_on_err(Ok(7), || cleaned.set(true)).unwrap();
        assert_eq!(value, 7);
        assert!(!cleaned.get());
    }
}
