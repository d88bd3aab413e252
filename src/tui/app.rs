//! Application state and key handling.

use crossterm::event::KeyCode;
use tictactoe_core::{Board, Game, Position};
use tracing::{debug, info, instrument};

use super::input::{digit_position, move_cursor};
use crate::config::Palette;

/// Main application state.
///
/// Owns the only [`Game`]. Browsing history is a view over existing
/// snapshots; it never changes the game.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    /// Step being viewed, `None` while following the latest snapshot.
    viewing: Option<usize>,
    palette: Palette,
    show_history: bool,
    message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(palette: Palette, show_history: bool) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            viewing: None,
            palette,
            show_history,
            message: help_text().to_string(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Mark colors.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Whether the history panel is shown.
    pub fn show_history(&self) -> bool {
        self.show_history
    }

    /// Last informational message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Step of the snapshot on screen.
    pub fn displayed_step(&self) -> usize {
        self.viewing.unwrap_or(self.game.move_count())
    }

    /// Snapshot on screen.
    pub fn displayed_board(&self) -> &Board {
        self.game
            .snapshot_at(self.displayed_step())
            .unwrap_or_else(|| self.game.current_snapshot())
    }

    /// Whether an earlier snapshot is on screen.
    pub fn is_browsing(&self) -> bool {
        self.viewing.is_some()
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.request_move(self.cursor),
            KeyCode::PageUp | KeyCode::Char('[') => self.step_back(),
            KeyCode::PageDown | KeyCode::Char(']') => self.step_forward(),
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.request_move(pos);
                }
            }
            KeyCode::End => self.jump_latest(),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    /// Requests a move at `pos`. Illegal requests are ignored.
    #[instrument(skip(self))]
    pub fn request_move(&mut self, pos: Position) {
        if self.is_browsing() {
            debug!("Move ignored while browsing history");
            self.message = "Viewing history. Press End to return.".to_string();
            return;
        }

        match self.game.apply_move(pos.to_index()) {
            Ok(mv) => {
                self.message = format!("{} played {}", mv.mark, mv.position.label());
            }
            Err(e) => debug!(error = %e, "Move ignored"),
        }
    }

    /// Shows the previous snapshot.
    pub fn step_back(&mut self) {
        let step = self.displayed_step();
        if step > 0 {
            self.viewing = Some(step - 1);
        }
    }

    /// Shows the next snapshot, returning to live play at the end.
    pub fn step_forward(&mut self) {
        if let Some(step) = self.viewing {
            self.viewing = (step + 1 < self.game.move_count()).then_some(step + 1);
        }
    }

    /// Returns to the latest snapshot.
    pub fn jump_latest(&mut self) {
        self.viewing = None;
    }

    /// Starts a new game.
    pub fn restart(&mut self) {
        info!(moves = self.game.move_count(), "Restarting game");
        self.game = Game::new();
        self.viewing = None;
        self.cursor = Position::Center;
        self.message = help_text().to_string();
    }
}

fn help_text() -> &'static str {
    "Arrows/1-9 move, Enter plays, PgUp/PgDn history, r restart, q quit"
}
