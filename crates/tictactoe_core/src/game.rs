//! Game state manager: append-only snapshot history plus turn indicator.

use super::action::{Move, MoveError};
use super::rules::{find_winner, is_draw};
use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// What the board display should say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A line is complete; the game is over.
    #[display("winner: {_0}")]
    Winner(Mark),
    /// The named mark moves next.
    #[display("next: {_0}")]
    Next(Mark),
}

/// Tic-tac-toe game with full move history.
///
/// The history always starts with an empty board and gains exactly one
/// snapshot per accepted move. Only [`Game::apply_move`] mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) history: Vec<Board>,
    pub(crate) turn: Mark,
}

impl Game {
    /// Creates a new game: one empty snapshot, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            turn: Mark::X,
        }
    }

    /// Builds a game by applying cell indices in order.
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &index in indices {
            game.apply_move(index)?;
        }
        Ok(game)
    }

    /// Places the current turn's mark at `index`.
    ///
    /// Guards, in order: the game must not have a winner, the index must
    /// be 0-8, and the square must be empty. A rejected move leaves the
    /// game untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] describing the first failed guard.
    #[instrument(skip(self), fields(turn = %self.turn, step = self.move_count()))]
    pub fn apply_move(&mut self, index: usize) -> Result<Move, MoveError> {
        if let Some(winner) = find_winner(self.current_snapshot()) {
            debug!(%winner, "Move rejected: game over");
            return Err(MoveError::GameOver(winner));
        }

        let position = Position::from_index(index).ok_or_else(|| {
            debug!("Move rejected: index out of range");
            MoveError::OutOfRange(index)
        })?;

        if !self.current_snapshot().is_empty(position) {
            debug!(%position, "Move rejected: square occupied");
            return Err(MoveError::CellOccupied(position));
        }

        let mark = self.turn;
        let next = self.current_snapshot().with(position, mark);
        self.history.push(next);
        self.turn = mark.opponent();

        #[cfg(debug_assertions)]
        if let Err(err) = self.check_postconditions() {
            self.history.pop();
            self.turn = mark;
            return Err(err);
        }

        info!(%mark, %position, "Move applied");
        if let Some(winner) = find_winner(self.current_snapshot()) {
            info!(%winner, moves = self.move_count(), "Game won");
        }

        Ok(Move::new(mark, position))
    }

    #[cfg(debug_assertions)]
    fn check_postconditions(&self) -> Result<(), MoveError> {
        use super::invariants::{GameInvariants, InvariantSet};

        GameInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }

    /// The latest snapshot.
    pub fn current_snapshot(&self) -> &Board {
        // History is created non-empty and only ever pushed to.
        &self.history[self.history.len() - 1]
    }

    /// Winner if there is one, otherwise whose turn it is.
    #[instrument(skip(self))]
    pub fn status(&self) -> Status {
        match find_winner(self.current_snapshot()) {
            Some(winner) => Status::Winner(winner),
            None => Status::Next(self.turn),
        }
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Snapshot after `step` moves (0 is the empty board).
    pub fn snapshot_at(&self, step: usize) -> Option<&Board> {
        self.history.get(step)
    }

    /// The mark that moves next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Number of accepted moves.
    pub fn move_count(&self) -> usize {
        self.history.len() - 1
    }

    /// Moves recovered from consecutive snapshots.
    #[instrument(skip(self))]
    pub fn moves(&self) -> Vec<Move> {
        self.history
            .windows(2)
            .flat_map(|pair| placed_between(&pair[0], &pair[1]))
            .collect()
    }

    /// Empty positions on the latest snapshot, or none once the game is won.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(self.current_snapshot())
        }
    }

    /// Whether a line has been completed.
    pub fn is_terminal(&self) -> bool {
        find_winner(self.current_snapshot()).is_some()
    }

    /// Whether the board is full without a winner.
    pub fn is_draw(&self) -> bool {
        is_draw(self.current_snapshot())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Marks present in `after` but not in `before`.
pub(crate) fn placed_between(before: &Board, after: &Board) -> Vec<Move> {
    Position::iter()
        .filter(|pos| before.is_empty(*pos))
        .filter_map(|pos| after.get(pos).mark().map(|mark| Move::new(mark, pos)))
        .collect()
}
