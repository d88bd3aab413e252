//! Monotonic history invariant: each snapshot fills exactly one empty square.

use super::super::{Board, Game, Position};
use super::Invariant;

/// Invariant: history starts empty and grows one mark at a time.
///
/// Squares never change once occupied, and every step after the first
/// snapshot occupies exactly one previously empty square.
pub struct MonotonicHistoryInvariant;

impl MonotonicHistoryInvariant {
    fn single_placement(before: &Board, after: &Board) -> bool {
        let mut placed = 0;
        for pos in Position::ALL {
            if before.is_empty(pos) {
                if !after.is_empty(pos) {
                    placed += 1;
                }
            } else if before.get(pos) != after.get(pos) {
                return false;
            }
        }
        placed == 1
    }
}

impl Invariant<Game> for MonotonicHistoryInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        match history.first() {
            Some(first) if *first == Board::new() => {}
            _ => return false,
        }

        history
            .windows(2)
            .all(|pair| Self::single_placement(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "History grows one placement at a time from an empty board"
    }
}
