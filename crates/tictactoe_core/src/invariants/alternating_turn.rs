//! Alternating turn invariant: X, O, X, O, ...

use super::super::{Game, Mark, Square};
use super::Invariant;

/// Invariant: marks alternate, X first.
///
/// After `n` moves the board holds `ceil(n/2)` X marks and `floor(n/2)`
/// O marks, and X is to move exactly when `n` is even.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let counts_match = game.history().iter().enumerate().all(|(n, board)| {
            let count = |mark| {
                board
                    .squares()
                    .iter()
                    .filter(|s| **s == Square::Occupied(mark))
                    .count()
            };
            count(Mark::X) == n.div_ceil(2) && count(Mark::O) == n / 2
        });

        let expected_turn = if game.move_count() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        };

        counts_match && game.turn() == expected_turn
    }

    fn description() -> &'static str {
        "Marks alternate (X, O, X, O, ...)"
    }
}
