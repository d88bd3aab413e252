//! Win detection for tic-tac-toe.

use super::super::{Board, Mark, Position};
use tracing::instrument;

/// Three positions forming a row, column or diagonal.
pub type Line = [Position; 3];

/// The eight winning lines. Order matters: the first complete line wins.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the winner on the board.
///
/// Returns `Some(mark)` for the first line in [`LINES`] holding three of
/// the same mark, `None` otherwise.
#[instrument]
pub fn find_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a).mark()?;
        (board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark)).then_some(mark)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn line_board(line: Line, mark: Mark) -> Board {
        let mut board = Board::new();
        for pos in line {
            board.set(pos, Square::Occupied(mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(find_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_both_marks() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                assert_eq!(find_winner(&line_board(line, mark)), Some(mark), "{line:?}");
            }
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        for line in LINES {
            let mut board = line_board(line, Mark::X);
            board.set(line[1], Square::Occupied(Mark::O));
            assert_eq!(find_winner(&board), None, "{line:?}");
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::new()
            .with(Position::TopLeft, Mark::X)
            .with(Position::TopCenter, Mark::X);
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_first_listed_line_breaks_ties() {
        // Two complete lines only happen on hand-built boards, but the
        // result must still be deterministic.
        let mut board = line_board(LINES[2], Mark::X);
        for pos in LINES[0] {
            board.set(pos, Square::Occupied(Mark::O));
        }
        assert_eq!(find_winner(&board), Some(Mark::O));

        // Left column for O, right column for X.
        let mut board = line_board(LINES[5], Mark::X);
        for pos in LINES[3] {
            board.set(pos, Square::Occupied(Mark::O));
        }
        assert_eq!(find_winner(&board), Some(Mark::O));
    }
}
