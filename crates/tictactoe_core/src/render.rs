//! Plain-text rendering over the game's read accessors.

use super::{Board, Game, Mark, Move, Square};
use tracing::instrument;

/// Formats a board as three rows, empty squares shown by 1-based number.
///
/// ```text
/// X|2|3
/// -+-+-
/// 4|O|6
/// -+-+-
/// 7|8|9
/// ```
pub fn render_board(board: &Board) -> String {
    let mut result = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let pos = row * 3 + col;
            match board.squares()[pos] {
                Square::Empty => result.push_str(&(pos + 1).to_string()),
                Square::Occupied(Mark::X) => result.push('X'),
                Square::Occupied(Mark::O) => result.push('O'),
            }
            if col < 2 {
                result.push('|');
            }
        }
        if row < 2 {
            result.push_str("\n-+-+-\n");
        }
    }
    result
}

/// Label for the history entry reached after `step` moves.
pub fn step_label(step: usize, mv: Option<&Move>) -> String {
    match (step, mv) {
        (0, _) | (_, None) => "Go to game start".to_string(),
        (n, Some(mv)) => format!("Go to move #{} ({})", n, mv),
    }
}

/// Board, status line and numbered move list.
#[instrument(skip(game))]
pub fn render_game(game: &Game) -> String {
    let mut out = render_board(game.current_snapshot());
    out.push_str("\n\n");
    out.push_str(&game.status().to_string());
    out.push('\n');

    let moves = game.moves();
    for step in 0..=moves.len() {
        let mv = step.checked_sub(1).and_then(|i| moves.get(i));
        out.push_str(&format!("{}. {}\n", step, step_label(step, mv)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board() {
        assert_eq!(render_board(&Board::new()), "1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_render_game_lists_moves() {
        let game = Game::replay(&[4, 0]).unwrap();
        let text = render_game(&game);
        assert_eq!(
            text,
            "O|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9\n\n\
             next: X\n\
             0. Go to game start\n\
             1. Go to move #1 (X at Center)\n\
             2. Go to move #2 (O at Top-left)\n"
        );
    }

    #[test]
    fn test_render_won_game_shows_winner() {
        let game = Game::replay(&[0, 1, 3, 2, 6]).unwrap();
        assert!(render_game(&game).contains("\nwinner: X\n"));
    }
}
