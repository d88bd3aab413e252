//! Terminal invariant: nothing is played after a line is complete.

use super::super::Game;
use super::super::rules::find_winner;
use super::Invariant;

/// Invariant: only the latest snapshot may contain a winning line.
pub struct TerminalStopsInvariant;

impl Invariant<Game> for TerminalStopsInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        let earlier = &history[..history.len().saturating_sub(1)];
        earlier.iter().all(|board| find_winner(board).is_none())
    }

    fn description() -> &'static str {
        "No move follows a completed line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_won_game_holds() {
        let game = Game::replay(&[0, 1, 3, 2, 6]).unwrap();
        assert!(TerminalStopsInvariant::holds(&game));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut game = Game::replay(&[0, 1, 3, 2, 6]).unwrap();
        let next = game.current_snapshot().with(Position::Center, Mark::O);
        game.history.push(next);
        assert!(!TerminalStopsInvariant::holds(&game));
    }
}
