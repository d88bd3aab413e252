//! Behavioural tests for the game state manager and win checker.

use tictactoe_core::{
    Board, Game, LINES, Mark, MoveError, Position, Square, Status, find_winner,
};

/// Every 3^9 assignment of squares, well-formed or not.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut squares = [Square::Empty; 9];
        for square in &mut squares {
            *square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Mark::X),
                _ => Square::Occupied(Mark::O),
            };
            code /= 3;
        }
        Board::from_squares(squares)
    })
}

#[test]
fn test_find_winner_matches_first_uniform_line_on_every_board() {
    for board in all_boards() {
        let expected = LINES.iter().find_map(|line| {
            let marks: Vec<_> = line.iter().map(|pos| board.get(*pos).mark()).collect();
            match marks.as_slice() {
                [Some(a), Some(b), Some(c)] if a == b && b == c => Some(*a),
                _ => None,
            }
        });
        assert_eq!(find_winner(&board), expected, "{board:?}");
    }
}

#[test]
fn test_center_opening_passes_turn_to_o() {
    let mut game = Game::new();
    game.apply_move(4).expect("Valid move");
    assert_eq!(game.status().to_string(), "next: O");
}

#[test]
fn test_repeated_index_is_a_no_op() {
    let mut game = Game::new();
    game.apply_move(7).expect("Valid move");
    let result = game.apply_move(7);
    assert!(matches!(result, Err(MoveError::CellOccupied(Position::BottomCenter))));
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.turn(), Mark::O);
}

#[test]
fn test_left_column_win_then_rejection() {
    let mut game = Game::new();
    for index in [0, 1, 3, 2, 6] {
        game.apply_move(index).expect("Valid move");
    }
    assert_eq!(game.status(), Status::Winner(Mark::X));
    assert_eq!(game.status().to_string(), "winner: X");

    let before = game.clone();
    for index in [4, 5, 7, 8] {
        assert_eq!(game.apply_move(index), Err(MoveError::GameOver(Mark::X)));
    }
    assert_eq!(game, before);
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_history_grows_by_one_per_accepted_move() {
    // Mix accepted and rejected requests; only accepted ones count.
    let requests = [4, 4, 0, 9, 8, 0, 2, 6, 1];
    let mut game = Game::new();
    let mut accepted = 0;

    for index in requests {
        if game.apply_move(index).is_ok() {
            accepted += 1;
        }
        assert_eq!(game.history().len(), accepted + 1);
        assert_eq!(game.turn() == Mark::X, accepted % 2 == 0);
    }
    assert_eq!(game.moves().len(), accepted);
}

#[test]
fn test_rejection_messages() {
    let mut game = Game::replay(&[4]).expect("Valid replay");
    let err = game.apply_move(4).unwrap_err();
    assert!(err.to_string().contains("occupied"));

    let err = game.apply_move(12).unwrap_err();
    assert_eq!(err.to_string(), "Cell index 12 is out of range (must be 0-8)");
}
