//! Tic-tac-toe game logic with move history.
//!
//! A [`Game`] owns an append-only history of board snapshots and the
//! mark to move next. Win detection is a pure function over one board
//! ([`find_winner`]); presentation layers read [`Game::current_snapshot`]
//! and [`Game::status`] and feed cell indices back through
//! [`Game::apply_move`].
//!
//! ```
//! use tictactoe_core::{Game, Mark, Status};
//!
//! let mut game = Game::new();
//! for index in [0, 1, 3, 2, 6] {
//!     game.apply_move(index).unwrap();
//! }
//! assert_eq!(game.status(), Status::Winner(Mark::X));
//! assert!(game.apply_move(4).is_err());
//! assert_eq!(game.history().len(), 6);
//! ```

#![warn(missing_docs)]

mod action;
mod game;
pub mod invariants;
mod position;
mod render;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::{Game, Status};
pub use position::Position;
pub use render::{render_board, render_game, step_label};
pub use rules::{LINES, Line, find_winner, is_draw, is_full};
pub use types::{Board, Mark, Snapshot, Square};
