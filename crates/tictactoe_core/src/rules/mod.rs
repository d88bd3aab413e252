//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board. Nothing here looks at history
//! or turn order; the game state manager composes these.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, find_winner};
