//! Tic-tac-toe with move history, played in the terminal.
//!
//! # Architecture
//!
//! - **Core** ([`tictactoe_core`]): board snapshots, win detection, the
//!   game state manager
//! - **TUI**: ratatui front-end that turns key presses and mouse clicks
//!   into cell indices
//! - **Replay**: headless application of a move list
//!
//! # Example
//!
//! ```
//! use tictactoe::{parse_move_list, replay_forgiving, ReplayReport};
//!
//! let requests = parse_move_list("4,4,-1,0").unwrap();
//! let (game, rejected) = replay_forgiving(&requests);
//! let report = ReplayReport::new(&game, rejected);
//! assert_eq!(report.status_text, "next: X");
//! assert_eq!(report.rejected.len(), 2);
//! ```

#![warn(missing_docs)]

mod cli;
mod config;
mod logging;
mod replay;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, Palette, TuiConfig};

// Crate-level exports - Logging
pub use logging::{init_file_logging, init_stderr_logging};

// Crate-level exports - Replay
pub use replay::{
    CellRequest, MoveListError, RejectedMove, ReplayReport, parse_move_list, render_replay,
    replay_forgiving,
};

// Crate-level exports - Terminal UI
pub use tui::{App, run_tui};

// Crate-level exports - Game types
pub use tictactoe_core::{
    Board, Game, Mark, Move, MoveError, Position, Square, Status, find_winner, render_board,
    render_game,
};
