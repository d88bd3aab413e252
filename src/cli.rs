//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe board with move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to a TOML config file (defaults apply when omitted)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Apply a list of cell indices and print the resulting game
    Replay {
        /// Cell indices 0-8, comma or space separated (e.g. "0,1,3,2,6")
        #[arg(short, long)]
        moves: String,

        /// Print JSON instead of the text board
        #[arg(long)]
        json: bool,
    },
}
