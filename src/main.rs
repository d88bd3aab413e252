//! tictactoe - terminal tic-tac-toe with move history.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tictactoe::{
    Cli, Command, ReplayReport, TuiConfig, init_stderr_logging, parse_move_list,
    render_replay, replay_forgiving, run_tui,
};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => run_play(config),
        Command::Replay { moves, json } => {
            init_stderr_logging("warn");
            run_replay(&moves, json)
        }
    }
}

/// Run the interactive terminal game.
fn run_play(config: Option<PathBuf>) -> Result<()> {
    let config = match config {
        Some(path) => TuiConfig::from_file(path)?,
        None => TuiConfig::default(),
    };
    run_tui(&config)
}

/// Apply a move list and print the outcome.
#[instrument]
fn run_replay(moves: &str, json: bool) -> Result<()> {
    let requests = parse_move_list(moves)?;
    let (game, rejected) = replay_forgiving(&requests);
    info!(accepted = game.move_count(), rejected = rejected.len(), "Replay finished");

    if json {
        let report = ReplayReport::new(&game, rejected);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_replay(&game, &rejected));
    }
    Ok(())
}
