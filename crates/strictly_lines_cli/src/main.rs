//! Strictly Lines - command-line driver
//!
//! Plays a game from moves given on the command line or stdin and prints the
//! board after every move.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io::BufRead;
use strictly_lines::{Coordinate, Engine, GameConfig};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Play { moves } => {
            let config = cli.game_config()?;
            let moves = if moves.is_empty() {
                read_moves_from_stdin()?
            } else {
                moves.iter().map(|m| cli::parse_coordinate(m)).collect::<Result<Vec<_>>>()?
            };
            run_game(config, &moves)
        }
        Command::CheckConfig { path } => {
            let config = GameConfig::from_file(path)?;
            println!(
                "{}: side {}, winning length {}",
                path.display(),
                config.side(),
                config.winning_length()
            );
            Ok(())
        }
    }
}

/// Reads one move per non-empty line.
fn read_moves_from_stdin() -> Result<Vec<Coordinate>> {
    let stdin = std::io::stdin();
    let mut moves = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        moves.push(cli::parse_coordinate(&line)?);
    }
    Ok(moves)
}

/// Plays moves for the alternating active player until the game ends.
#[instrument(skip(moves), fields(count = moves.len()))]
fn run_game(config: GameConfig, moves: &[Coordinate]) -> Result<()> {
    let mut engine = Engine::new();
    let first = engine.prepare(config.board()?, config.rules()?);
    info!(?first, "Starting game");

    for &coord in moves {
        let report = engine.play(coord);
        println!("{}", report);
        if report.finished_game() {
            break;
        }
        println!("{}", engine.board());
    }

    match engine.outcome() {
        Some(outcome) => {
            // The engine clears its board on finish; rebuild it from the history.
            let mut board = config.board()?;
            for mov in engine.history() {
                board.place_mark(mov.coordinate, mov.player);
            }
            println!("{}", board);
            println!("{}", outcome);
        }
        None => {
            warn!("Moves exhausted before the game ended");
            engine.finish();
            println!("Unfinished");
        }
    }
    Ok(())
}
