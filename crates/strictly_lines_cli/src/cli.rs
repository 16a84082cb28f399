//! Command-line interface for strictly_lines.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use strictly_lines::{Coordinate, GameConfig};
use tracing::{info, instrument};

/// Strictly Lines - generalized tic-tac-toe rule engine
#[derive(Parser, Debug)]
#[command(name = "strictly_lines")]
#[command(about = "Play line tic-tac-toe games from the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game configuration
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Override the board side length
    #[arg(long, global = true)]
    pub side: Option<u16>,

    /// Override the winning line length
    #[arg(long, global = true)]
    pub win: Option<usize>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game from a list of moves, alternating players starting with A
    Play {
        /// Moves as `x,y`. Reads one move per line from stdin when empty.
        moves: Vec<String>,
    },

    /// Load and validate a configuration file
    CheckConfig {
        /// Path to the configuration file
        path: std::path::PathBuf,
    },
}

impl Cli {
    /// Resolves the game configuration from the file and flag overrides.
    #[instrument(skip(self))]
    pub fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)
                .with_context(|| format!("Loading {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(side) = self.side {
            info!(side, "Overriding board side");
            config = config.with_side(side);
        }
        if let Some(win) = self.win {
            info!(win, "Overriding winning length");
            config = config.with_winning_length(win);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Parses a move written as `x,y` (whitespace around parts is ignored).
pub fn parse_coordinate(text: &str) -> Result<Coordinate> {
    let Some((x, y)) = text.trim().split_once(',') else {
        bail!("Expected a move as x,y but got {:?}", text);
    };
    let x = x
        .trim()
        .parse::<u16>()
        .with_context(|| format!("Invalid column in {:?}", text))?;
    let y = y
        .trim()
        .parse::<u16>()
        .with_context(|| format!("Invalid row in {:?}", text))?;
    Ok(Coordinate::new(x, y))
}
