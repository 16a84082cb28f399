//! Game configuration.
//!
//! A `GameConfig` names the board side and the winning line length. It can be
//! written by hand or loaded from a TOML file:
//!
//! ```toml
//! side = 15
//! winning_length = 5
//! ```

use crate::board::{Board, MIN_GAME_FIELD_SIDE_SIZE};
use crate::error::ConfigError;
use crate::rules::{MIN_WINNING_LINE_LENGTH, Rules};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Board and rule parameters for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Board side length.
    #[serde(default = "default_side")]
    side: u16,

    /// Contiguous marks needed to win.
    #[serde(default = "default_winning_length")]
    winning_length: usize,
}

fn default_side() -> u16 {
    MIN_GAME_FIELD_SIDE_SIZE
}

fn default_winning_length() -> usize {
    MIN_WINNING_LINE_LENGTH
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            side: default_side(),
            winning_length: default_winning_length(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration without validating it.
    ///
    /// Validation happens in [`GameConfig::board`] and [`GameConfig::rules`].
    pub fn new(side: u16, winning_length: usize) -> Self {
        Self {
            side,
            winning_length,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Read {
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(side = config.side, winning_length = config.winning_length, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text and validates it.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks both parameters against their minimums.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board()?;
        self.rules()?;
        Ok(())
    }

    /// Builds an empty board of the configured side.
    pub fn board(&self) -> Result<Board, ConfigError> {
        Board::new(self.side)
    }

    /// Builds the configured rule set.
    pub fn rules(&self) -> Result<Rules, ConfigError> {
        Rules::new(self.winning_length)
    }
}
