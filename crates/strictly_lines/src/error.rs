//! Configuration errors.

use derive_more::{Display, Error};

/// A board, rule set or config file that cannot start a game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Board side is below the minimum.
    #[display("Board side {} is below the minimum of {}", side, min)]
    BoardTooSmall {
        /// Requested side length.
        side: u16,
        /// Minimum allowed side length.
        min: u16,
    },

    /// Winning line length is below the minimum.
    #[display("Winning line length {} is below the minimum of {}", length, min)]
    WinningLineTooShort {
        /// Requested winning length.
        length: usize,
        /// Minimum allowed winning length.
        min: usize,
    },

    /// Config file could not be read.
    #[display("Failed to read config file: {}", message)]
    Read {
        /// Underlying I/O error text.
        message: String,
    },

    /// Config text could not be parsed.
    #[display("Failed to parse config: {}", message)]
    Parse {
        /// Underlying parser error text.
        message: String,
    },
}
