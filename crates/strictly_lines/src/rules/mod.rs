//! Game rules for line-based tic-tac-toe.
//!
//! The winning rule is a single parameter. Line detection and full-board
//! detection live in submodules as pure functions over a [`Board`](crate::Board),
//! separate from board storage and from the engine.

pub mod draw;
pub mod line;

pub use draw::is_full;
pub use line::{LineMeasurement, count_run, detect_direction, measure_line};

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest allowed winning line length.
pub const MIN_WINNING_LINE_LENGTH: usize = 3;

/// Winning rule: the contiguous line length that ends the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rules {
    min_win_length: usize,
}

impl Rules {
    /// Creates a rule set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::WinningLineTooShort` if `min_win_length` is below
    /// [`MIN_WINNING_LINE_LENGTH`].
    #[instrument]
    pub fn new(min_win_length: usize) -> Result<Self, ConfigError> {
        if min_win_length < MIN_WINNING_LINE_LENGTH {
            return Err(ConfigError::WinningLineTooShort {
                length: min_win_length,
                min: MIN_WINNING_LINE_LENGTH,
            });
        }
        Ok(Self { min_win_length })
    }

    /// Line length required to win.
    pub fn min_win_length(&self) -> usize {
        self.min_win_length
    }

    /// True iff a measured line is long enough to win.
    pub fn is_win(&self, measured_length: usize) -> bool {
        measured_length >= self.min_win_length
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_win_length: MIN_WINNING_LINE_LENGTH,
        }
    }
}
