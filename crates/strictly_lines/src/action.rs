//! First-class move records.
//!
//! A [`Move`] is the player's intent; a [`MoveReport`] is what the engine
//! made of it.

use crate::phases::Outcome;
use crate::rules::LineMeasurement;
use crate::types::{Coordinate, Player};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player placing a mark at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark goes.
    pub coordinate: Coordinate,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coordinate)
    }
}

/// Everything one `play` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveReport {
    /// The attempted move.
    attempted: Move,
    /// Whether the mark landed on the board.
    placed: bool,
    /// Line through the new mark, if a same-player neighbor was found.
    line: Option<LineMeasurement>,
    /// Outcome if this move ended the game.
    outcome: Option<Outcome>,
    /// Active player after the move.
    next: Option<Player>,
}

impl MoveReport {
    pub(crate) fn rejected(attempted: Move, next: Option<Player>) -> Self {
        Self {
            attempted,
            placed: false,
            line: None,
            outcome: None,
            next,
        }
    }

    pub(crate) fn accepted(
        attempted: Move,
        line: Option<LineMeasurement>,
        outcome: Option<Outcome>,
        next: Option<Player>,
    ) -> Self {
        Self {
            attempted,
            placed: true,
            line,
            outcome,
            next,
        }
    }

    /// Length of the measured line, zero when none was detected.
    pub fn line_length(&self) -> usize {
        self.line.map_or(0, |line| line.length)
    }

    /// True iff this move ended the game.
    pub fn finished_game(&self) -> bool {
        self.outcome.is_some()
    }
}

impl std::fmt::Display for MoveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.placed {
            return write!(f, "{} rejected", self.attempted);
        }
        write!(f, "{}", self.attempted)?;
        if let Some(line) = self.line {
            write!(f, ", line {:?} of {}", line.direction, line.length)?;
        }
        if let Some(outcome) = self.outcome {
            write!(f, ", {}", outcome)?;
        }
        Ok(())
    }
}
