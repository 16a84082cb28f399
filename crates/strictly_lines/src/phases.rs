//! Engine lifecycle phases and game outcomes.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a winning line.
    Winner(Player),
    /// Board filled up without a winning line.
    Draw,
    /// Game was finished before it was decided.
    Abandoned,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw | Outcome::Abandoned => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Abandoned => write!(f, "Abandoned"),
        }
    }
}

/// Lifecycle phase of an [`Engine`](crate::Engine).
///
/// Only `Running` accepts moves. `Finished` keeps the outcome of the last
/// game around until the next `prepare`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// No game has been prepared.
    #[default]
    Idle,
    /// A game is accepting moves.
    Running,
    /// The last game ended.
    Finished(Outcome),
}

impl Phase {
    /// True iff moves are accepted.
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }

    /// Outcome of the last game, if it ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Phase::Finished(outcome) => Some(*outcome),
            Phase::Idle | Phase::Running => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::Winner(Player::B).winner(), Some(Player::B));
        assert_eq!(Outcome::Draw.winner(), None);
        assert!(Outcome::Draw.is_draw());
        assert_eq!(Outcome::Winner(Player::A).to_string(), "Player A wins");
    }

    #[test]
    fn test_phase_defaults_to_idle() {
        let phase = Phase::default();
        assert_eq!(phase, Phase::Idle);
        assert!(!phase.is_running());
        assert_eq!(Phase::Finished(Outcome::Abandoned).outcome(), Some(Outcome::Abandoned));
    }
}
