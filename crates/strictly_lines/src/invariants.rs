//! First-class invariants for the line engine.
//!
//! Invariants are logical properties that must hold while a game runs.
//! The engine asserts them in debug builds after every accepted move, and
//! they are testable independently.

use crate::engine::Engine;
use crate::types::Square;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violated invariant, not only the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: every stored mark lies inside the board.
pub struct MarksInBounds;

impl Invariant<Engine> for MarksInBounds {
    fn holds(engine: &Engine) -> bool {
        let board = engine.board();
        board.cells().keys().all(|&coord| board.contains(coord))
    }

    fn description() -> &'static str {
        "All marks lie inside the board"
    }
}

/// Invariant: the move history of a running game is exactly the board.
///
/// Each accepted move occupies one cell with its own player, so the history
/// length equals the occupied count.
pub struct HistoryMatchesBoard;

impl Invariant<Engine> for HistoryMatchesBoard {
    fn holds(engine: &Engine) -> bool {
        if !engine.is_running() {
            return true;
        }
        let board = engine.board();
        engine.history().len() == board.occupied_count()
            && engine
                .history()
                .iter()
                .all(|mov| board.occupant_at(mov.coordinate) == Square::Occupied(mov.player))
    }

    fn description() -> &'static str {
        "History of a running game matches the board"
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (MarksInBounds, HistoryMatchesBoard);
