//! Strictly Lines - generalized tic-tac-toe rule engine
//!
//! Two players alternate placing marks on a square board of adjustable side.
//! After every mark the engine measures the contiguous line that mark forms
//! and ends the game once the line reaches the configured winning length.
//!
//! # Architecture
//!
//! - **Board**: sparse square grid of occupied cells
//! - **Rules**: winning line length, line detection and measurement
//! - **Engine**: game lifecycle, move placement and turn alternation
//! - **Invariants**: properties asserted after every accepted move
//!
//! # Example
//!
//! ```
//! use strictly_lines::{Board, Coordinate, Engine, Outcome, Player, Rules};
//!
//! # fn example() -> Result<(), strictly_lines::ConfigError> {
//! let mut engine = Engine::new();
//! engine.prepare(Board::new(3)?, Rules::new(3)?);
//!
//! engine.make_move(Coordinate::new(0, 0)); // A
//! engine.make_move(Coordinate::new(1, 1)); // B
//! engine.make_move(Coordinate::new(1, 0)); // A
//! engine.make_move(Coordinate::new(2, 2)); // B
//! engine.make_move(Coordinate::new(2, 0)); // A completes the top row
//!
//! assert!(!engine.is_running());
//! assert_eq!(engine.outcome(), Some(Outcome::Winner(Player::A)));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod direction;
mod engine;
mod error;
mod phases;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use types::{Coordinate, Player, Square};

// Crate-level exports - Board and directions
pub use board::{Board, MIN_GAME_FIELD_SIDE_SIZE};
pub use direction::{Direction, GameSpace};

// Crate-level exports - Rules
pub use rules::{LineMeasurement, MIN_WINNING_LINE_LENGTH, Rules};

// Crate-level exports - Engine
pub use action::{Move, MoveReport};
pub use engine::Engine;
pub use phases::{Outcome, Phase};

// Crate-level exports - Configuration and errors
pub use config::GameConfig;
pub use error::ConfigError;
