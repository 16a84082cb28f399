//! Core domain types for line-based tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player A (goes first).
    #[display("A")]
    A,
    /// Player B (goes second).
    #[display("B")]
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Advances an optional active player.
    ///
    /// No active player advances to `A`, otherwise the turn passes to the opponent.
    pub fn advance(active: Option<Player>) -> Player {
        match active {
            None => Player::A,
            Some(player) => player.opponent(),
        }
    }

    /// Character used by the debug board dump.
    pub fn symbol(self) -> char {
        match self {
            Player::A => 'A',
            Player::B => 'B',
        }
    }
}

/// The occupant of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Character used by the debug board dump.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(player) => player.symbol(),
        }
    }
}

impl From<Option<Player>> for Square {
    fn from(player: Option<Player>) -> Self {
        player.map_or(Square::Empty, Square::Occupied)
    }
}

/// A cell address on the board, 0-indexed from the top-left corner.
///
/// `x` grows to the right, `y` grows downwards.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Coordinate {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
}

impl Coordinate {
    /// Creates a new coordinate.
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Offsets the coordinate by a signed delta.
    ///
    /// Returns `None` when either component would drop below zero or overflow.
    /// Upper board bounds are not checked here.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x.checked_add_signed(i16::from(dx))?;
        let y = self.y.checked_add_signed(i16::from(dy))?;
        Some(Self { x, y })
    }
}

impl From<(u16, u16)> for Coordinate {
    fn from((x, y): (u16, u16)) -> Self {
        Self::new(x, y)
    }
}
