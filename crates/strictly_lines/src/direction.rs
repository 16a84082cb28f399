//! Step directions and the result of stepping across the board.

use crate::types::Coordinate;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// One of the eight unit steps between neighboring cells.
///
/// Variants are declared in neighbor-scan priority order, so
/// [`Direction::priority_order`] yields them in the order the engine
/// checks for a same-player neighbor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Direction {
    /// (x−1, y)
    Left,
    /// (x+1, y)
    Right,
    /// (x, y−1)
    Up,
    /// (x, y+1)
    Down,
    /// (x−1, y−1)
    UpLeft,
    /// (x+1, y+1)
    DownRight,
    /// (x−1, y+1)
    DownLeft,
    /// (x+1, y−1)
    UpRight,
}

impl Direction {
    /// All directions in neighbor-scan priority order.
    pub fn priority_order() -> impl Iterator<Item = Direction> {
        Direction::iter()
    }

    /// Unit step `(dx, dy)` of this direction.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (-1, 1),
            Direction::UpRight => (1, -1),
        }
    }

    /// The opposite direction (negated step).
    pub fn inverse(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::UpLeft => Direction::DownRight,
            Direction::DownRight => Direction::UpLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::UpRight => Direction::DownLeft,
        }
    }
}

/// Result of stepping one cell from a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameSpace {
    /// The step landed on an in-bounds cell.
    Cell(Coordinate),
    /// The step left the board.
    Border,
}

impl GameSpace {
    /// Returns the landed-on coordinate, or `None` at the border.
    pub fn cell(self) -> Option<Coordinate> {
        match self {
            GameSpace::Cell(coord) => Some(coord),
            GameSpace::Border => None,
        }
    }
}
