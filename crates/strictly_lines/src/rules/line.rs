//! Line detection and measurement around a freshly placed mark.
//!
//! Detection scans the eight neighbors in [`Direction::priority_order`] and
//! keeps the first one holding the same player. Measurement then walks away
//! from the new mark along that direction and along its inverse.

use crate::board::Board;
use crate::direction::{Direction, GameSpace};
use crate::types::{Coordinate, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A measured line through the most recent mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineMeasurement {
    /// Direction in which the same-player neighbor was found.
    pub direction: Direction,
    /// Total contiguous marks on the line, the new mark included.
    pub length: usize,
}

/// Finds the first neighbor direction holding the same player as `coord`.
///
/// Returns `None` if `coord` is empty or no neighbor matches. Neighbors that
/// fall off the board are skipped.
#[instrument(skip(board), fields(side = board.side()))]
pub fn detect_direction(board: &Board, coord: Coordinate) -> Option<Direction> {
    let origin = board.occupant_at(coord);
    if origin == Square::Empty {
        return None;
    }

    let found = Direction::priority_order().find(|&direction| match board.step(coord, direction) {
        GameSpace::Cell(neighbor) => board.occupant_at(neighbor) == origin,
        GameSpace::Border => false,
    });
    debug!(?found, "Neighbor scan complete");
    found
}

/// Counts contiguous marks matching `from` when walking in `direction`.
///
/// `from` itself is not counted; the result is `start` plus every matching
/// cell reached before the border or a different occupant.
pub fn count_run(board: &Board, from: Coordinate, direction: Direction, start: usize) -> usize {
    let origin = board.occupant_at(from);
    if origin == Square::Empty {
        return start;
    }

    let mut count = start;
    let mut current = from;
    while let GameSpace::Cell(next) = board.step(current, direction) {
        if board.occupant_at(next) != origin {
            break;
        }
        count += 1;
        current = next;
    }
    count
}

/// Measures the line formed by the mark at `coord`.
///
/// The detected neighbor proves a line of two. The walk continues past the
/// neighbor in the detected direction and, independently, away from `coord`
/// in the inverse direction. Returns `None` when no direction is detected.
#[instrument(skip(board), fields(side = board.side()))]
pub fn measure_line(board: &Board, coord: Coordinate) -> Option<LineMeasurement> {
    let direction = detect_direction(board, coord)?;
    let neighbor = board.step(coord, direction).cell()?;

    let forward = count_run(board, neighbor, direction, 2);
    let backward = count_run(board, coord, direction.inverse(), 0);
    let length = forward + backward;

    debug!(?direction, forward, backward, length, "Line measured");
    Some(LineMeasurement { direction, length })
}
