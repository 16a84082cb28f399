//! Sparse square game field.

use crate::direction::{Direction, GameSpace};
use crate::error::ConfigError;
use crate::types::{Coordinate, Player, Square};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Smallest allowed board side.
pub const MIN_GAME_FIELD_SIDE_SIZE: u16 = 3;

/// Square board of adjustable side length.
///
/// Only occupied cells are stored; a missing coordinate is an empty cell.
/// Every stored coordinate lies inside `[0, side)` on both axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    side: u16,
    cells: HashMap<Coordinate, Player>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::BoardTooSmall` if `side` is below
    /// [`MIN_GAME_FIELD_SIDE_SIZE`].
    #[instrument]
    pub fn new(side: u16) -> Result<Self, ConfigError> {
        if side < MIN_GAME_FIELD_SIDE_SIZE {
            return Err(ConfigError::BoardTooSmall {
                side,
                min: MIN_GAME_FIELD_SIDE_SIZE,
            });
        }
        Ok(Self {
            side,
            cells: HashMap::new(),
        })
    }

    /// Side length.
    pub fn side(&self) -> u16 {
        self.side
    }

    /// Largest valid index on either axis.
    pub fn max_index(&self) -> u16 {
        self.side - 1
    }

    /// Checks whether a coordinate is on the board.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.x < self.side && coord.y < self.side
    }

    /// Places a mark.
    ///
    /// Returns `false` without touching the board if the coordinate is out
    /// of bounds or already occupied.
    #[instrument(skip(self), fields(side = self.side))]
    pub fn place_mark(&mut self, coord: Coordinate, player: Player) -> bool {
        if !self.contains(coord) {
            debug!("Coordinate out of bounds");
            return false;
        }
        if self.cells.contains_key(&coord) {
            debug!("Cell already occupied");
            return false;
        }
        self.cells.insert(coord, player);
        true
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Occupant of a cell. Out-of-bounds coordinates read as empty.
    pub fn occupant_at(&self, coord: Coordinate) -> Square {
        self.cells.get(&coord).copied().into()
    }

    /// True iff no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    /// True iff every cell is occupied.
    pub fn is_full(&self) -> bool {
        let side = usize::from(self.side);
        self.cells.len() == side * side
    }

    /// Read-only view of the occupied cells.
    pub fn cells(&self) -> &HashMap<Coordinate, Player> {
        &self.cells
    }

    /// Steps one cell from `coord` in `direction`.
    ///
    /// Yields [`GameSpace::Border`] whenever the step would leave the board
    /// on any axis.
    pub fn step(&self, coord: Coordinate, direction: Direction) -> GameSpace {
        let (dx, dy) = direction.delta();
        match coord.offset(dx, dy) {
            Some(next) if self.contains(next) => GameSpace::Cell(next),
            _ => GameSpace::Border,
        }
    }

    /// Formats the board as a row-major character grid.
    ///
    /// Empty cells print as `.`, marks as `A` or `B`.
    pub fn render(&self) -> String {
        let side = usize::from(self.side);
        let mut result = String::with_capacity(side * (side + 1));
        for y in 0..self.side {
            for x in 0..self.side {
                result.push(self.occupant_at(Coordinate::new(x, y)).symbol());
            }
            result.push('\n');
        }
        result
    }
}

impl Default for Board {
    /// Smallest legal board.
    fn default() -> Self {
        Self {
            side: MIN_GAME_FIELD_SIDE_SIZE,
            cells: HashMap::new(),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
