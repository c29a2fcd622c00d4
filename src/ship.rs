//! Ship definitions and per-ship hit tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::CellSet;
use crate::common::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends to the right, along the columns.
    Horizontal,
    /// Extends downward, along the rows.
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Cells covered by a run of `length` starting at (`row`, `col`), in
    /// traversal order. Callers check that the run stays on the grid.
    pub(crate) fn span(self, row: usize, col: usize, length: usize) -> impl Iterator<Item = Coord> {
        (0..length).map(move |i| match self {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship of the fleet: fixed identity plus where it sits and where it was hit.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    cells: Vec<Coord>,
    hits: CellSet,
}

impl Ship {
    /// An unplaced, undamaged ship.
    pub fn new(ship_type: ShipType) -> Self {
        Ship {
            ship_type,
            cells: Vec::new(),
            hits: CellSet::new(),
        }
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    /// Occupied cells in traversal order; empty while unplaced.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Cells of this ship that have been hit.
    pub fn hits(&self) -> CellSet {
        self.hits
    }

    pub fn is_placed(&self) -> bool {
        !self.cells.is_empty()
    }

    pub fn contains(&self, cell: Coord) -> bool {
        self.cells.contains(&cell)
    }

    /// Sunk once every occupied cell has been hit.
    pub fn is_sunk(&self) -> bool {
        self.is_placed() && self.hits.len() == self.length()
    }

    pub(crate) fn set_cells(&mut self, cells: Vec<Coord>) {
        debug_assert!(cells.is_empty() || cells.len() == self.length());
        self.cells = cells;
    }

    /// Record a hit at `cell`. Returns `false` if the ship does not occupy it.
    /// Hitting the same cell twice is harmless.
    pub(crate) fn register_hit(&mut self, cell: Coord) -> bool {
        if !self.contains(cell) {
            return false;
        }
        self.hits.insert(cell).is_ok()
    }

    pub(crate) fn reset(&mut self) {
        self.cells.clear();
        self.hits = CellSet::new();
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", cells: {:?}, hits: {} }}",
            self.name(),
            self.cells,
            self.hits.len(),
        )
    }
}
