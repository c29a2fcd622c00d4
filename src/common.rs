//! Common types for the match engine: coordinates, shot outcomes and errors.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoardError;

/// A grid cell as `(row, col)`, both in `0..GRID_SIZE`.
pub type Coord = (usize, usize);

/// Result of firing at a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The firing side already shot at this cell; nothing changed.
    AlreadyFired,
    /// The shot landed in open water.
    Miss,
    /// The shot hit a ship that is still afloat.
    Touched,
    /// The shot sank a ship, carrying its name and every cell it occupied.
    Sunk { ship: &'static str, cells: Vec<Coord> },
}

impl ShotOutcome {
    /// `true` for `Touched` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Touched | ShotOutcome::Sunk { .. })
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::AlreadyFired => write!(f, "already fired"),
            ShotOutcome::Miss => write!(f, "miss"),
            ShotOutcome::Touched => write!(f, "hit"),
            ShotOutcome::Sunk { ship, .. } => write!(f, "sunk {}", ship),
        }
    }
}

/// Errors returned by engine operations. None of them leave state half-written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Underlying bitboard error.
    BitBoard(BitBoardError),
    /// Placement is off the grid, overlaps another ship, or the ship is
    /// already placed.
    InvalidPlacement,
    /// The firing side already shot at this cell.
    AlreadyFired,
    /// Operation is not allowed in the current phase.
    InvalidPhase,
    /// Ship name is not part of the fleet.
    UnknownShip,
    /// Coordinate lies outside the grid.
    UnknownCoordinate,
    /// The automated side has no unfired cell left to shoot at.
    NoTargetsRemaining,
    /// Battle cannot start while ships remain unplaced.
    FleetIncomplete,
}

impl From<BitBoardError> for EngineError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::OutOfBounds { .. } => EngineError::UnknownCoordinate,
            other => EngineError::BitBoard(other),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            EngineError::InvalidPlacement => write!(f, "Ship cannot be placed there"),
            EngineError::AlreadyFired => write!(f, "Already fired at this position"),
            EngineError::InvalidPhase => write!(f, "Operation not allowed in the current phase"),
            EngineError::UnknownShip => write!(f, "Ship name not found in the fleet"),
            EngineError::UnknownCoordinate => write!(f, "Coordinate is outside the grid"),
            EngineError::NoTargetsRemaining => write!(f, "No cells left to fire at"),
            EngineError::FleetIncomplete => write!(f, "Not every ship has been placed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
