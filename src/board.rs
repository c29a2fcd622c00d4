//! One side's grid: fleet placement, shot resolution and firing history.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, trace};
use rand::Rng;

use crate::bitboard::CellSet;
use crate::common::{Coord, EngineError, ShotOutcome};
use crate::config::{FLEET, GRID_SIZE};
use crate::ship::{Orientation, Ship};

/// Non-owning handle to a ship: its index in the board's fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipId(usize);

impl ShipId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A side's board: 10×10 occupancy, its fleet, and the cells it has fired at
/// on the opponent's board.
#[derive(Clone)]
pub struct Board {
    ships: Vec<Ship>,
    grid: [[Option<ShipId>; GRID_SIZE]; GRID_SIZE],
    shots_fired: CellSet,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board carrying the full, unplaced fleet.
    pub fn new() -> Self {
        Board {
            ships: FLEET.iter().copied().map(Ship::new).collect(),
            grid: [[None; GRID_SIZE]; GRID_SIZE],
            shots_fired: CellSet::new(),
        }
    }

    /// Put the board back to its freshly created state.
    pub fn clear(&mut self) {
        for ship in self.ships.iter_mut() {
            ship.reset();
        }
        self.grid = [[None; GRID_SIZE]; GRID_SIZE];
        self.shots_fired = CellSet::new();
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, name: &str) -> Option<&Ship> {
        self.ships.iter().find(|s| s.name() == name)
    }

    /// Resolve a ship name to its handle.
    pub fn ship_id(&self, name: &str) -> Result<ShipId, EngineError> {
        self.ships
            .iter()
            .position(|s| s.name() == name)
            .map(ShipId)
            .ok_or(EngineError::UnknownShip)
    }

    /// Ship occupying (`row`, `col`), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<&Ship> {
        let id = (*self.grid.get(row)?.get(col)?)?;
        self.ships.get(id.0)
    }

    /// Cells this side has already fired at on the opponent's board.
    pub fn shots_fired(&self) -> &CellSet {
        &self.shots_fired
    }

    /// Names of ships still waiting to be placed, in fleet order.
    pub fn unplaced_ship_names(&self) -> Vec<&'static str> {
        self.ships
            .iter()
            .filter(|s| !s.is_placed())
            .map(|s| s.name())
            .collect()
    }

    pub fn is_fleet_placed(&self) -> bool {
        self.ships.iter().all(Ship::is_placed)
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Whether the named, still unplaced ship fits at (`row`, `col`) without
    /// leaving the grid or touching another ship. Never mutates.
    pub fn can_place(&self, name: &str, row: usize, col: usize, orientation: Orientation) -> bool {
        match self.ship_id(name) {
            Ok(id) => !self.ships[id.0].is_placed() && self.span_is_free(id, row, col, orientation),
            Err(_) => false,
        }
    }

    /// Place the named ship with its first cell at (`row`, `col`).
    ///
    /// An already placed ship is relocated: its current cells count as free
    /// for the check and are released once the new position is committed.
    /// On failure nothing is written.
    pub fn place(
        &mut self,
        name: &str,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), EngineError> {
        let id = self.ship_id(name)?;
        if !self.span_is_free(id, row, col, orientation) {
            return Err(EngineError::InvalidPlacement);
        }
        self.release(id);
        let cells: Vec<Coord> = orientation.span(row, col, self.ships[id.0].length()).collect();
        for &(r, c) in &cells {
            self.grid[r][c] = Some(id);
        }
        trace!("placed {} at {:?}", name, cells);
        self.ships[id.0].set_cells(cells);
        Ok(())
    }

    /// Take a placed ship back off the grid.
    pub fn remove(&mut self, name: &str) -> Result<(), EngineError> {
        let id = self.ship_id(name)?;
        self.release(id);
        Ok(())
    }

    /// Place every unplaced ship at a uniformly random orientation and
    /// top-left cell, retrying until each one fits.
    ///
    /// Termination: the whole fleet covers 19 of 100 cells, so some valid
    /// position always remains.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in 0..self.ships.len() {
            if self.ships[i].is_placed() {
                continue;
            }
            let name = self.ships[i].name();
            let mut attempts = 0usize;
            loop {
                attempts += 1;
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let row = rng.random_range(0..GRID_SIZE);
                let col = rng.random_range(0..GRID_SIZE);
                if !self.can_place(name, row, col, orientation) {
                    continue;
                }
                match self.place(name, row, col, orientation) {
                    Ok(()) => break,
                    Err(e) => trace!("placing {} at ({}, {}) failed: {}", name, row, col, e),
                }
            }
            debug!("random placement of {} took {} attempts", name, attempts);
        }
    }

    /// Fire from this side at (`row`, `col`) on `opponent`.
    ///
    /// Repeat shots are judged against this side's own firing history and
    /// report `AlreadyFired` without touching either board.
    pub fn fire_at(
        &mut self,
        opponent: &mut Board,
        row: usize,
        col: usize,
    ) -> Result<ShotOutcome, EngineError> {
        if !self.shots_fired.insert((row, col))? {
            return Ok(ShotOutcome::AlreadyFired);
        }
        opponent.receive_shot(row, col)
    }

    /// Resolve a shot landing on this board. Repeat detection belongs to the
    /// attacker's history, so this is only reached through [`Board::fire_at`].
    pub(crate) fn receive_shot(&mut self, row: usize, col: usize) -> Result<ShotOutcome, EngineError> {
        let cell = self
            .grid
            .get(row)
            .and_then(|r| r.get(col))
            .ok_or(EngineError::UnknownCoordinate)?;
        let id = match *cell {
            Some(id) => id,
            None => return Ok(ShotOutcome::Miss),
        };
        let ship = &mut self.ships[id.0];
        ship.register_hit((row, col));
        if ship.is_sunk() {
            Ok(ShotOutcome::Sunk {
                ship: ship.name(),
                cells: ship.cells().to_vec(),
            })
        } else {
            Ok(ShotOutcome::Touched)
        }
    }

    fn span_is_free(&self, id: ShipId, row: usize, col: usize, orientation: Orientation) -> bool {
        let length = self.ships[id.0].length();
        let (end_row, end_col) = match orientation {
            Orientation::Horizontal => (row, col.saturating_add(length - 1)),
            Orientation::Vertical => (row.saturating_add(length - 1), col),
        };
        if end_row >= GRID_SIZE || end_col >= GRID_SIZE {
            return false;
        }
        orientation
            .span(row, col, length)
            .all(|(r, c)| self.grid[r][c].is_none() || self.grid[r][c] == Some(id))
    }

    fn release(&mut self, id: ShipId) {
        for &(r, c) in self.ships[id.0].cells() {
            if self.grid[r][c] == Some(id) {
                self.grid[r][c] = None;
            }
        }
        self.ships[id.0].reset();
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("ships", &self.ships)
            .field("shots_fired", &self.shots_fired)
            .finish()
    }
}

impl fmt::Display for Board {
    /// Owner's view: `S` ship, `X` hit, `.` water.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let ch = match self.ship_at(r, c) {
                    Some(ship) if ship.hits().contains((r, c)) => 'X',
                    Some(_) => 'S',
                    None => '.',
                };
                write!(f, "{} ", ch)?;
            }
            if r + 1 < GRID_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
