// Hunt/target shot selection for the automated side.
// Uses no_std + alloc; the only allocation is the candidate queue.

use alloc::collections::VecDeque;
use log::debug;
use rand::Rng;

use crate::{
    bitboard::CellSet,
    common::{Coord, EngineError, ShotOutcome},
    config::GRID_SIZE,
};

/// Which behaviour the next shot will come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    /// Uniform random over unfired cells.
    Hunt,
    /// Draining cells adjacent to earlier hits.
    Target,
}

/// Shot selector for an automated side.
///
/// In easy mode every shot is uniform random over the cells not yet fired at.
/// In hard mode each `Touched` result queues the hit's in-grid, unfired
/// orthogonal neighbours (north, south, west, east), and queued cells are
/// used before falling back to random search.
///
/// Switching hard mode off only stops new cells from being queued. Anything
/// already queued is still drained first.
#[derive(Debug, Clone, Default)]
pub struct Targeting {
    hard: bool,
    pending: VecDeque<Coord>,
}

impl Targeting {
    pub fn new(hard: bool) -> Self {
        Self {
            hard,
            pending: VecDeque::new(),
        }
    }

    pub fn set_hard_mode(&mut self, hard: bool) {
        self.hard = hard;
    }

    pub fn is_hard_mode(&self) -> bool {
        self.hard
    }

    /// `Target` while candidates are queued, otherwise `Hunt`.
    pub fn mode(&self) -> TargetMode {
        if self.pending.is_empty() {
            TargetMode::Hunt
        } else {
            TargetMode::Target
        }
    }

    /// Queued candidates in the order they will be tried.
    pub fn pending(&self) -> impl Iterator<Item = &Coord> {
        self.pending.iter()
    }

    /// Back to Hunt with an empty queue. The difficulty flag is kept.
    pub fn reset(&mut self) {
        self.pending.clear();
    }

    /// Pick the next cell to fire at, given the cells already fired at.
    ///
    /// Queued candidates come first; stale ones (already in `history`) are
    /// dropped. With the queue exhausted, a cell is drawn uniformly from the
    /// unfired remainder, or `NoTargetsRemaining` if there is none.
    pub fn next_target<R: Rng + ?Sized>(
        &mut self,
        history: &CellSet,
        rng: &mut R,
    ) -> Result<Coord, EngineError> {
        while let Some(cell) = self.pending.pop_front() {
            if !history.contains(cell) {
                debug!("targeting queued cell {:?}", cell);
                return Ok(cell);
            }
        }
        hunt(history, rng)
    }

    /// Feed back the result of a shot at `cell`. `history` must already
    /// include `cell`.
    pub fn observe(&mut self, cell: Coord, outcome: &ShotOutcome, history: &CellSet) {
        match outcome {
            ShotOutcome::Touched if self.hard => {
                for n in neighbours(cell) {
                    if !history.contains(n) && !self.pending.contains(&n) {
                        self.pending.push_back(n);
                    }
                }
                debug!("hit at {:?}, {} candidates queued", cell, self.pending.len());
            }
            ShotOutcome::Touched
            | ShotOutcome::Sunk { .. }
            | ShotOutcome::Miss
            | ShotOutcome::AlreadyFired => {}
        }
    }
}

/// Uniform random choice among cells not in `history`.
pub fn hunt<R: Rng + ?Sized>(history: &CellSet, rng: &mut R) -> Result<Coord, EngineError> {
    let open = history.complement();
    let count = open.len();
    if count == 0 {
        return Err(EngineError::NoTargetsRemaining);
    }
    let pick = rng.random_range(0..count);
    open.iter().nth(pick).ok_or(EngineError::NoTargetsRemaining)
}

/// In-grid orthogonal neighbours of `cell`: north, south, west, east.
pub fn neighbours((row, col): Coord) -> impl Iterator<Item = Coord> {
    let north = row.checked_sub(1).map(|r| (r, col));
    let south = (row + 1 < GRID_SIZE).then(|| (row + 1, col));
    let west = col.checked_sub(1).map(|c| (row, c));
    let east = (col + 1 < GRID_SIZE).then(|| (row, col + 1));
    [north, south, west, east].into_iter().flatten()
}
