use rand::Rng;

use crate::{
    bitboard::CellSet,
    board::Board,
    common::{Coord, EngineError, ShotOutcome},
    targeting::Targeting,
};

/// Interface implemented by anything that can run one side of a match.
pub trait Player {
    /// Place all remaining ships onto the provided board.
    fn place_ships<R: Rng + ?Sized>(&mut self, rng: &mut R, board: &mut Board) -> Result<(), EngineError>;

    /// Choose the next cell to fire at, given the cells already fired at.
    fn select_target<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        history: &CellSet,
    ) -> Result<Coord, EngineError>;

    /// Inform the player of the result of its last shot. `history` already
    /// contains `coord`.
    fn handle_shot_result(&mut self, _coord: Coord, _outcome: &ShotOutcome, _history: &CellSet) {}
}

/// Computer player driven by hunt/target selection.
#[derive(Debug, Clone, Default)]
pub struct AiPlayer {
    targeting: Targeting,
}

impl AiPlayer {
    pub fn new(hard: bool) -> Self {
        Self {
            targeting: Targeting::new(hard),
        }
    }

    pub fn targeting(&self) -> &Targeting {
        &self.targeting
    }

    pub fn targeting_mut(&mut self) -> &mut Targeting {
        &mut self.targeting
    }
}

impl Player for AiPlayer {
    fn place_ships<R: Rng + ?Sized>(&mut self, rng: &mut R, board: &mut Board) -> Result<(), EngineError> {
        board.place_fleet_randomly(rng);
        Ok(())
    }

    fn select_target<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        history: &CellSet,
    ) -> Result<Coord, EngineError> {
        self.targeting.next_target(history, rng)
    }

    fn handle_shot_result(&mut self, coord: Coord, outcome: &ShotOutcome, history: &CellSet) {
        self.targeting.observe(coord, outcome, history);
    }
}
