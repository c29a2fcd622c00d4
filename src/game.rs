//! Match state machine: placement, then alternating shots, then a result.

use log::{info, warn};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    board::Board,
    common::{Coord, EngineError, ShotOutcome},
    player::{AiPlayer, Player},
    ship::Orientation,
    targeting::TargetMode,
};

/// Where the match currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Placement,
    Battle,
    Finished,
}

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Computer => 1,
        }
    }
}

/// How a finished match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchOutcome {
    Winner(Side),
    /// The computer ran out of cells to fire at with no fleet sunk.
    NoTargetsRemaining,
}

/// Shot counters for one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotStats {
    /// Shots that touched or sank a ship.
    pub hits: u32,
    pub misses: u32,
}

impl ShotStats {
    fn record(&mut self, outcome: &ShotOutcome) {
        match outcome {
            ShotOutcome::Touched | ShotOutcome::Sunk { .. } => self.hits += 1,
            ShotOutcome::Miss => self.misses += 1,
            ShotOutcome::AlreadyFired => {}
        }
    }

    pub fn total(&self) -> u32 {
        self.hits + self.misses
    }
}

/// One resolved shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shot {
    pub side: Side,
    pub coord: Coord,
    pub outcome: ShotOutcome,
}

/// Everything that happened during one call to [`Match::fire`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// The human shot.
    pub shot: Shot,
    /// The computer's reply, absent if the human shot ended the match or the
    /// computer had nothing left to fire at.
    pub reply: Option<Shot>,
    /// Set once the match is over.
    pub outcome: Option<MatchOutcome>,
}

/// A single human-versus-computer match.
///
/// The computer fleet is placed as soon as the match is created. The human
/// fleet is placed through [`Match::place`] or [`Match::place_fleet_randomly`]
/// and battle begins with [`Match::start_battle`].
pub struct Match<R: Rng = SmallRng> {
    phase: Phase,
    human: Board,
    computer: Board,
    opponent: AiPlayer,
    stats: [ShotStats; 2],
    outcome: Option<MatchOutcome>,
    rng: R,
}

impl Match<SmallRng> {
    /// Match whose randomness is pinned by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Match seeded from the thread RNG.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Self::new(SmallRng::from_rng(&mut seed_rng))
    }
}

impl<R: Rng> Match<R> {
    /// New match in the placement phase, drawing all randomness from `rng`.
    pub fn new(mut rng: R) -> Self {
        let mut computer = Board::new();
        computer.place_fleet_randomly(&mut rng);
        Match {
            phase: Phase::Placement,
            human: Board::new(),
            computer,
            opponent: AiPlayer::default(),
            stats: [ShotStats::default(); 2],
            outcome: None,
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Result of the match, once `phase()` is `Finished`.
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    pub fn human_board(&self) -> &Board {
        &self.human
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer
    }

    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    pub fn stats(&self, side: Side) -> ShotStats {
        self.stats[side.index()]
    }

    pub fn set_hard_mode(&mut self, hard: bool) {
        self.opponent.targeting_mut().set_hard_mode(hard);
    }

    pub fn is_hard_mode(&self) -> bool {
        self.opponent.targeting().is_hard_mode()
    }

    /// Mode the computer's next shot will come from.
    pub fn target_mode(&self) -> TargetMode {
        self.opponent.targeting().mode()
    }

    pub fn unplaced_ship_names(&self) -> alloc::vec::Vec<&'static str> {
        self.human.unplaced_ship_names()
    }

    /// Placement preview for the human fleet. Always `false` outside placement.
    pub fn can_place(&self, name: &str, row: usize, col: usize, orientation: Orientation) -> bool {
        self.phase == Phase::Placement && self.human.can_place(name, row, col, orientation)
    }

    pub fn place(
        &mut self,
        name: &str,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), EngineError> {
        self.require(Phase::Placement)?;
        self.human.place(name, row, col, orientation)
    }

    pub fn remove(&mut self, name: &str) -> Result<(), EngineError> {
        self.require(Phase::Placement)?;
        self.human.remove(name)
    }

    /// Randomly place whatever part of the human fleet is still unplaced.
    pub fn place_fleet_randomly(&mut self) -> Result<(), EngineError> {
        self.require(Phase::Placement)?;
        self.human.place_fleet_randomly(&mut self.rng);
        Ok(())
    }

    /// Leave placement and start the battle.
    pub fn start_battle(&mut self) -> Result<(), EngineError> {
        self.require(Phase::Placement)?;
        if !self.human.is_fleet_placed() {
            return Err(EngineError::FleetIncomplete);
        }
        self.phase = Phase::Battle;
        info!("battle started (hard mode: {})", self.is_hard_mode());
        Ok(())
    }

    /// Human fires at (`row`, `col`) on the computer board; unless that ends
    /// the match, the computer answers with one shot of its own.
    ///
    /// A repeat shot is rejected with `AlreadyFired` and changes nothing.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<TurnReport, EngineError> {
        self.require(Phase::Battle)?;
        let outcome = self.human.fire_at(&mut self.computer, row, col)?;
        if outcome == ShotOutcome::AlreadyFired {
            return Err(EngineError::AlreadyFired);
        }
        self.stats[Side::Human.index()].record(&outcome);
        info!("human fires at {:?}: {}", (row, col), outcome);
        let shot = Shot {
            side: Side::Human,
            coord: (row, col),
            outcome,
        };

        if self.computer.all_sunk() {
            self.finish(MatchOutcome::Winner(Side::Human));
            return Ok(TurnReport {
                shot,
                reply: None,
                outcome: self.outcome,
            });
        }

        let reply = self.computer_turn();
        Ok(TurnReport {
            shot,
            reply,
            outcome: self.outcome,
        })
    }

    /// Back to placement with fresh boards and stats. The difficulty setting
    /// is kept.
    pub fn restart(&mut self) {
        self.human.clear();
        self.computer.clear();
        self.computer.place_fleet_randomly(&mut self.rng);
        self.opponent.targeting_mut().reset();
        self.stats = [ShotStats::default(); 2];
        self.outcome = None;
        self.phase = Phase::Placement;
        info!("new match");
    }

    fn computer_turn(&mut self) -> Option<Shot> {
        let target = match self
            .opponent
            .select_target(&mut self.rng, self.computer.shots_fired())
        {
            Ok(cell) => cell,
            Err(_) => {
                self.finish(MatchOutcome::NoTargetsRemaining);
                return None;
            }
        };
        let (row, col) = target;
        let outcome = match self.computer.fire_at(&mut self.human, row, col) {
            Ok(ShotOutcome::AlreadyFired) | Err(_) => {
                warn!("computer selected unusable target {:?}", target);
                self.finish(MatchOutcome::NoTargetsRemaining);
                return None;
            }
            Ok(outcome) => outcome,
        };
        self.opponent
            .handle_shot_result(target, &outcome, self.computer.shots_fired());
        self.stats[Side::Computer.index()].record(&outcome);
        info!("computer fires at {:?}: {}", target, outcome);

        if self.human.all_sunk() {
            self.finish(MatchOutcome::Winner(Side::Computer));
        }
        Some(Shot {
            side: Side::Computer,
            coord: target,
            outcome,
        })
    }

    fn finish(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Winner(side) => info!("match over, {:?} wins", side),
            MatchOutcome::NoTargetsRemaining => warn!("match over, computer has no targets left"),
        }
        self.outcome = Some(outcome);
        self.phase = Phase::Finished;
    }

    fn require(&self, phase: Phase) -> Result<(), EngineError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(EngineError::InvalidPhase)
        }
    }
}
