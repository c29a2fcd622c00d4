use naval_duel::{
    hunt, neighbours, CellSet, EngineError, ShotOutcome, TargetMode, Targeting, GRID_SIZE,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn fired(history: &mut CellSet, cell: (usize, usize)) {
    history.insert(cell).unwrap();
}

#[test]
fn test_neighbours_clip_at_edges() {
    let corner: Vec<_> = neighbours((0, 0)).collect();
    assert_eq!(corner, vec![(1, 0), (0, 1)]);

    let middle: Vec<_> = neighbours((4, 4)).collect();
    assert_eq!(middle, vec![(3, 4), (5, 4), (4, 3), (4, 5)]);

    let far: Vec<_> = neighbours((9, 9)).collect();
    assert_eq!(far, vec![(8, 9), (9, 8)]);
}

#[test]
fn test_hunt_exhausted_grid() {
    let full = CellSet::new().complement();
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(hunt(&full, &mut rng), Err(EngineError::NoTargetsRemaining));

    let mut t = Targeting::new(true);
    assert_eq!(t.next_target(&full, &mut rng), Err(EngineError::NoTargetsRemaining));
}

#[test]
fn test_hunt_picks_last_open_cell() {
    let mut history = CellSet::new().complement();
    history.remove((6, 2)).unwrap();
    let mut rng = SmallRng::seed_from_u64(99);
    for _ in 0..10 {
        assert_eq!(hunt(&history, &mut rng), Ok((6, 2)));
    }
}

#[test]
fn test_easy_mode_never_queues() {
    let mut t = Targeting::new(false);
    let mut history = CellSet::new();
    fired(&mut history, (4, 4));
    t.observe((4, 4), &ShotOutcome::Touched, &history);
    assert_eq!(t.mode(), TargetMode::Hunt);
    assert_eq!(t.pending().count(), 0);
}

#[test]
fn test_hard_mode_follows_up_on_hit() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut t = Targeting::new(true);
    let mut history = CellSet::new();
    fired(&mut history, (4, 4));
    fired(&mut history, (4, 5));
    t.observe((4, 4), &ShotOutcome::Touched, &history);
    assert_eq!(t.mode(), TargetMode::Target);

    // (4, 5) was already fired at, so only three candidates
    let queued: Vec<_> = t.pending().copied().collect();
    assert_eq!(queued, vec![(3, 4), (5, 4), (4, 3)]);

    for expected in queued {
        let cell = t.next_target(&history, &mut rng).unwrap();
        assert_eq!(cell, expected);
        fired(&mut history, cell);
        t.observe(cell, &ShotOutcome::Miss, &history);
    }
    assert_eq!(t.mode(), TargetMode::Hunt);
    let cell = t.next_target(&history, &mut rng).unwrap();
    assert!(!history.contains(cell));
}

#[test]
fn test_stale_candidates_skipped() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut t = Targeting::new(true);
    let mut history = CellSet::new();
    fired(&mut history, (0, 0));
    t.observe((0, 0), &ShotOutcome::Touched, &history);

    // both queued cells get fired at by some other route
    fired(&mut history, (1, 0));
    fired(&mut history, (0, 1));
    let cell = t.next_target(&history, &mut rng).unwrap();
    assert!(!history.contains(cell));
    assert_eq!(t.mode(), TargetMode::Hunt);
}

#[test]
fn test_sunk_does_not_queue() {
    let mut t = Targeting::new(true);
    let mut history = CellSet::new();
    fired(&mut history, (2, 2));
    t.observe(
        (2, 2),
        &ShotOutcome::Sunk {
            ship: "Submarine1",
            cells: vec![(2, 1), (2, 2)],
        },
        &history,
    );
    assert_eq!(t.mode(), TargetMode::Hunt);
}

#[test]
fn test_toggle_off_drains_existing_queue() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut t = Targeting::new(true);
    let mut history = CellSet::new();
    fired(&mut history, (5, 5));
    t.observe((5, 5), &ShotOutcome::Touched, &history);
    t.set_hard_mode(false);
    assert!(!t.is_hard_mode());

    let first = t.next_target(&history, &mut rng).unwrap();
    assert_eq!(first, (4, 5));
    fired(&mut history, first);
    // new hits no longer queue anything
    t.observe(first, &ShotOutcome::Touched, &history);
    assert_eq!(t.pending().count(), 3);

    t.reset();
    assert_eq!(t.mode(), TargetMode::Hunt);
    assert!(!t.is_hard_mode());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn next_shot_after_hit_is_adjacent(
        seed in any::<u64>(),
        row in 0..GRID_SIZE,
        col in 0..GRID_SIZE,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut t = Targeting::new(true);
        let mut history = CellSet::new();
        history.insert((row, col)).unwrap();
        t.observe((row, col), &ShotOutcome::Touched, &history);

        let next = t.next_target(&history, &mut rng).unwrap();
        let adjacent: Vec<_> = neighbours((row, col)).collect();
        prop_assert!(adjacent.contains(&next));
    }

    #[test]
    fn never_repeats_a_shot(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut t = Targeting::new(true);
        let mut history = CellSet::new();
        for i in 0..GRID_SIZE * GRID_SIZE {
            let cell = t.next_target(&history, &mut rng).unwrap();
            prop_assert!(history.insert(cell).unwrap());
            let outcome = if i % 3 == 0 { ShotOutcome::Touched } else { ShotOutcome::Miss };
            t.observe(cell, &outcome, &history);
        }
        prop_assert_eq!(
            t.next_target(&history, &mut rng),
            Err(EngineError::NoTargetsRemaining)
        );
    }
}
