#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use naval_duel::{init_logging, AiPlayer, Match, MatchOutcome, Phase, Player, Side};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play whole matches with the computer standing in for the human side.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Let the computer opponent chase hits")]
        hard: bool,
        #[arg(long, default_value_t = 1)]
        games: u32,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sim { seed, hard, games } => {
            let base = match seed {
                Some(s) => s,
                None => rand::random(),
            };
            for game in 0..games {
                let seed = base.wrapping_add(u64::from(game) * 2);
                let summary = simulate(seed, hard)?;
                println!("{}", serde_json::to_string(&summary)?);
            }
        }
    }
    Ok(())
}

/// Run one match to completion and describe it as JSON.
#[cfg(feature = "std")]
fn simulate(seed: u64, hard: bool) -> anyhow::Result<serde_json::Value> {
    let mut game = Match::with_seed(seed);
    game.set_hard_mode(hard);
    game.place_fleet_randomly().map_err(|e| anyhow::anyhow!(e))?;
    game.start_battle().map_err(|e| anyhow::anyhow!(e))?;

    // The stand-in human plays easy mode with its own RNG stream.
    let mut human = AiPlayer::new(false);
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut turns = 0u32;
    while game.phase() == Phase::Battle {
        turns += 1;
        let history = *game.human_board().shots_fired();
        let target = human
            .select_target(&mut rng, &history)
            .map_err(|e| anyhow::anyhow!(e))?;
        let report = game
            .fire(target.0, target.1)
            .map_err(|e| anyhow::anyhow!(e))?;
        human.handle_shot_result(target, &report.shot.outcome, game.human_board().shots_fired());
    }

    let winner = match game.outcome() {
        Some(MatchOutcome::Winner(Side::Human)) => Some("human"),
        Some(MatchOutcome::Winner(Side::Computer)) => Some("computer"),
        Some(MatchOutcome::NoTargetsRemaining) | None => None,
    };
    Ok(json!({
        "seed": seed,
        "hard": hard,
        "turns": turns,
        "phase": game.phase(),
        "winner": winner,
        "human": game.stats(Side::Human),
        "computer": game.stats(Side::Computer),
    }))
}
