//! Unattended driver for the minefield engine: plays batches of games with
//! an automated policy, restarting on every win or loss, and optionally
//! records per-turn snapshots for the external training pipeline.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use minado_core::{Game, GameConfig, GameOutcome, GameStatus, generate};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing_subscriber::EnvFilter;

use policy::{DeductionPolicy, Policy, RandomPolicy};
use recording::{GameRecord, Recorder, TurnRecord};

mod policy;
mod recording;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
    Test,
}

impl Difficulty {
    fn config(self) -> GameConfig {
        match self {
            Self::Beginner => GameConfig::BEGINNER,
            Self::Intermediate => GameConfig::INTERMEDIATE,
            Self::Expert => GameConfig::EXPERT,
            Self::Test => GameConfig::TEST,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PolicyKind {
    Deduction,
    Random,
}

#[derive(Parser, Debug)]
#[command(
    name = "autoplay",
    about = "Plays unattended minefield games with an automated policy"
)]
struct Args {
    /// Board preset to play on
    #[arg(long, value_enum, default_value = "beginner")]
    difficulty: Difficulty,

    /// Number of games to play back-to-back
    #[arg(long, default_value_t = 100)]
    games: u32,

    /// Move-selection policy
    #[arg(long, value_enum, default_value = "deduction")]
    policy: PolicyKind,

    /// Base seed; game N plays with seed + N
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Write per-turn training records to this file (JSON lines)
    #[arg(long)]
    record: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = args.difficulty.config();

    let mut policy: Box<dyn Policy> = match args.policy {
        PolicyKind::Deduction => Box::new(DeductionPolicy),
        PolicyKind::Random => Box::new(RandomPolicy),
    };

    let mut recorder = args.record.as_deref().map(|_| Recorder::default());
    let mut wins = 0u32;

    for index in 0..args.games {
        let game_seed = args.seed.wrapping_add(u64::from(index));
        let record = play_one(config, policy.as_mut(), game_seed)?;

        tracing::debug!(
            seed = record.seed,
            turns = record.turns.len(),
            outcome = ?record.outcome,
            "game finished"
        );

        if record.outcome == GameStatus::Won {
            wins += 1;
        }
        if let Some(recorder) = recorder.as_mut() {
            recorder.push(record);
        }
    }

    tracing::info!(
        policy = policy.name(),
        wins,
        games = args.games,
        "session finished"
    );

    if let (Some(recorder), Some(path)) = (&recorder, &args.record) {
        recorder.write_jsonl(path)?;
        tracing::info!(path = %path.display(), games = recorder.len(), "wrote training records");
    }

    Ok(())
}

/// Plays one game to completion. Each game gets its own freshly generated
/// board and its own RNG seeded from `seed`, so a session is reproducible
/// move for move. Flags never carry over: a restart is a new board.
fn play_one(config: GameConfig, policy: &mut dyn Policy, seed: u64) -> Result<GameRecord> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::new(generate(config, &mut rng)?);
    let mut turns = Vec::new();

    while !game.is_over() {
        let turn = policy.choose(&game.snapshot(), &mut rng);

        if turn.is_empty() {
            // only reachable when every hidden cell is flagged; nothing
            // sensible left to do
            tracing::warn!(seed, "policy produced no moves, abandoning game");
            break;
        }

        for &pos in &turn.flags {
            game.toggle_flag(pos)?;
        }

        for &pos in &turn.reveals {
            turns.push(TurnRecord {
                snapshot: game.snapshot(),
                chosen: pos,
                score: game.revealed_safe(),
            });

            match game.reveal(pos)? {
                GameOutcome::Continue => {}
                GameOutcome::Won | GameOutcome::Lost => break,
            }
        }
    }

    Ok(GameRecord {
        seed,
        turns,
        outcome: game.status(),
    })
}
