//! Headless Ludo simulator: plays seeded games and reports the results.

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};

use ludo_engine::session::{play_out, LudoGameBuilder};
use ludo_engine::{EngineConfig, GameRng, OvershootPolicy, PlayerId, PlayerMap};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Overshoot {
    /// A six that overshoots still grants the bonus roll
    Keep,
    /// A six that overshoots ends the turn
    Forfeit,
}

impl From<Overshoot> for OvershootPolicy {
    fn from(value: Overshoot) -> Self {
        match value {
            Overshoot::Keep => OvershootPolicy::KeepTurn,
            Overshoot::Forfeit => OvershootPolicy::ForfeitTurn,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Master seed; each game gets its own seed forked from it
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Number of games to play
    #[arg(short, long, default_value_t = 1)]
    games: u32,

    /// Roll budget per game
    #[arg(long, default_value_t = ludo_engine::session::DEFAULT_MAX_ROLLS)]
    max_rolls: u32,

    /// Bonus-roll handling for a six that overshoots the goal
    #[arg(long, value_enum, default_value_t = Overshoot::Keep)]
    overshoot: Overshoot,

    /// Log every event
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .init();

    if args.games == 0 {
        bail!("--games must be at least 1");
    }

    let config = EngineConfig::new().with_overshoot(args.overshoot.into());
    let mut wins: PlayerMap<u32> = PlayerMap::default();
    let mut unfinished = 0u32;
    let mut master = GameRng::new(args.seed);

    for i in 0..args.games {
        let seed = master.fork().seed();
        let mut game = LudoGameBuilder::new().config(config.clone()).build(seed);
        let stats = play_out(&mut game, args.max_rolls, |event| debug!("{event}"))?;

        match stats.winner {
            Some(winner) => {
                wins[winner] += 1;
                println!(
                    "game {i} (seed {seed}): {winner} ({}) wins after {} rolls, {} turns, {} captures",
                    winner.color().name(),
                    stats.rolls,
                    stats.turns,
                    stats.captures
                );
            }
            None => {
                unfinished += 1;
                println!("game {i} (seed {seed}): no winner after {} rolls", stats.rolls);
            }
        }
    }

    info!("{} games, {} unfinished", args.games, unfinished);
    for player in PlayerId::all() {
        let share = f64::from(wins[player]) * 100.0 / f64::from(args.games);
        println!("{player}: {} wins ({share:.1}%)", wins[player]);
    }

    Ok(())
}
