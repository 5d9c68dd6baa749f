//! Command-line entry point: load a map, unleash some aliens, write out
//! whatever is left standing.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use invasion_sim::mapfile::{load_board, save_board};
use invasion_sim::{DEFAULT_MAX_MOVES, InvasionError, flush, sim};

/// Invade some cities!
#[derive(Parser, Debug)]
#[command(name = "invasion-sim", version, about = "Invade some cities!")]
struct Args {
    /// Map file to load
    map: PathBuf,

    /// Number of aliens to create
    aliens: usize,

    /// Maximum number of moves an alien can make
    #[arg(short, long, default_value_t = DEFAULT_MAX_MOVES)]
    max_moves: u64,

    /// Where the surviving cities are written (`-` for stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// RNG seed (default: random; the chosen seed is logged so a run can
    /// be replayed)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Also write the destruction log to this path as JSONL
    #[arg(long)]
    events: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match invade(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn invade(args: &Args) -> Result<(), InvasionError> {
    let mut board = load_board(&args.map)?;
    info!("found {} cities", board.living_cities.len());

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!(
        seed,
        aliens = args.aliens,
        max_moves = args.max_moves,
        "starting invasion"
    );

    let mut rng = SmallRng::seed_from_u64(seed);
    sim::setup_game(&mut board, args.aliens, &mut rng)?;
    let log = sim::run_with_rng(&mut board, args.max_moves, &mut rng)?;

    info!(
        destroyed = log.destructions.len(),
        cities_left = board.living_cities.len(),
        survivors = board.living_aliens.len(),
        "invasion over"
    );

    if let Some(path) = &args.events {
        flush::flush_events_to_jsonl(&log, path)?;
    }
    save_board(&args.output, &board)?;
    Ok(())
}
