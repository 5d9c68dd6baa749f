use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;

use super::fights::resolve_fights;
use super::movement::move_alien;
use crate::error::InvasionError;
use crate::model::{Board, EventLog};

/// Default per-alien move budget.
pub const DEFAULT_MAX_MOVES: u64 = 10_000;

/// Configuration for one simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Per-alien move budget; the run ends once every living alien has
    /// spent it.
    pub max_moves: u64,
    /// Seed for the run's RNG — the same seed replays the same invasion.
    pub seed: u64,
}

impl SimConfig {
    pub fn new(max_moves: u64, seed: u64) -> Self {
        Self { max_moves, seed }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_moves: DEFAULT_MAX_MOVES,
            seed: 42,
        }
    }
}

/// Run the invasion to completion, returning the destruction log.
///
/// Creates a deterministic RNG from `config.seed`, so the same seed and
/// board always produce the same run.
pub fn run(board: &mut Board, config: &SimConfig) -> Result<EventLog, InvasionError> {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    run_with_rng(board, config.max_moves, &mut rng)
}

/// The round loop, with an injected RNG so tests can supply their own.
///
/// Each round moves every alien that was alive at the start of the round
/// (a snapshot — fights in the previous round shrink the living set), then
/// resolves fights once. Movement and resolution are strictly separate
/// phases: resolution always sees the result of every move of the round.
///
/// The run ends, checked after resolution, when no aliens or no cities are
/// left, or when every living alien has spent its move budget. A lone
/// survivor with moves to spare keeps wandering; that is deliberate.
pub fn run_with_rng(
    board: &mut Board,
    max_moves: u64,
    rng: &mut dyn RngCore,
) -> Result<EventLog, InvasionError> {
    let mut log = EventLog::new();
    let mut round: u64 = 0;

    loop {
        round += 1;

        let movers: Vec<u64> = board.living_aliens.iter().copied().collect();
        for alien_id in movers {
            move_alien(board, alien_id, rng)?;
        }

        resolve_fights(board, round, &mut log);

        if board.living_aliens.is_empty() || board.living_cities.is_empty() {
            break;
        }
        if board
            .living_aliens
            .iter()
            .all(|id| board.alien(*id).moves >= max_moves)
        {
            break;
        }
    }

    debug!(
        rounds = round,
        destroyed = log.destructions.len(),
        survivors = board.living_aliens.len(),
        "invasion over"
    );
    Ok(log)
}
