pub mod fights;
pub mod movement;
pub mod runner;
pub mod setup;

pub use fights::resolve_fights;
pub use movement::move_alien;
pub use runner::{DEFAULT_MAX_MOVES, SimConfig, run, run_with_rng};
pub use setup::setup_game;
