pub mod error;
pub mod flush;
pub mod id;
pub mod mapfile;
pub mod model;
pub mod sim;

pub use error::InvasionError;
pub use id::IdGenerator;
pub use model::{Alien, Board, City, Destruction, Direction, EventLog};
pub use sim::{DEFAULT_MAX_MOVES, SimConfig, run, run_with_rng, setup_game};
