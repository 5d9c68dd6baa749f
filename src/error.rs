use std::io;

/// Errors surfaced to callers of the setup, run, and serialization layers.
///
/// Lookups of ids that were never created are programming defects, not
/// runtime conditions, and panic instead — see the `Board` methods.
#[derive(Debug, thiserror::Error)]
pub enum InvasionError {
    /// The requested game cannot be set up (e.g. more aliens than cities).
    /// Reported to the user; the simulation never starts.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Occupancy or graph bookkeeping went inconsistent. Always a bug;
    /// the run aborts rather than continuing with a corrupted board.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// The map file could not be read or an output could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
