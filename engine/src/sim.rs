//! The contract an engine adapter implements

use thiserror::Error;

use crate::snapshot::Snapshot;

/// Errors surfaced by an engine adapter
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Battle has already ended")]
    Ended,

    #[error("Engine rejected command pair ({first:?}, {second:?}): {reason}")]
    Rejected {
        first: String,
        second: String,
        reason: String,
    },

    #[error("Engine failure: {0}")]
    Internal(String),
}

/// Opaque battle-resolution engine holding one battle
///
/// The decision layer drives a battle exclusively through this trait: it
/// reads a [`Snapshot`], derives commands, and applies both sides' commands
/// jointly. A decision point is never advanced by one command alone; the
/// engine applies the pair or fails without mutating state.
///
/// [`fork`](Engine::fork) exists for lookahead: search clones the live
/// battle, applies a candidate pair to the clone, and scores the result.
/// Forks must be deep copies, mutation-isolated from the source and from
/// every sibling fork.
pub trait Engine {
    /// Independent copy of the current battle state
    fn snapshot(&self) -> Snapshot;

    /// Apply one command per side (p1 first), advancing exactly one
    /// decision point
    fn apply_turn(&mut self, first: &str, second: &str) -> Result<(), EngineError>;

    /// Deep copy of this engine for simulation
    fn fork(&self) -> Box<dyn Engine>;
}
