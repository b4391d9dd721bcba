//! Turn-resolution plumbing for duelist battles.
//!
//! Three pure views over an engine [`Snapshot`](duelist_engine::Snapshot):
//!
//! - [`classify`] - what kind of command each side owes the engine
//! - [`enumerate`] - the literal set of syntactically legal command strings
//!   for one side
//! - [`validate`] - whether a free-text human command fits the classified
//!   phase and the commanding side's roster
//!
//! All three are deterministic functions of the snapshot; nothing here
//! mutates engine state, so validation always happens before any command
//! reaches [`Engine::apply_turn`](duelist_engine::Engine::apply_turn).
//!
//! Command grammar (case-insensitive verb):
//!
//! ```text
//! ""                  wait
//! team DDDDDD         six-digit permutation of 1..6
//! move <id>
//! switch <species>
//! ```

mod choices;
mod phase;
mod validate;

pub use choices::enumerate;
pub use phase::{classify, Phase, Phases};
pub use validate::{validate, ValidationError};
