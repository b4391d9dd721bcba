//! Engine boundary types for the duelist battle sim.
//!
//! This crate defines the contract between the opaque battle-resolution
//! engine and the turn-resolution decision layer built on top of it:
//!
//! ```text
//! battle-resolution engine (opaque)
//!        │  Engine trait: snapshot / apply_turn / fork
//!        ▼
//! duelist-engine (view model + contract) ← THIS CRATE
//!        │
//!        ├─> duelist-turns   (phase classifier, enumerator, validator)
//!        └─> duelist-trainer (evaluator, decision search)
//! ```
//!
//! # Main Types
//!
//! - [`Engine`] - trait an engine adapter implements (joint command
//!   application, deep forking for lookahead)
//! - [`Snapshot`] - read-only tagged-union view of one decision point
//! - [`RequestState`], [`ActiveOptions`], [`MoveOption`] - pending-request data
//! - [`Combatant`], [`SideView`] - per-side roster state
//! - [`Status`], [`Volatile`], [`SideCondition`], [`StatStages`] - domain types
//!
//! The view model is deliberately explicit: the decision layer reads tagged
//! enums instead of probing optional fields, so an engine adapter has exactly
//! one place to say what kind of input it is waiting for.

mod combatant;
mod conditions;
mod player;
mod sim;
mod snapshot;
mod stats;
mod status;

pub use combatant::Combatant;
pub use conditions::{ConditionState, SideCondition};
pub use player::Player;
pub use sim::{Engine, EngineError};
pub use snapshot::{ActiveOptions, MoveOption, RequestState, SideView, Snapshot};
pub use stats::{Stat, StatStages};
pub use status::{Status, Volatile};
