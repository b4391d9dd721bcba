//! Scripted-opponent decision making for duelist battles.
//!
//! Built on top of `duelist-engine` and `duelist-turns`:
//!
//! - [`evaluate`] - fixed weighted heuristic scoring a snapshot from one
//!   side's perspective
//! - [`decide`] - one-ply expectation search over both sides' legal command
//!   sets, sampling from a sharpened stochastic policy
//! - [`resolve_decision_point`] - session driver pairing one human command
//!   with the AI's choice and auto-resolving AI-only decision points
//!
//! The policy deliberately observes the full snapshot, including state a
//! real opponent could not see. That is a simplification of this AI, not a
//! fairness guarantee.

mod heuristics;
mod picker;
mod session;

pub use heuristics::{evaluate, try_evaluate, EvalError};
pub use picker::{decide, decide_with};
pub use session::{resolve_decision_point, TurnReport};

use duelist_engine::Player;

/// Identity of one participant: which side it commands and the display name
/// shown for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInfo {
    pub player: Player,
    pub name: String,
}

impl PlayerInfo {
    pub fn new(player: Player, name: impl Into<String>) -> Self {
        Self {
            player,
            name: name.into(),
        }
    }
}

/// Order an (ai, human) command pair into the engine's (p1, p2) order.
pub(crate) fn ordered_pair<'a>(
    ai: Player,
    ai_cmd: &'a str,
    human_cmd: &'a str,
) -> (&'a str, &'a str) {
    match ai {
        Player::P1 => (ai_cmd, human_cmd),
        Player::P2 => (human_cmd, ai_cmd),
    }
}

#[cfg(test)]
pub(crate) mod testutil;
