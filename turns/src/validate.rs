//! Free-text command validation

use std::collections::HashSet;

use duelist_engine::{Player, Snapshot};
use thiserror::Error;

use crate::phase::Phase;

/// A user-correctable command rejection
///
/// Each variant carries a distinguishing message for the issuing side; none
/// of these are fatal and none reach the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No valid moves available, input must be empty")]
    ExpectedEmpty,

    #[error("Expected 'team' command for team preview")]
    ExpectedTeam,

    #[error("Expected exactly one argument after 'team'")]
    TeamArity,

    #[error("Team code must be exactly six digits from 1 to 6")]
    TeamCodeMalformed,

    #[error("Team code digits must be unique (no duplicates)")]
    TeamCodeDuplicate,

    #[error("Unexpected 'team' command outside of team preview")]
    UnexpectedTeam,

    #[error("Expected 'switch' command for forced switch")]
    ExpectedSwitch,

    #[error("Cannot switch to {target}. Valid choices are: {}", .valid.join(", "))]
    BadSwitchTarget { target: String, valid: Vec<String> },
}

/// Validate a free-text command against the classified phase and the
/// commanding side's roster
///
/// Rules are evaluated in a fixed order; the first violation wins. A `move`
/// command's id is deliberately not cross-checked against the legal move
/// set here - the engine is the authority on move legality and rejects bad
/// ids itself.
pub fn validate(
    input: &str,
    phase: Phase,
    player: Player,
    snapshot: &Snapshot,
) -> Result<(), ValidationError> {
    if phase == Phase::Wait {
        return if input.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::ExpectedEmpty)
        };
    }

    let args: Vec<&str> = input.split_whitespace().collect();
    let verb = args.first().map(|s| s.to_lowercase()).unwrap_or_default();

    if phase == Phase::Team {
        if verb != "team" {
            return Err(ValidationError::ExpectedTeam);
        }
        if args.len() != 2 {
            return Err(ValidationError::TeamArity);
        }
        let code = args[1];
        if code.len() != 6 || !code.chars().all(|c| ('1'..='6').contains(&c)) {
            return Err(ValidationError::TeamCodeMalformed);
        }
        let unique: HashSet<char> = code.chars().collect();
        if unique.len() != 6 {
            return Err(ValidationError::TeamCodeDuplicate);
        }
        return Ok(());
    }
    if verb == "team" {
        return Err(ValidationError::UnexpectedTeam);
    }

    if phase == Phase::Switch && verb != "switch" {
        return Err(ValidationError::ExpectedSwitch);
    }

    if verb == "switch" {
        let target = args.get(1).copied().unwrap_or("");
        let valid: Vec<String> = snapshot
            .side(player)
            .bench()
            .map(|c| c.species.to_lowercase())
            .collect();
        if !valid.iter().any(|s| s == &target.to_lowercase()) {
            return Err(ValidationError::BadSwitchTarget {
                target: target.to_string(),
                valid,
            });
        }
    }

    Ok(())
}
