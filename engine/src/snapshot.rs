//! Read-only snapshot view of a battle at one decision point

use std::collections::HashMap;

use crate::combatant::Combatant;
use crate::conditions::{ConditionState, SideCondition};
use crate::player::Player;

/// What kind of input the engine is waiting for, battle-wide
///
/// `Other` carries the raw tag for request kinds this layer does not model;
/// the classifier degrades those to waiting on both sides rather than
/// failing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RequestState {
    TeamPreview,
    Move,
    Switch,
    Other(String),
}

/// One move slot on the active combatant during a move request
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOption {
    /// Move id (lowercase, no spaces)
    pub id: String,

    /// Whether the move cannot currently be chosen
    pub disabled: bool,

    /// Remaining PP
    pub pp: u32,
}

impl MoveOption {
    pub fn new(id: impl Into<String>, pp: u32) -> Self {
        Self {
            id: id.into(),
            disabled: false,
            pp,
        }
    }
}

/// Move-request data for a side's active combatant
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveOptions {
    /// Moves in engine-reported order
    pub moves: Vec<MoveOption>,

    /// Whether the active combatant is prevented from switching out
    pub trapped: bool,
}

/// One side of the battle as the engine reports it
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideView {
    /// Which player owns this side
    pub player: Player,

    /// Display name shown for this side
    pub name: String,

    /// Roster in engine-reported order
    pub team: Vec<Combatant>,

    /// Present during move requests
    pub active: Option<ActiveOptions>,

    /// During switch requests: this side has nothing to choose
    pub waiting: bool,

    /// Active side conditions (hazards, screens)
    pub conditions: HashMap<SideCondition, ConditionState>,
}

impl SideView {
    /// Create an empty side
    pub fn new(player: Player, name: impl Into<String>) -> Self {
        Self {
            player,
            name: name.into(),
            team: Vec::new(),
            active: None,
            waiting: false,
            conditions: HashMap::new(),
        }
    }

    /// The combatant currently on the field, if any
    pub fn active_combatant(&self) -> Option<&Combatant> {
        self.team.iter().find(|c| c.active)
    }

    /// Bench combatants eligible as switch targets, in roster order
    pub fn bench(&self) -> impl Iterator<Item = &Combatant> {
        self.team.iter().filter(|c| c.can_switch_to())
    }

    /// Count non-fainted combatants
    pub fn alive_count(&self) -> usize {
        self.team.iter().filter(|c| c.is_alive()).count()
    }

    /// Find a combatant by species, case-insensitively
    pub fn find_species(&self, species: &str) -> Option<&Combatant> {
        self.team
            .iter()
            .find(|c| c.species.eq_ignore_ascii_case(species))
    }

    /// Layer count for a side condition (0 when absent)
    pub fn condition_layers(&self, cond: SideCondition) -> u8 {
        self.conditions.get(&cond).map_or(0, |s| s.layers)
    }
}

/// Complete battle state at one decision point
///
/// Snapshots are plain data: cloning one yields an independent copy, and the
/// decision layer treats every field as read-only. Advancing the battle goes
/// through [`Engine::apply_turn`](crate::Engine::apply_turn).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Whether the battle has ended
    pub ended: bool,

    /// Current turn number (0 before the first turn)
    pub turn: u32,

    /// Winner's display name, if the battle has ended with one
    pub winner: Option<String>,

    /// What the engine is waiting for
    pub request: RequestState,

    /// Both sides, indexed by [`Player::index`]
    pub sides: [SideView; 2],
}

impl Snapshot {
    /// Create a snapshot at the start of team preview
    pub fn new(p1: SideView, p2: SideView) -> Self {
        Self {
            ended: false,
            turn: 0,
            winner: None,
            request: RequestState::TeamPreview,
            sides: [p1, p2],
        }
    }

    /// View of one side
    pub fn side(&self, player: Player) -> &SideView {
        &self.sides[player.index()]
    }
}
