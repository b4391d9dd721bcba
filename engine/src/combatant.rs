//! Combatant state

use std::collections::HashSet;

use crate::stats::StatStages;
use crate::status::{Status, Volatile};

/// One creature under a side's control at a decision point
///
/// This is the read-only view the engine exposes; the decision layer never
/// mutates a combatant, it derives commands and hands them back to the engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    /// Species identifier
    pub species: String,

    /// Current HP
    pub hp: u32,

    /// Maximum HP
    pub max_hp: u32,

    /// Non-volatile status condition
    pub status: Option<Status>,

    /// Active volatile conditions
    pub volatiles: HashSet<Volatile>,

    /// Stat stage modifiers
    pub boosts: StatStages,

    /// Whether a held item is present (identity is engine-internal)
    pub item_held: bool,

    /// Whether currently active on the field
    pub active: bool,

    /// Whether this combatant has fainted
    pub fainted: bool,
}

impl Combatant {
    /// Create a healthy benched combatant
    pub fn new(species: impl Into<String>, max_hp: u32) -> Self {
        Self {
            species: species.into(),
            hp: max_hp,
            max_hp,
            status: None,
            volatiles: HashSet::new(),
            boosts: StatStages::new(),
            item_held: false,
            active: false,
            fainted: false,
        }
    }

    /// Current HP as a fraction of max (0.0 when max is 0)
    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp == 0 {
            0.0
        } else {
            f64::from(self.hp) / f64::from(self.max_hp)
        }
    }

    /// Not fainted and has HP left
    pub fn is_alive(&self) -> bool {
        !self.fainted && self.hp > 0
    }

    /// Eligible as a switch target (alive and not already out)
    pub fn can_switch_to(&self) -> bool {
        self.is_alive() && !self.active
    }

    /// Check for a volatile condition
    pub fn has_volatile(&self, v: &Volatile) -> bool {
        self.volatiles.contains(v)
    }
}
