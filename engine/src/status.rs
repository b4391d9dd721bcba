//! Status conditions (volatile and non-volatile)

/// Non-volatile status conditions (persist through switching)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Burn,
    Freeze,
    Paralysis,
    Poison,
    BadPoison, // tox
    Sleep,
}

impl Status {
    /// Parse from an engine id ("brn", "frz", "par", "psn", "tox", "slp")
    pub fn from_id(s: &str) -> Option<Self> {
        match s {
            "brn" => Some(Status::Burn),
            "frz" => Some(Status::Freeze),
            "par" => Some(Status::Paralysis),
            "psn" => Some(Status::Poison),
            "tox" => Some(Status::BadPoison),
            "slp" => Some(Status::Sleep),
            _ => None,
        }
    }

    /// Engine id for this status
    pub fn id(&self) -> &'static str {
        match self {
            Status::Burn => "brn",
            Status::Freeze => "frz",
            Status::Paralysis => "par",
            Status::Poison => "psn",
            Status::BadPoison => "tox",
            Status::Sleep => "slp",
        }
    }

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Burn => "Burn",
            Status::Freeze => "Freeze",
            Status::Paralysis => "Paralysis",
            Status::Poison => "Poison",
            Status::BadPoison => "Toxic",
            Status::Sleep => "Sleep",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Volatile status conditions (cleared on switching)
///
/// Only the conditions the decision layer reasons about are modeled by name;
/// anything else an engine reports is carried through as [`Volatile::Other`]
/// so the set stays faithful to the engine without this crate growing an
/// exhaustive catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Volatile {
    Trapped,
    Confusion,
    Taunt,
    Encore,
    LeechSeed,
    Yawn,
    Substitute,
    Protect,
    Flinch,
    Recharging,

    /// Unmodeled volatile, raw engine id
    Other(String),
}

impl Volatile {
    /// Parse from an engine id
    ///
    /// Ids are normalized (lowercased, separators stripped) before matching,
    /// and "move: " / "ability: " prefixes some engines attach are dropped.
    pub fn from_id(s: &str) -> Self {
        let clean = s
            .strip_prefix("move: ")
            .or_else(|| s.strip_prefix("ability: "))
            .unwrap_or(s);
        let normalized = clean.to_lowercase().replace([' ', '-', '\''], "");

        match normalized.as_str() {
            "trapped" => Volatile::Trapped,
            "confusion" | "confused" => Volatile::Confusion,
            "taunt" => Volatile::Taunt,
            "encore" => Volatile::Encore,
            "leechseed" => Volatile::LeechSeed,
            "yawn" => Volatile::Yawn,
            "substitute" => Volatile::Substitute,
            "protect" | "detect" => Volatile::Protect,
            "flinch" => Volatile::Flinch,
            "mustrecharge" | "recharging" => Volatile::Recharging,
            _ => Volatile::Other(normalized),
        }
    }

    /// Engine id for this volatile
    pub fn id(&self) -> &str {
        match self {
            Volatile::Trapped => "trapped",
            Volatile::Confusion => "confusion",
            Volatile::Taunt => "taunt",
            Volatile::Encore => "encore",
            Volatile::LeechSeed => "leechseed",
            Volatile::Yawn => "yawn",
            Volatile::Substitute => "substitute",
            Volatile::Protect => "protect",
            Volatile::Flinch => "flinch",
            Volatile::Recharging => "recharging",
            Volatile::Other(s) => s.as_str(),
        }
    }

    /// Whether this is a modeled volatile (not `Other`)
    pub fn is_known(&self) -> bool {
        !matches!(self, Volatile::Other(_))
    }
}

impl std::fmt::Display for Volatile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
