//! Side conditions (hazards, screens)

/// Persistent per-side effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SideCondition {
    // Entry hazards
    Spikes, // stackable 1-3
    ToxicSpikes, // stackable 1-2
    StealthRock,
    StickyWeb,

    // Screens
    Reflect,
    LightScreen,
    AuroraVeil,

    Tailwind,
    Safeguard,
}

impl SideCondition {
    /// Parse from an engine id
    pub fn from_id(s: &str) -> Option<Self> {
        let clean = s.strip_prefix("move: ").unwrap_or(s);
        let normalized = clean.to_lowercase().replace([' ', '-'], "");

        match normalized.as_str() {
            "spikes" => Some(SideCondition::Spikes),
            "toxicspikes" => Some(SideCondition::ToxicSpikes),
            "stealthrock" => Some(SideCondition::StealthRock),
            "stickyweb" => Some(SideCondition::StickyWeb),
            "reflect" => Some(SideCondition::Reflect),
            "lightscreen" => Some(SideCondition::LightScreen),
            "auroraveil" => Some(SideCondition::AuroraVeil),
            "tailwind" => Some(SideCondition::Tailwind),
            "safeguard" => Some(SideCondition::Safeguard),
            _ => None,
        }
    }

    /// Whether this condition stacks in layers
    pub fn is_stackable(&self) -> bool {
        matches!(self, SideCondition::Spikes | SideCondition::ToxicSpikes)
    }

    /// Maximum layers for this condition
    pub fn max_layers(&self) -> u8 {
        match self {
            SideCondition::Spikes => 3,
            SideCondition::ToxicSpikes => 2,
            _ => 1,
        }
    }

    /// Whether this is an entry hazard
    pub fn is_hazard(&self) -> bool {
        matches!(
            self,
            SideCondition::Spikes
                | SideCondition::ToxicSpikes
                | SideCondition::StealthRock
                | SideCondition::StickyWeb
        )
    }

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            SideCondition::Spikes => "Spikes",
            SideCondition::ToxicSpikes => "Toxic Spikes",
            SideCondition::StealthRock => "Stealth Rock",
            SideCondition::StickyWeb => "Sticky Web",
            SideCondition::Reflect => "Reflect",
            SideCondition::LightScreen => "Light Screen",
            SideCondition::AuroraVeil => "Aurora Veil",
            SideCondition::Tailwind => "Tailwind",
            SideCondition::Safeguard => "Safeguard",
        }
    }
}

impl std::fmt::Display for SideCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// State for one active side condition (layer count for stackable ones)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionState {
    pub layers: u8,
}

impl ConditionState {
    /// New condition state with one layer
    pub fn new() -> Self {
        Self { layers: 1 }
    }

    /// Add a layer, returns false when already at max
    pub fn add_layer(&mut self, condition: SideCondition) -> bool {
        if self.layers < condition.max_layers() {
            self.layers += 1;
            true
        } else {
            false
        }
    }
}
