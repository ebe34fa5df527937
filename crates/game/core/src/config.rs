/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Probability in [0, 1] that stepping onto a grass tile triggers
    /// a wild encounter.
    pub encounter_chance: f32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Highest level a pet can reach. Level and XP mutation is rejected
    /// once a pet gets here.
    pub const MAX_LEVEL: u32 = 100;
    /// Number of ability slots per pet. Slot availability is gated by tier.
    pub const MAX_ABILITY_SLOTS: usize = 4;
    /// Number of party slots per player. Empty slots are legal.
    pub const MAX_PARTY_SLOTS: usize = 4;
    /// Bounded capacity of a pet's active status-effect list.
    pub const MAX_STATUS_EFFECTS: usize = 8;

    // ===== progression thresholds =====
    /// XP required for the very first level-up.
    pub const BASE_XP_THRESHOLD: u32 = 10;
    /// Level at which tier 1 starts (10% of max level).
    pub const TIER1_LEVEL: u32 = Self::MAX_LEVEL / 10;
    /// Level at which tier 2 starts (25% of max level).
    pub const TIER2_LEVEL: u32 = Self::MAX_LEVEL / 4;
    /// Level at which tier 3 starts (50% of max level).
    pub const TIER3_LEVEL: u32 = Self::MAX_LEVEL / 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ENCOUNTER_CHANCE: f32 = 0.05;

    pub fn new() -> Self {
        Self {
            encounter_chance: Self::DEFAULT_ENCOUNTER_CHANCE,
        }
    }

    pub fn with_encounter_chance(encounter_chance: f32) -> Self {
        Self { encounter_chance }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
