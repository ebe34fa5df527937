//! Pets: identity, stat stacks, leveling, ability slots, and status
//! effects.
//!
//! A [`Pet`] owns one [`Alterable`] stack per stat and orchestrates
//! their recalculation on level-up. Level and XP are monotonic: they
//! never decrease, and a maxed-level pet rejects further progression.
//! All guards run before any mutation, so a failed operation never
//! leaves a pet with partially applied stats.

mod party;

pub use party::Party;

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::effect::{AbilityId, EffectError, StatusEffect, StatusOutcome};
use crate::env::AbilityOracle;
use crate::error::{ErrorKind, GameError};
use crate::stats::{
    Alterable, AlterationId, AlterationKind, BaseStats, PetStat, StatIncrements, StatTable,
};

/// Pet species. Encounter generation draws uniformly over [`Species::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Species {
    Dog,
    Cat,
    Snake,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Dog, Species::Cat, Species::Snake];
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PetError {
    #[error("pet is already at max level")]
    AlreadyMaxLevel,

    #[error("xp amount {0} is negative; a pet can't lose experience")]
    NegativeXp(i32),

    #[error("level count {0} is negative; a pet can't lose a level")]
    NegativeLevels(i32),

    #[error("ability {0} is already known")]
    AbilityAlreadyKnown(AbilityId),

    #[error("slot {slot} is beyond the pet's tier {tier}")]
    SlotBeyondTier { slot: usize, tier: u8 },

    #[error("slot {0} is out of range (0..{max})", max = GameConfig::MAX_ABILITY_SLOTS)]
    SlotOutOfRange(usize),

    #[error("no ability learned in slot {0}")]
    EmptySlot(usize),

    #[error("ability {0} is not registered")]
    UnknownAbility(AbilityId),

    #[error(transparent)]
    Effect(#[from] EffectError),
}

impl GameError for PetError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NegativeXp(_) | Self::NegativeLevels(_) | Self::SlotOutOfRange(_) => {
                ErrorKind::InvalidArgument
            }
            Self::AlreadyMaxLevel
            | Self::AbilityAlreadyKnown(_)
            | Self::SlotBeyondTier { .. }
            | Self::EmptySlot(_)
            | Self::UnknownAbility(_) => ErrorKind::InvalidState,
            Self::Effect(e) => e.kind(),
        }
    }
}

/// A creature with stats, progression, abilities, and status effects.
pub struct Pet {
    name: String,
    species: Species,
    level: u32,
    xp: u32,
    xp_for_level_up: u32,
    stats: StatTable<Alterable<f32>>,
    increments: StatIncrements,
    abilities: [Option<AbilityId>; GameConfig::MAX_ABILITY_SLOTS],
    status_effects: ArrayVec<Box<dyn StatusEffect>, { GameConfig::MAX_STATUS_EFFECTS }>,
}

impl Pet {
    /// Creates a level-1 pet with the given base stats and level-up
    /// increments. Ability slots start empty.
    pub fn new(
        name: impl Into<String>,
        species: Species,
        base_stats: BaseStats,
        increments: StatIncrements,
    ) -> Self {
        Self {
            name: name.into(),
            species,
            level: 1,
            xp: 0,
            xp_for_level_up: GameConfig::BASE_XP_THRESHOLD,
            stats: StatTable::from_fn(|stat| Alterable::new(base_stats.get(stat))),
            increments,
            abilities: [None; GameConfig::MAX_ABILITY_SLOTS],
            status_effects: ArrayVec::new(),
        }
    }

    // ===== identity =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> Species {
        self.species
    }

    // ===== stats =====

    /// Derived value of a stat, alterations applied.
    pub fn stat(&self, stat: PetStat) -> f32 {
        self.stats[stat].value()
    }

    /// Base value of every stat, before alterations.
    pub fn base_stats(&self) -> BaseStats {
        BaseStats {
            health: self.stats[PetStat::Health].base(),
            power: self.stats[PetStat::Power].base(),
            armor: self.stats[PetStat::Armor].base(),
        }
    }

    /// Appends an alteration to a stat's stack and returns its handle.
    pub fn alter_stat(
        &mut self,
        stat: PetStat,
        kind: AlterationKind,
        f: impl Fn(f32) -> f32 + Send + Sync + 'static,
    ) -> AlterationId {
        self.stats[stat].alterate(kind, f)
    }

    /// Removes an alteration by handle. Unknown handles are a silent
    /// no-op, signalled by the `false` return.
    pub fn remove_stat_alteration(&mut self, stat: PetStat, id: AlterationId) -> bool {
        self.stats[stat].remove(id)
    }

    /// Derived-minus-base for a stat, or the relative bonus when
    /// `as_percent` is set.
    pub fn bonus_stat(&self, stat: PetStat, as_percent: bool) -> f32 {
        if as_percent {
            self.stats[stat].bonus_percent()
        } else {
            self.stats[stat].bonus()
        }
    }

    /// Clears every stat's alteration stack.
    pub fn reset_stats(&mut self) {
        self.reset_stats_of(&PetStat::ALL);
    }

    /// Clears the alteration stacks of the given stats only.
    pub fn reset_stats_of(&mut self, stats: &[PetStat]) {
        for &stat in stats {
            self.stats[stat].reset();
        }
    }

    /// A pet is alive while its derived Health is above zero.
    pub fn is_alive(&self) -> bool {
        self.stat(PetStat::Health) > 0.0
    }

    // ===== progression =====

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    /// XP still required for the next level-up.
    pub fn xp_for_level_up(&self) -> u32 {
        self.xp_for_level_up
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= GameConfig::MAX_LEVEL
    }

    /// Progression bracket (0..=3) derived from level thresholds at
    /// 10%, 25%, and 50% of max level. Gates ability slots and picks
    /// the level-up increment.
    pub fn tier(&self) -> u8 {
        if self.level < GameConfig::TIER1_LEVEL {
            0
        } else if self.level < GameConfig::TIER2_LEVEL {
            1
        } else if self.level < GameConfig::TIER3_LEVEL {
            2
        } else {
            3
        }
    }

    /// Grants experience, cascading level-ups while the accumulated XP
    /// crosses thresholds.
    ///
    /// A maxed-level pet rejects the grant outright; a negative amount
    /// is a contract violation. Both are checked before any mutation.
    /// Each level-up consumes the current threshold and raises it by
    /// `new_level * 10`; the cascade stops as soon as max level is
    /// reached, leaving any surplus XP banked.
    pub fn gain_xp(&mut self, amount: i32) -> Result<(), PetError> {
        if self.is_max_level() {
            return Err(PetError::AlreadyMaxLevel);
        }
        if amount < 0 {
            return Err(PetError::NegativeXp(amount));
        }

        self.xp += amount as u32;
        while self.xp >= self.xp_for_level_up && !self.is_max_level() {
            self.xp -= self.xp_for_level_up;
            self.level_up()?;
            self.xp_for_level_up += self.level * 10;
        }
        Ok(())
    }

    /// Performs a single level-up.
    ///
    /// For every stat, adds the increment keyed by the pre-increment
    /// tier, then bumps the level and clears all alteration stacks
    /// (leveling removes temporary buffs).
    pub fn level_up(&mut self) -> Result<(), PetError> {
        if self.is_max_level() {
            return Err(PetError::AlreadyMaxLevel);
        }

        let tier = self.tier();
        for stat in PetStat::ALL {
            let increment = self.increments.get(stat).for_tier(tier) as f32;
            let stack = &mut self.stats[stat];
            stack.set_base(stack.base() + increment);
        }
        self.level += 1;
        self.reset_stats();
        Ok(())
    }

    /// Levels up `times` times.
    ///
    /// A negative count is a contract violation. Hitting max level
    /// mid-loop fails that call with [`PetError::AlreadyMaxLevel`];
    /// levels already applied stand.
    pub fn level_up_times(&mut self, times: i32) -> Result<(), PetError> {
        if times < 0 {
            return Err(PetError::NegativeLevels(times));
        }
        for _ in 0..times {
            self.level_up()?;
        }
        Ok(())
    }

    // ===== abilities =====

    /// The ability learned in a slot, if any.
    pub fn ability_at(&self, slot: usize) -> Option<AbilityId> {
        self.abilities.get(slot).copied().flatten()
    }

    /// Learns an ability into a slot.
    ///
    /// Fails if the pet already knows the ability, or if the slot is
    /// beyond the pet's tier (slot 0 is always learnable from tier 0).
    pub fn learn_ability(&mut self, id: AbilityId, slot: usize) -> Result<(), PetError> {
        if slot >= GameConfig::MAX_ABILITY_SLOTS {
            return Err(PetError::SlotOutOfRange(slot));
        }
        if self.abilities.iter().flatten().any(|&known| known == id) {
            return Err(PetError::AbilityAlreadyKnown(id));
        }
        if slot as u8 > self.tier() {
            return Err(PetError::SlotBeyondTier {
                slot,
                tier: self.tier(),
            });
        }
        self.abilities[slot] = Some(id);
        Ok(())
    }

    /// Uses the ability in `slot` on a single target, resolving the
    /// effect through the oracle. Target-capability validation is the
    /// effect's.
    pub fn use_ability(
        &self,
        slot: usize,
        abilities: &dyn AbilityOracle,
        target: &mut Pet,
    ) -> Result<(), PetError> {
        let effect = self.resolve_ability(slot, abilities)?;
        effect.use_on(target);
        Ok(())
    }

    /// Uses the ability in `slot` on several targets in sequence.
    pub fn use_ability_on_many(
        &self,
        slot: usize,
        abilities: &dyn AbilityOracle,
        targets: &mut [&mut Pet],
    ) -> Result<(), PetError> {
        let effect = self.resolve_ability(slot, abilities)?;
        effect.use_on_many(targets)?;
        Ok(())
    }

    fn resolve_ability<'a>(
        &self,
        slot: usize,
        abilities: &'a dyn AbilityOracle,
    ) -> Result<&'a crate::effect::Effect, PetError> {
        if slot >= GameConfig::MAX_ABILITY_SLOTS {
            return Err(PetError::SlotOutOfRange(slot));
        }
        let id = self.ability_at(slot).ok_or(PetError::EmptySlot(slot))?;
        abilities.effect(id).ok_or(PetError::UnknownAbility(id))
    }

    // ===== status effects =====

    /// Attaches a status effect. Returns false (dropping the effect)
    /// when the bounded list is full.
    pub fn add_status_effect(&mut self, effect: Box<dyn StatusEffect>) -> bool {
        self.status_effects.try_push(effect).is_ok()
    }

    /// Detaches the effect at `index`.
    pub fn remove_status_effect(&mut self, index: usize) -> Option<Box<dyn StatusEffect>> {
        if index < self.status_effects.len() {
            Some(self.status_effects.remove(index))
        } else {
            None
        }
    }

    pub fn clear_status_effects(&mut self) {
        self.status_effects.clear();
    }

    pub fn status_effects(&self) -> &[Box<dyn StatusEffect>] {
        &self.status_effects
    }

    /// Runs every attached effect's per-turn hook, in attachment order.
    ///
    /// Called once at the start of the pet's turn by the combat system.
    /// Updates run against a snapshot taken at turn start: effects that
    /// report expiry are dropped, and effects attached during the
    /// update land after the survivors.
    pub fn update_status_effects(&mut self) {
        let snapshot = core::mem::take(&mut self.status_effects);
        let mut kept: ArrayVec<Box<dyn StatusEffect>, { GameConfig::MAX_STATUS_EFFECTS }> =
            ArrayVec::new();

        for mut effect in snapshot {
            if effect.on_turn_start(self) == StatusOutcome::Active {
                let _ = kept.try_push(effect);
            }
        }

        let added = core::mem::take(&mut self.status_effects);
        for effect in added {
            let _ = kept.try_push(effect);
        }
        self.status_effects = kept;
    }
}

impl core::fmt::Debug for Pet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pet")
            .field("name", &self.name)
            .field("species", &self.species)
            .field("level", &self.level)
            .field("xp", &self.xp)
            .field("stats", &self.stats)
            .field("status_effects", &self.status_effects.len())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::stats::TierIncrements;

    /// Level-1 pet with the canonical starter spread.
    pub fn starter_pet(name: &str) -> Pet {
        Pet::new(
            name,
            Species::Cat,
            BaseStats::new(20.0, 5.0, 2.0),
            StatIncrements {
                health: TierIncrements::new(3, 4, 5, 6),
                power: TierIncrements::new(2, 2, 3, 4),
                armor: TierIncrements::new(1, 1, 2, 3),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::starter_pet;
    use super::*;

    #[test]
    fn new_pet_starts_at_level_one() {
        let pet = starter_pet("Kitty");
        assert_eq!(pet.level(), 1);
        assert_eq!(pet.xp(), 0);
        assert_eq!(pet.xp_for_level_up(), GameConfig::BASE_XP_THRESHOLD);
        assert_eq!(pet.tier(), 0);
        assert!(pet.is_alive());
    }

    #[test]
    fn negative_xp_is_rejected_before_mutation() {
        let mut pet = starter_pet("Kitty");
        assert_eq!(pet.gain_xp(-5), Err(PetError::NegativeXp(-5)));
        assert_eq!(pet.xp(), 0);
        assert_eq!(pet.level(), 1);
    }

    #[test]
    fn tier_follows_level_thresholds() {
        let mut pet = starter_pet("Kitty");
        pet.level_up_times(8).unwrap(); // level 9
        assert_eq!(pet.tier(), 0);
        pet.level_up().unwrap(); // level 10
        assert_eq!(pet.tier(), 1);
        pet.level_up_times(15).unwrap(); // level 25
        assert_eq!(pet.tier(), 2);
        pet.level_up_times(25).unwrap(); // level 50
        assert_eq!(pet.tier(), 3);
    }

    #[test]
    fn error_messages_render_and_effect_errors_convert() {
        assert_eq!(
            PetError::SlotOutOfRange(7).to_string(),
            "slot 7 is out of range (0..4)"
        );
        let err: PetError = EffectError::SelfTargetedConsumable.into();
        assert!(matches!(err, PetError::Effect(_)));
    }

    #[test]
    fn full_status_list_drops_new_effects() {
        use crate::effect::common::Poison;

        let mut pet = starter_pet("Kitty");
        for _ in 0..GameConfig::MAX_STATUS_EFFECTS {
            assert!(pet.add_status_effect(Box::new(Poison::new(1.0, 5))));
        }
        assert!(!pet.add_status_effect(Box::new(Poison::new(1.0, 5))));
        assert_eq!(pet.status_effects().len(), GameConfig::MAX_STATUS_EFFECTS);
    }
}
