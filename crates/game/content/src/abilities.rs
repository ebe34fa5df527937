//! The built-in ability and consumable catalog.
//!
//! Effects carry callables, so the catalog lives in code rather than
//! data files. Lookup goes through [`AbilityOracle`], which is how the
//! rules crate resolves a learned [`AbilityId`] at use time.

use std::collections::HashMap;

use bluemon_core::{
    AbilityId, AbilityOracle, AlterationKind, Effect, EffectBody, EffectError, EffectKind, PetStat,
    TargetFlags,
};

/// Well-known ids for the standard catalog.
pub mod catalog {
    use bluemon_core::AbilityId;

    pub const TACKLE: AbilityId = AbilityId(1);
    pub const BITE: AbilityId = AbilityId(2);
    pub const MEND: AbilityId = AbilityId(3);
    pub const RALLY: AbilityId = AbilityId(4);
    pub const VENOM: AbilityId = AbilityId(5);

    pub const BERRY: AbilityId = AbilityId(10);
    pub const TEAM_SNACK: AbilityId = AbilityId(11);
}

/// Registry of effects keyed by [`AbilityId`].
pub struct AbilityBook {
    effects: HashMap<AbilityId, Effect>,
}

impl AbilityBook {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            effects: HashMap::new(),
        }
    }

    /// Builds the standard catalog: the learnable abilities plus the
    /// inventory consumables.
    pub fn standard() -> Result<Self, EffectError> {
        let mut book = Self::new();

        book.register(
            catalog::TACKLE,
            Effect::ability(
                "Tackle",
                EffectKind::Damage,
                TargetFlags::ENEMY | TargetFlags::SINGLE,
                EffectBody::single(|pet| {
                    pet.alter_stat(PetStat::Health, AlterationKind::Additive, |v| v - 4.0);
                }),
            ),
        );

        book.register(
            catalog::BITE,
            Effect::ability(
                "Bite",
                EffectKind::Damage,
                TargetFlags::ENEMY | TargetFlags::SINGLE,
                EffectBody::single(|pet| {
                    pet.alter_stat(PetStat::Health, AlterationKind::Additive, |v| v - 7.0);
                }),
            ),
        );

        book.register(
            catalog::MEND,
            Effect::ability(
                "Mend",
                EffectKind::Heal,
                TargetFlags::SELF | TargetFlags::TEAM | TargetFlags::SINGLE,
                EffectBody::single(|pet| {
                    pet.alter_stat(PetStat::Health, AlterationKind::Additive, |v| v + 6.0);
                }),
            ),
        );

        book.register(
            catalog::RALLY,
            Effect::ability(
                "Rally",
                EffectKind::Buff,
                TargetFlags::TEAM | TargetFlags::MULTIPLE,
                EffectBody::multi(|team| {
                    for pet in team.iter_mut() {
                        pet.alter_stat(PetStat::Power, AlterationKind::Additive, |v| v + 2.0);
                    }
                }),
            ),
        );

        book.register(
            catalog::VENOM,
            Effect::ability(
                "Venom",
                EffectKind::Debuff,
                TargetFlags::ENEMY | TargetFlags::SINGLE,
                EffectBody::single(|pet| {
                    use bluemon_core::effect::common::Poison;
                    pet.add_status_effect(Box::new(Poison::new(2.0, 3)));
                }),
            ),
        );

        book.register(
            catalog::BERRY,
            Effect::consumable(
                "Berry",
                EffectKind::Heal,
                TargetFlags::TEAM | TargetFlags::SINGLE,
                EffectBody::single(|pet| {
                    pet.alter_stat(PetStat::Health, AlterationKind::Additive, |v| v + 10.0);
                }),
            )?,
        );

        book.register(
            catalog::TEAM_SNACK,
            Effect::consumable(
                "Team Snack",
                EffectKind::Heal,
                TargetFlags::TEAM | TargetFlags::MULTIPLE,
                EffectBody::multi(|team| {
                    for pet in team.iter_mut() {
                        pet.alter_stat(PetStat::Health, AlterationKind::Additive, |v| v + 4.0);
                    }
                }),
            )?,
        );

        Ok(book)
    }

    /// Registers an effect, replacing any previous binding of the id.
    pub fn register(&mut self, id: AbilityId, effect: Effect) -> Option<Effect> {
        self.effects.insert(id, effect)
    }

    pub fn get(&self, id: AbilityId) -> Option<&Effect> {
        self.effects.get(&id)
    }

    /// All registered ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = AbilityId> + '_ {
        self.effects.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

impl Default for AbilityBook {
    fn default() -> Self {
        Self::new()
    }
}

impl AbilityOracle for AbilityBook {
    fn effect(&self, id: AbilityId) -> Option<&Effect> {
        self.get(id)
    }
}
