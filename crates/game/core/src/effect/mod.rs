//! Abilities and consumables: shared, stateless effect descriptors.
//!
//! An [`Effect`] bundles a name, a classification, a target-capability
//! set, and one opaque callable (single- or multi-target form). Pets
//! reference effects by [`AbilityId`] and never own them; the lookup
//! lives behind [`crate::env::AbilityOracle`].

mod status;

pub use status::{StatusEffect, StatusOutcome, common};

use bitflags::bitflags;

use crate::error::{ErrorKind, GameError};
use crate::pet::Pet;

/// Identifier for a registered effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityId(pub u16);

impl core::fmt::Display for AbilityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

bitflags! {
    /// Target capabilities an effect declares.
    ///
    /// Validation is capability-based: a multi-target application is
    /// only legal when `MULTIPLE` is set, and a consumable may never
    /// declare `SELF`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct TargetFlags: u8 {
        const SELF     = 1 << 0;
        const SINGLE   = 1 << 1;
        const MULTIPLE = 1 << 2;
        const TEAM     = 1 << 3;
        const ENEMY    = 1 << 4;
    }
}

/// Gameplay classification of an effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    Damage,
    Heal,
    Buff,
    Debuff,
}

/// Whether an effect is a learnable ability or an inventory consumable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectClass {
    Ability,
    Consumable,
}

pub type SingleTargetFn = Box<dyn Fn(&mut Pet) + Send + Sync>;
pub type MultiTargetFn = Box<dyn Fn(&mut [&mut Pet]) + Send + Sync>;

/// The callable an effect was constructed with.
///
/// A `Single` body applied to many targets runs once per target; a
/// `Multi` body applied to one target receives a singleton slice.
pub enum EffectBody {
    Single(SingleTargetFn),
    Multi(MultiTargetFn),
}

impl EffectBody {
    /// Wraps a single-target closure.
    pub fn single(f: impl Fn(&mut Pet) + Send + Sync + 'static) -> Self {
        Self::Single(Box::new(f))
    }

    /// Wraps a multi-target closure.
    pub fn multi(f: impl Fn(&mut [&mut Pet]) + Send + Sync + 'static) -> Self {
        Self::Multi(Box::new(f))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EffectError {
    #[error("a consumable can't have 'Self' as a target")]
    SelfTargetedConsumable,

    #[error("effect '{name}' cannot be used on multiple targets")]
    MultiTargetUnsupported { name: String },
}

impl GameError for EffectError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::SelfTargetedConsumable | Self::MultiTargetUnsupported { .. } => {
                ErrorKind::InvalidState
            }
        }
    }
}

/// A shared, stateless effect descriptor.
pub struct Effect {
    name: String,
    kind: EffectKind,
    class: EffectClass,
    targets: TargetFlags,
    body: EffectBody,
}

impl Effect {
    /// Constructs a learnable ability. Any target set is legal.
    pub fn ability(
        name: impl Into<String>,
        kind: EffectKind,
        targets: TargetFlags,
        body: EffectBody,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            class: EffectClass::Ability,
            targets,
            body,
        }
    }

    /// Constructs a consumable.
    ///
    /// Fails at construction, always, when the target set contains
    /// `SELF`: a consumable cannot target its own user.
    pub fn consumable(
        name: impl Into<String>,
        kind: EffectKind,
        targets: TargetFlags,
        body: EffectBody,
    ) -> Result<Self, EffectError> {
        if targets.contains(TargetFlags::SELF) {
            return Err(EffectError::SelfTargetedConsumable);
        }
        Ok(Self {
            name: name.into(),
            kind,
            class: EffectClass::Consumable,
            targets,
            body,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    pub fn class(&self) -> EffectClass {
        self.class
    }

    pub fn targets(&self) -> TargetFlags {
        self.targets
    }

    /// Returns true if the effect declares every flag in `wanted`.
    pub fn supports(&self, wanted: TargetFlags) -> bool {
        self.targets.contains(wanted)
    }

    /// Applies the effect to a single target.
    pub fn use_on(&self, target: &mut Pet) {
        match &self.body {
            EffectBody::Single(f) => f(target),
            EffectBody::Multi(f) => {
                let mut one = [target];
                f(&mut one);
            }
        }
    }

    /// Applies the effect to each target in sequence.
    ///
    /// Fails unless the capability set includes `MULTIPLE`. Application
    /// is best-effort sequential: effects already applied to earlier
    /// targets are never rolled back.
    pub fn use_on_many(&self, targets: &mut [&mut Pet]) -> Result<(), EffectError> {
        if !self.supports(TargetFlags::MULTIPLE) {
            return Err(EffectError::MultiTargetUnsupported {
                name: self.name.clone(),
            });
        }
        match &self.body {
            EffectBody::Single(f) => {
                for target in targets.iter_mut() {
                    f(target);
                }
            }
            EffectBody::Multi(f) => f(targets),
        }
        Ok(())
    }
}

impl core::fmt::Debug for Effect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Effect")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("class", &self.class)
            .field("targets", &self.targets)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pet::test_support::starter_pet;
    use crate::stats::PetStat;

    #[test]
    fn consumable_rejects_self_target_at_construction() {
        let result = Effect::consumable(
            "Odd Berry",
            EffectKind::Heal,
            TargetFlags::SELF | TargetFlags::SINGLE,
            EffectBody::single(|_| {}),
        );
        assert_eq!(result.unwrap_err(), EffectError::SelfTargetedConsumable);
    }

    #[test]
    fn single_body_applies_per_target_in_sequence() {
        let hit = Effect::ability(
            "Tackle",
            EffectKind::Damage,
            TargetFlags::ENEMY | TargetFlags::SINGLE | TargetFlags::MULTIPLE,
            EffectBody::single(|pet| {
                pet.alter_stat(PetStat::Health, crate::stats::AlterationKind::Additive, |v| {
                    v - 4.0
                });
            }),
        );

        let mut a = starter_pet("A");
        let mut b = starter_pet("B");
        let health = a.stat(PetStat::Health);
        hit.use_on_many(&mut [&mut a, &mut b]).unwrap();
        assert_eq!(a.stat(PetStat::Health), health - 4.0);
        assert_eq!(b.stat(PetStat::Health), health - 4.0);
    }

    #[test]
    fn multi_body_receives_singleton_slice_for_single_use() {
        let rally = Effect::ability(
            "Rally",
            EffectKind::Buff,
            TargetFlags::TEAM | TargetFlags::MULTIPLE,
            EffectBody::multi(|team| {
                for pet in team.iter_mut() {
                    pet.alter_stat(
                        PetStat::Power,
                        crate::stats::AlterationKind::Multiplicative,
                        |v| v * 2.0,
                    );
                }
            }),
        );

        let mut a = starter_pet("A");
        let base = a.stat(PetStat::Power);
        rally.use_on(&mut a);
        assert_eq!(a.stat(PetStat::Power), base * 2.0);
    }

    #[test]
    fn multi_target_use_requires_the_capability() {
        let jab = Effect::ability(
            "Jab",
            EffectKind::Damage,
            TargetFlags::ENEMY | TargetFlags::SINGLE,
            EffectBody::single(|_| {}),
        );
        let mut a = starter_pet("A");
        let err = jab.use_on_many(&mut [&mut a]).unwrap_err();
        assert!(matches!(err, EffectError::MultiTargetUnsupported { .. }));
    }
}
