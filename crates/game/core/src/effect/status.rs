//! Status effects: per-turn mutation hooks attached to a pet.
//!
//! Each effect is polymorphic over its kind and is updated once at the
//! start of its owner's turn, in attachment order. Expiry is the
//! effect's own responsibility: the hook reports [`StatusOutcome::Expired`]
//! and the owner drops it. Duplicates are allowed; the list imposes no
//! stacking rules of its own.

use crate::pet::Pet;

/// Result of one per-turn update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusOutcome {
    /// The effect stays attached for another turn.
    Active,
    /// The effect has run its course and is removed by the owner.
    Expired,
}

/// A per-turn mutation hook attached to exactly one pet.
///
/// `on_turn_start` is invoked by [`Pet::update_status_effects`] against
/// a snapshot of the list taken at turn start, so an effect mutating
/// the owner (including attaching new effects) never invalidates the
/// iteration.
pub trait StatusEffect: Send + Sync {
    /// Display name, for logs and the combat UI.
    fn name(&self) -> &str;

    /// Invoked once at the start of the owner's turn.
    fn on_turn_start(&mut self, owner: &mut Pet) -> StatusOutcome;
}

/// Common status-effect implementations.
pub mod common {
    use super::*;
    use crate::stats::{AlterationId, AlterationKind, PetStat};

    /// Damage over time: lowers derived Health by a fixed amount each
    /// turn for a fixed number of turns.
    ///
    /// Each tick pushes a fresh additive alteration, so the damage
    /// stacks turn over turn and clears with the rest of the stack on
    /// level-up or `reset_stats`.
    #[derive(Clone, Debug)]
    pub struct Poison {
        damage_per_turn: f32,
        turns_left: u32,
    }

    impl Poison {
        pub fn new(damage_per_turn: f32, turns: u32) -> Self {
            Self {
                damage_per_turn,
                turns_left: turns,
            }
        }
    }

    impl StatusEffect for Poison {
        fn name(&self) -> &str {
            "Poison"
        }

        fn on_turn_start(&mut self, owner: &mut Pet) -> StatusOutcome {
            if self.turns_left == 0 {
                return StatusOutcome::Expired;
            }
            let damage = self.damage_per_turn;
            owner.alter_stat(PetStat::Health, AlterationKind::Additive, move |v| v - damage);
            self.turns_left -= 1;
            if self.turns_left == 0 {
                StatusOutcome::Expired
            } else {
                StatusOutcome::Active
            }
        }
    }

    /// Timed stat buff (or debuff): applies one additive alteration on
    /// its first tick and removes it when the duration elapses.
    #[derive(Clone, Debug)]
    pub struct StatBuff {
        stat: PetStat,
        amount: f32,
        turns_left: u32,
        handle: Option<AlterationId>,
    }

    impl StatBuff {
        pub fn new(stat: PetStat, amount: f32, turns: u32) -> Self {
            Self {
                stat,
                amount,
                turns_left: turns,
                handle: None,
            }
        }
    }

    impl StatusEffect for StatBuff {
        fn name(&self) -> &str {
            "Stat Buff"
        }

        fn on_turn_start(&mut self, owner: &mut Pet) -> StatusOutcome {
            if self.turns_left == 0 {
                if let Some(id) = self.handle.take() {
                    owner.remove_stat_alteration(self.stat, id);
                }
                return StatusOutcome::Expired;
            }

            if self.handle.is_none() {
                let amount = self.amount;
                self.handle =
                    Some(owner.alter_stat(self.stat, AlterationKind::Additive, move |v| {
                        v + amount
                    }));
            }

            self.turns_left -= 1;
            if self.turns_left == 0 {
                if let Some(id) = self.handle.take() {
                    owner.remove_stat_alteration(self.stat, id);
                }
                StatusOutcome::Expired
            } else {
                StatusOutcome::Active
            }
        }
    }
}
