//! Pet statistics: stat identifiers, base values, level-up increments,
//! and the alteration stack applied on top of them.
//!
//! Per-stat storage uses fixed-size arrays indexed by stat ordinal
//! ([`StatTable`]) rather than maps, so lookups are O(1) and the set of
//! stats is closed at compile time.
mod alterable;

pub use alterable::{Alterable, AlterationId, AlterationKind};

use core::ops::{Index, IndexMut};

/// The three pet statistics.
///
/// Ordinals are stable and index [`StatTable`] directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PetStat {
    /// A pet whose derived Health drops to zero (or below) is not alive.
    Health = 0,
    Power = 1,
    Armor = 2,
}

impl PetStat {
    pub const COUNT: usize = 3;

    /// All stats in ordinal order.
    pub const ALL: [PetStat; Self::COUNT] = [PetStat::Health, PetStat::Power, PetStat::Armor];
}

/// Fixed-size per-stat storage indexed by [`PetStat`] ordinal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatTable<T>([T; PetStat::COUNT]);

impl<T> StatTable<T> {
    /// Builds a table by evaluating `f` for each stat in ordinal order.
    pub fn from_fn(f: impl FnMut(PetStat) -> T) -> Self {
        Self(PetStat::ALL.map(f))
    }

    pub fn get(&self, stat: PetStat) -> &T {
        &self.0[stat as usize]
    }

    pub fn get_mut(&mut self, stat: PetStat) -> &mut T {
        &mut self.0[stat as usize]
    }

    /// Iterates entries in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (PetStat, &T)> {
        PetStat::ALL.iter().map(move |&s| (s, &self.0[s as usize]))
    }
}

impl<T> Index<PetStat> for StatTable<T> {
    type Output = T;

    fn index(&self, stat: PetStat) -> &T {
        self.get(stat)
    }
}

impl<T> IndexMut<PetStat> for StatTable<T> {
    fn index_mut(&mut self, stat: PetStat) -> &mut T {
        self.get_mut(stat)
    }
}

/// Base values for every stat, before any alteration.
///
/// This is the shape starter tables and encounter templates are
/// expressed in; a [`crate::pet::Pet`] expands it into per-stat
/// [`Alterable`] stacks at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub health: f32,
    pub power: f32,
    pub armor: f32,
}

impl BaseStats {
    pub fn new(health: f32, power: f32, armor: f32) -> Self {
        Self {
            health,
            power,
            armor,
        }
    }

    pub fn get(&self, stat: PetStat) -> f32 {
        match stat {
            PetStat::Health => self.health,
            PetStat::Power => self.power,
            PetStat::Armor => self.armor,
        }
    }
}

/// Per-tier level-up increment for one stat.
///
/// The increment applied by a level-up is keyed by the pet's
/// pre-increment tier: `t0` while below tier 1, and so on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierIncrements {
    pub t0: i32,
    pub t1: i32,
    pub t2: i32,
    pub t3: i32,
}

impl TierIncrements {
    pub fn new(t0: i32, t1: i32, t2: i32, t3: i32) -> Self {
        Self { t0, t1, t2, t3 }
    }

    /// The increment for a given tier (0..=3). Tiers above 3 clamp to `t3`.
    pub fn for_tier(&self, tier: u8) -> i32 {
        match tier {
            0 => self.t0,
            1 => self.t1,
            2 => self.t2,
            _ => self.t3,
        }
    }
}

/// Level-up increments for every stat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatIncrements {
    pub health: TierIncrements,
    pub power: TierIncrements,
    pub armor: TierIncrements,
}

impl StatIncrements {
    pub fn get(&self, stat: PetStat) -> TierIncrements {
        match stat {
            PetStat::Health => self.health,
            PetStat::Power => self.power,
            PetStat::Armor => self.armor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_table_indexes_by_ordinal() {
        let table = StatTable::from_fn(|s| s as usize * 10);
        assert_eq!(table[PetStat::Health], 0);
        assert_eq!(table[PetStat::Power], 10);
        assert_eq!(table[PetStat::Armor], 20);
        assert_eq!(table.iter().count(), PetStat::COUNT);
    }

    #[test]
    fn tier_increments_clamp_above_three() {
        let inc = TierIncrements::new(1, 2, 3, 4);
        assert_eq!(inc.for_tier(0), 1);
        assert_eq!(inc.for_tier(3), 4);
        assert_eq!(inc.for_tier(9), 4);
    }
}
