//! Oracle traits describing read-only game data.
//!
//! The data provider (starter tables, the ability registry, species
//! name pools) lives outside this crate; these traits are the seam the
//! rules reach through, so tests and tools can substitute their own
//! implementations.

use crate::effect::{AbilityId, Effect};
use crate::pet::Species;
use crate::stats::{BaseStats, StatIncrements};

/// Lookup of registered effects by id.
///
/// Consumed by [`crate::pet::Pet::use_ability`]; implemented by the
/// content crate's ability registry.
pub trait AbilityOracle: Send + Sync {
    /// Returns the effect for an id, or None when unregistered.
    fn effect(&self, id: AbilityId) -> Option<&Effect>;
}

/// Static tables for spawning pets: starter stats, level-up
/// increments, and species name pools.
pub trait TablesOracle: Send + Sync {
    fn starter_stats(&self) -> BaseStats;

    fn starter_increments(&self) -> StatIncrements;

    /// The nickname pool for a species. May be empty; callers fall
    /// back to the species name.
    fn names(&self, species: Species) -> &[String];
}
