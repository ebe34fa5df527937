//! Starter tables: base stats, level-up increments, and species name
//! pools, loaded from embedded RON data.

use std::collections::HashMap;

use bluemon_core::{BaseStats, Species, StatIncrements, TablesOracle};
use serde::Deserialize;

use crate::loaders::LoadResult;

#[derive(Debug, Deserialize)]
struct StartersRon {
    stats: BaseStats,
    increments: StatIncrements,
}

/// Tables every freshly spawned pet draws from.
///
/// Implements [`TablesOracle`] for the encounter generator and any
/// other rules-side consumer.
#[derive(Debug, Clone)]
pub struct StarterTables {
    stats: BaseStats,
    increments: StatIncrements,
    names: HashMap<Species, Vec<String>>,
}

impl StarterTables {
    /// Loads the tables from the embedded RON data files.
    pub fn load() -> LoadResult<Self> {
        let starters: StartersRon = ron::from_str(include_str!("../../data/starters.ron"))
            .map_err(|e| anyhow::anyhow!("failed to parse starters.ron: {}", e))?;
        let names: HashMap<Species, Vec<String>> =
            ron::from_str(include_str!("../../data/names.ron"))
                .map_err(|e| anyhow::anyhow!("failed to parse names.ron: {}", e))?;

        Ok(Self {
            stats: starters.stats,
            increments: starters.increments,
            names,
        })
    }
}

impl TablesOracle for StarterTables {
    fn starter_stats(&self) -> BaseStats {
        self.stats
    }

    fn starter_increments(&self) -> StatIncrements {
        self.increments
    }

    fn names(&self, species: Species) -> &[String] {
        self.names.get(&species).map(Vec::as_slice).unwrap_or(&[])
    }
}
