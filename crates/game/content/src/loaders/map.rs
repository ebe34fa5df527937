//! Map data loader.
//!
//! A map file is RON holding text rows (one character per tile), the
//! player spawn cell, and NPC placements. Tile legend lives in
//! [`bluemon_core::TileKind::from_char`].

use std::path::Path;

use bluemon_core::{Map, Npc, Party, Player, Position};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Deserialize)]
struct NpcRon {
    name: String,
    position: Position,
    dialogue: String,
}

#[derive(Debug, Deserialize)]
struct MapDataRon {
    rows: Vec<String>,
    spawn: Position,
    npcs: Vec<NpcRon>,
}

/// Loader for map data from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Loads a map from a RON file, spawning the given party at the
    /// file's spawn cell.
    pub fn load(path: &Path, party: Party) -> LoadResult<Map> {
        Self::parse(&read_file(path)?, party)
    }

    /// Parses map RON text. Grid validation (rectangularity, actor
    /// bounds) happens in [`Map::new`].
    pub fn parse(text: &str, party: Party) -> LoadResult<Map> {
        let data: MapDataRon =
            ron::from_str(text).map_err(|e| anyhow::anyhow!("failed to parse map RON: {}", e))?;

        let npcs = data
            .npcs
            .into_iter()
            .map(|npc| Npc::new(npc.name, npc.position, npc.dialogue))
            .collect();

        Ok(Map::new(
            &data.rows,
            Player::new(data.spawn, party),
            npcs,
        )?)
    }

    /// Loads the bundled starting map.
    pub fn meadow(party: Party) -> LoadResult<Map> {
        Self::parse(include_str!("../../data/maps/meadow.ron"), party)
    }
}
