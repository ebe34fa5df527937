//! The exploration state machine: one map, one party, one RNG.

use bluemon_core::{
    EncounterGenerator, EncounterRng, Map, MoveOutcome, Party, PetError, TablesOracle,
};
use bluemon_content::{MapLoader, StarterTables};

use crate::input::InputKey;
use crate::rng::RandSource;
use crate::scene::SceneSink;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Pet(#[from] PetError),

    #[error("failed to load content: {0}")]
    Content(#[from] anyhow::Error),
}

/// Drives exploration: movement, NPC dialogue, and wild encounters.
///
/// The session holds no presentation state. Every decision that needs
/// a screen goes through the [`SceneSink`] passed to
/// [`key_pressed`](Self::key_pressed).
pub struct ExplorationSession {
    map: Map,
    generator: EncounterGenerator,
    tables: Box<dyn TablesOracle>,
    rng: Box<dyn EncounterRng>,
}

impl ExplorationSession {
    pub fn new(
        map: Map,
        generator: EncounterGenerator,
        tables: Box<dyn TablesOracle>,
        rng: Box<dyn EncounterRng>,
    ) -> Self {
        Self {
            map,
            generator,
            tables,
            rng,
        }
    }

    /// Builds a session on the bundled starting map with the shipped
    /// tables and a thread-local RNG.
    pub fn bootstrap(party: Party) -> Result<Self, SessionError> {
        let map = MapLoader::meadow(party)?;
        let tables = StarterTables::load()?;
        Ok(Self::new(
            map,
            EncounterGenerator::default(),
            Box::new(tables),
            Box::new(RandSource::thread()),
        ))
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut Map {
        &mut self.map
    }

    /// Feeds one key press through the session.
    ///
    /// Directional keys resolve against the map; a move onto grass
    /// runs the encounter check and, when it fires, hands the roster
    /// to the sink. Blocked and out-of-bounds moves are silent.
    pub fn key_pressed(
        &mut self,
        key: InputKey,
        sink: &mut dyn SceneSink,
    ) -> Result<(), SessionError> {
        if let Some((dx, dy)) = key.delta() {
            return self.step(dx, dy, sink);
        }

        match key {
            InputKey::Inventory => {
                tracing::debug!("inventory toggled");
                sink.toggle_inventory();
            }
            InputKey::Menu => {
                tracing::debug!("menu opened");
                sink.switch_to_menu("Main Menu");
            }
            _ => {}
        }
        Ok(())
    }

    fn step(&mut self, dx: i32, dy: i32, sink: &mut dyn SceneSink) -> Result<(), SessionError> {
        match self.map.try_move_by(dx, dy) {
            MoveOutcome::OutOfBounds => {
                tracing::trace!(dx, dy, "move off the grid ignored");
            }
            MoveOutcome::Blocked { at, tile } => {
                tracing::trace!(%at, ?tile, "move blocked");
            }
            MoveOutcome::Npc { index } => {
                let npc = &self.map.npcs()[index];
                tracing::debug!(name = npc.name(), "bumped into NPC");
                sink.run_dialogue(npc.name(), npc.dialogue());
            }
            MoveOutcome::Moved { to, grass } => {
                tracing::trace!(%to, grass, "player moved");
                if grass {
                    let party = self.map.player().party();
                    if let Some(roster) =
                        self.generator
                            .check(party, self.tables.as_ref(), self.rng.as_mut())?
                    {
                        tracing::info!(enemies = roster.len(), "wild encounter");
                        sink.switch_to_combat(roster);
                    }
                }
            }
        }
        Ok(())
    }
}
