//! The exploration map: an immutable tile grid with one player and any
//! number of NPCs, and the movement state machine over it.
//!
//! Movement resolution: a directional input computes a target cell;
//! out-of-bounds targets are a no-op, an NPC on the target cell
//! triggers its dialogue without moving the player, a non-walkable
//! tile blocks, and a successful move onto a grass tile asks the
//! caller to run the encounter check.

mod tile;

pub use tile::TileKind;

use crate::error::{ErrorKind, GameError};
use crate::pet::Party;

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A non-player character standing on the map.
///
/// NPCs block the player's movement; walking into one triggers its
/// dialogue instead. Rendering the dialogue belongs to the
/// presentation layer.
#[derive(Clone, Debug)]
pub struct Npc {
    name: String,
    position: Position,
    dialogue: String,
}

impl Npc {
    pub fn new(name: impl Into<String>, position: Position, dialogue: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position,
            dialogue: dialogue.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn dialogue(&self) -> &str {
        &self.dialogue
    }
}

/// The player: a position on the grid and a pet party.
#[derive(Debug, Default)]
pub struct Player {
    position: Position,
    party: Party,
}

impl Player {
    pub fn new(position: Position, party: Party) -> Self {
        Self { position, party }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn party(&self) -> &Party {
        &self.party
    }

    pub fn party_mut(&mut self) -> &mut Party {
        &mut self.party
    }
}

/// Outcome of one movement attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Target cell lies outside the grid; nothing changed.
    OutOfBounds,
    /// Target tile is not walkable; nothing changed.
    Blocked { at: Position, tile: TileKind },
    /// An NPC occupies the target cell; its dialogue triggers and the
    /// player does not move.
    Npc { index: usize },
    /// The player moved. `grass` asks the caller to run the encounter
    /// check.
    Moved { to: Position, grass: bool },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("loaded map is not rectangular: row {row} is {found} tiles wide, expected {expected}")]
    NonRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("player position {position} is outside the {width}x{height} grid")]
    PlayerOutOfBounds {
        position: Position,
        width: usize,
        height: usize,
    },

    #[error("NPC {index} position {position} is outside the {width}x{height} grid")]
    NpcOutOfBounds {
        index: usize,
        position: Position,
        width: usize,
        height: usize,
    },
}

impl GameError for MapError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::StructuralViolation
    }
}

/// Rectangular tile grid owning the player and NPCs for a play session.
///
/// The grid is immutable after construction; only actor positions
/// mutate during play.
#[derive(Debug)]
pub struct Map {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
    player: Player,
    npcs: Vec<Npc>,
}

impl Map {
    /// Builds a map from text rows, one character per tile.
    ///
    /// Fails if the rows are not all the same width, or if the
    /// player's or any NPC's coordinates fall outside the grid. The
    /// position check is bounds-only: standing on a wall tile is a
    /// valid position.
    pub fn new<S: AsRef<str>>(rows: &[S], player: Player, npcs: Vec<Npc>) -> Result<Self, MapError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);

        let mut tiles = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(MapError::NonRectangular {
                    row,
                    expected: width,
                    found,
                });
            }
            tiles.extend(line.chars().map(TileKind::from_char));
        }

        let in_bounds = |p: Position| {
            p.x >= 0 && (p.x as usize) < width && p.y >= 0 && (p.y as usize) < height
        };

        if !in_bounds(player.position()) {
            return Err(MapError::PlayerOutOfBounds {
                position: player.position(),
                width,
                height,
            });
        }
        for (index, npc) in npcs.iter().enumerate() {
            if !in_bounds(npc.position()) {
                return Err(MapError::NpcOutOfBounds {
                    index,
                    position: npc.position(),
                    width,
                    height,
                });
            }
        }

        Ok(Self {
            width,
            height,
            tiles,
            player,
            npcs,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && (position.x as usize) < self.width
            && position.y >= 0
            && (position.y as usize) < self.height
    }

    /// The tile at a position, or None outside the grid.
    pub fn tile(&self, position: Position) -> Option<TileKind> {
        if !self.contains(position) {
            return None;
        }
        Some(self.tiles[position.y as usize * self.width + position.x as usize])
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    /// Attempts to move the player by the given delta.
    ///
    /// The player never leaves the grid, never enters a non-walkable
    /// tile, and never overlaps an NPC's cell.
    pub fn try_move_by(&mut self, dx: i32, dy: i32) -> MoveOutcome {
        let from = self.player.position;
        let target = Position::new(from.x + dx, from.y + dy);

        let Some(tile) = self.tile(target) else {
            return MoveOutcome::OutOfBounds;
        };

        if let Some(index) = self.npcs.iter().position(|npc| npc.position == target) {
            return MoveOutcome::Npc { index };
        }

        if !tile.is_walkable() {
            return MoveOutcome::Blocked { at: target, tile };
        }

        self.player.position = target;
        MoveOutcome::Moved {
            to: target,
            grass: tile.is_grass(),
        }
    }
}
