//! Walkability classes for map tiles.

/// Canonical tile classes and their walkability.
///
/// Loaded maps are plain text, one character per tile; unknown
/// characters decode to [`TileKind::Unknown`] and block movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    Ground,
    Sand,
    GrassOnGround,
    GrassOnSand,
    Bridge,
    Wall,
    Water,
    Unknown,
}

impl TileKind {
    /// Decodes the fixed character mapping of the map text format.
    pub fn from_char(c: char) -> Self {
        match c {
            ' ' => TileKind::Ground,
            ':' => TileKind::Sand,
            '*' => TileKind::GrassOnGround,
            '&' => TileKind::GrassOnSand,
            'p' => TileKind::Bridge,
            '#' => TileKind::Wall,
            'o' => TileKind::Water,
            _ => TileKind::Unknown,
        }
    }

    /// The player may only move onto walkable tiles.
    pub fn is_walkable(self) -> bool {
        matches!(
            self,
            TileKind::Ground
                | TileKind::Sand
                | TileKind::GrassOnGround
                | TileKind::GrassOnSand
                | TileKind::Bridge
        )
    }

    /// Grass variants run the encounter check when stepped onto.
    pub fn is_grass(self) -> bool {
        matches!(self, TileKind::GrassOnGround | TileKind::GrassOnSand)
    }
}
