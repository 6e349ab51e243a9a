//! Tile symbols
//!
//! A map cell is a single character. Which characters block movement and which
//! are open floor comes from configuration; anything else is an entity marker.

use serde::{Deserialize, Serialize};

/// Classification of tile symbols
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbols {
    /// Impassable tiles
    pub walls: Vec<char>,
    /// Walkable tiles free for placement. The first entry is written back when
    /// a marker is cleared.
    pub floors: Vec<char>,
}

/// Broad kind of a tile symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Wall,
    Floor,
    /// Floor reserved by a placed item or NPC
    Marker,
}

impl Symbols {
    pub fn new(walls: impl Into<Vec<char>>, floors: impl Into<Vec<char>>) -> Self {
        Self {
            walls: walls.into(),
            floors: floors.into(),
        }
    }

    pub fn is_wall(&self, symbol: char) -> bool {
        self.walls.contains(&symbol)
    }

    pub fn is_floor(&self, symbol: char) -> bool {
        self.floors.contains(&symbol)
    }

    pub fn kind(&self, symbol: char) -> TileKind {
        if self.is_wall(symbol) {
            TileKind::Wall
        } else if self.is_floor(symbol) {
            TileKind::Floor
        } else {
            TileKind::Marker
        }
    }

    /// Symbol used to restore a cell once its marker is gone
    pub fn floor(&self) -> char {
        self.floors.first().copied().unwrap_or(DEFAULT_FLOOR)
    }
}

pub const DEFAULT_WALL: char = 'm';
pub const DEFAULT_FLOOR: char = 'f';

impl Default for Symbols {
    fn default() -> Self {
        Self::new([DEFAULT_WALL], [DEFAULT_FLOOR])
    }
}
