//! Entity creation and management
//!
//! Entities share one capability: they occupy a grid cell. Behaviour such as
//! moving or carrying items is composed onto the types that need it.

pub mod npcs;
pub mod player;

pub use npcs::{spawn_npc, Npc, NpcKind};
pub use player::{spawn_character, Character, CHARACTER_MARKER};

use crate::world::Position;

/// Anything that occupies a cell on the maze
pub trait Locatable {
    fn position(&self) -> Position;

    fn is_at(&self, pos: Position) -> bool {
        self.position() == pos
    }

    /// Top-left pixel for a renderer, derived from the grid cell
    fn pixel_position(&self, tile_size: u32) -> (i32, i32) {
        self.position().to_pixels(tile_size)
    }
}
