//! Item definitions
//!
//! The collectable item kinds, their static metadata, and the item entity
//! that sits on the maze.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::entities::Locatable;
use crate::error::PlacementExhausted;
use crate::world::{place_randomly, Grid, Position, Region};

/// Every item the guardian can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemKind {
    Ether,
    Needle,
    Tube,
}

/// Static description of an item kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemMeta {
    pub kind: ItemKind,
    pub name: &'static str,
    /// Symbol stamped on the grid while the item lies there
    pub marker: char,
    /// Glyph used by the terminal renderer
    pub glyph: char,
    pub color: (u8, u8, u8),
    /// Sprite for graphical front ends
    pub sprite: &'static str,
    /// Position in the inventory overlay
    pub slot: usize,
}

static ITEM_TABLE: [ItemMeta; 3] = [
    ItemMeta {
        kind: ItemKind::Ether,
        name: "Ether",
        marker: 'E',
        glyph: '!',
        color: (120, 200, 255),
        sprite: "resources/img/ether.png",
        slot: 0,
    },
    ItemMeta {
        kind: ItemKind::Needle,
        name: "Needle",
        marker: 'N',
        glyph: '/',
        color: (220, 220, 220),
        sprite: "resources/img/needle.png",
        slot: 1,
    },
    ItemMeta {
        kind: ItemKind::Tube,
        name: "Tube",
        marker: 'T',
        glyph: '|',
        color: (255, 180, 80),
        sprite: "resources/img/tube.png",
        slot: 2,
    },
];

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::Ether, ItemKind::Needle, ItemKind::Tube];

    pub fn meta(&self) -> &'static ItemMeta {
        let meta = &ITEM_TABLE[*self as usize];
        debug_assert_eq!(meta.kind, *self);
        meta
    }

    pub fn name(&self) -> &'static str {
        self.meta().name
    }

    pub fn marker(&self) -> char {
        self.meta().marker
    }
}

/// A collectable lying on the maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub kind: ItemKind,
    pub position: Position,
    /// Cleared once, when the character picks the item up
    pub visible: bool,
}

impl Item {
    pub fn new(kind: ItemKind, position: Position) -> Self {
        Self {
            kind,
            position,
            visible: true,
        }
    }
}

impl Locatable for Item {
    fn position(&self) -> Position {
        self.position
    }
}

/// Drop one item of each kind on a random free floor cell inside `region`.
///
/// Each placement sees the markers of the ones before it.
pub fn scatter_items<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    kinds: &[ItemKind],
    region: Option<Region>,
    max_attempts: u32,
) -> Result<Vec<Item>, PlacementExhausted> {
    kinds
        .iter()
        .map(|&kind| {
            let position = place_randomly(grid, rng, kind.marker(), region, max_attempts)?;
            Ok(Item::new(kind, position))
        })
        .collect()
}
