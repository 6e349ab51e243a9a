//! NPC entity creation
//!
//! NPCs never move once placed. The only one in the maze is the guardian
//! standing between the player and the exit.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Locatable;
use crate::error::PlacementExhausted;
use crate::world::{place_randomly, Grid, Position, Region};

/// Types of NPCs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NpcKind {
    /// Lets the player through only when handed every required item
    Guardian,
}

impl NpcKind {
    pub fn name(&self) -> &'static str {
        match self {
            NpcKind::Guardian => "Guardian",
        }
    }

    /// Symbol stamped on the grid at the NPC's cell
    pub fn marker(&self) -> char {
        match self {
            NpcKind::Guardian => 'G',
        }
    }

    /// Glyph used by the terminal renderer
    pub fn glyph(&self) -> char {
        match self {
            NpcKind::Guardian => 'G',
        }
    }

    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            NpcKind::Guardian => (220, 60, 60),
        }
    }
}

/// A placed, immobile NPC
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Npc {
    kind: NpcKind,
    position: Position,
}

impl Npc {
    pub fn new(kind: NpcKind, position: Position) -> Self {
        Self { kind, position }
    }

    pub fn kind(&self) -> NpcKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

impl Locatable for Npc {
    fn position(&self) -> Position {
        self.position
    }
}

/// Spawn an NPC on a random free floor cell inside `region`
pub fn spawn_npc<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    kind: NpcKind,
    region: Option<Region>,
    max_attempts: u32,
) -> Result<Npc, PlacementExhausted> {
    let position = place_randomly(grid, rng, kind.marker(), region, max_attempts)?;
    log::info!("Spawned {} at {}", kind.name(), position);
    Ok(Npc::new(kind, position))
}
