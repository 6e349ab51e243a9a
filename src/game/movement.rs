//! Movement and item pickup
//!
//! One keypress moves the character at most one cell. Bumping into a wall or
//! the edge of the maze is ordinary play, not an error.

use crate::entities::{Character, Locatable};
use crate::items::{Item, ItemKind};
use crate::world::{Direction, Grid, Position};

/// Why a move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// Target cell lies outside the grid
    Edge,
    Wall,
}

/// Result of a single move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(Position),
    Blocked(BlockReason),
}

impl MoveOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved(_))
    }
}

/// Move the character one cell unless the target is off-grid or a wall.
///
/// A blocked move leaves the character untouched.
pub fn try_move(character: &mut Character, grid: &Grid, direction: Direction) -> MoveOutcome {
    let target = character.position().step(direction);

    let symbol = match grid.tile_at(target) {
        Ok(symbol) => symbol,
        Err(_) => return MoveOutcome::Blocked(BlockReason::Edge),
    };
    if grid.is_wall(symbol) {
        return MoveOutcome::Blocked(BlockReason::Wall);
    }

    character.set_position(target);
    MoveOutcome::Moved(target)
}

/// Pick up every visible item on the character's cell.
///
/// Returns the kinds collected by this call. Items already hidden are skipped,
/// so calling this again on the same cell collects nothing.
pub fn collect(character: &mut Character, items: &mut [Item]) -> Vec<ItemKind> {
    let here = character.position();
    let mut collected = Vec::new();

    for item in items.iter_mut().filter(|i| i.visible && i.is_at(here)) {
        character.inventory_mut().add(item.kind);
        item.visible = false;
        collected.push(item.kind);
    }

    collected
}
