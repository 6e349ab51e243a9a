//! Random entity placement
//!
//! Entities reserve their cell by stamping a marker over the floor tile, so
//! later placements on the same grid never pick it again.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::position::Position;
use crate::error::PlacementExhausted;

/// Default retry budget before a map is declared degenerate
pub const DEFAULT_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Inclusive rectangle of cells to sample from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Region {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The full extent of a grid
    pub fn whole(grid: &Grid) -> Self {
        Self::new(0, 0, grid.width() - 1, grid.height() - 1)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.left && pos.x <= self.right && pos.y >= self.top && pos.y <= self.bottom
    }

    pub fn is_empty(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    /// Part of this region that lies on the grid
    pub fn clip(&self, grid: &Grid) -> Self {
        let bounds = Self::whole(grid);
        Self::new(
            self.left.max(bounds.left),
            self.top.max(bounds.top),
            self.right.min(bounds.right),
            self.bottom.min(bounds.bottom),
        )
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        Position::new(
            rng.gen_range(self.left..=self.right),
            rng.gen_range(self.top..=self.bottom),
        )
    }
}

/// Pick a random free floor cell and mark it with `marker`.
///
/// Samples uniformly inside `region` (the whole grid when `None`) until a
/// floor tile turns up. The grid is only touched on success.
pub fn place_randomly<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    marker: char,
    region: Option<Region>,
    max_attempts: u32,
) -> Result<Position, PlacementExhausted> {
    let region = region.unwrap_or_else(|| Region::whole(grid)).clip(grid);
    if region.is_empty() {
        return Err(PlacementExhausted { marker, attempts: 0 });
    }

    for _ in 0..max_attempts {
        let pos = region.sample(rng);
        // Sampled inside the clipped region, so always in bounds
        let Ok(symbol) = grid.tile_at(pos) else {
            continue;
        };
        if grid.is_floor(symbol) && grid.set_tile(pos, marker).is_ok() {
            log::debug!("Placed '{}' at {}", marker, pos);
            return Ok(pos);
        }
    }

    log::warn!("Gave up placing '{}' after {} attempts", marker, max_attempts);
    Err(PlacementExhausted {
        marker,
        attempts: max_attempts,
    })
}
