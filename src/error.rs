//! Error types
//!
//! Movement into walls or off the edge is normal play and never shows up here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::world::Position;

/// The map text cannot form a rectangular grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map is empty")]
    Empty,
    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("map is {found_width}x{found_height}, configured for {width}x{height}")]
    DimensionMismatch {
        width: i32,
        height: i32,
        found_width: i32,
        found_height: i32,
    },
}

/// Tile access outside the grid. Indicates a logic defect in the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("position {pos} is outside the {width}x{height} grid")]
pub struct OutOfBounds {
    pub pos: Position,
    pub width: i32,
    pub height: i32,
}

/// No free floor tile was found for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no free floor tile for '{marker}' after {attempts} attempts")]
pub struct PlacementExhausted {
    pub marker: char,
    pub attempts: u32,
}

/// Anything that aborts session setup
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("malformed map: {0}")]
    MalformedMap(#[from] MapError),
    #[error("failed to read map file {}: {source}", .path.display())]
    MapFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("start {pos} is not a floor tile (found '{symbol}')")]
    BlockedStart { pos: Position, symbol: char },
    #[error(transparent)]
    Placement(#[from] PlacementExhausted),
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),
}

/// Configuration could not be loaded or makes no sense
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid config: {0}")]
    Invalid(String),
}
