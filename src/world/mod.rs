//! World module
//!
//! Contains the maze grid, tile symbols, coordinates and entity placement.

pub mod grid;
pub mod placement;
pub mod position;
pub mod tile;

pub use grid::Grid;
pub use placement::{place_randomly, Region, DEFAULT_PLACEMENT_ATTEMPTS};
pub use position::{Direction, Position};
pub use tile::{Symbols, TileKind};
