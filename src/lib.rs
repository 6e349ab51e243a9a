//! Guardian Maze - a single-screen terminal maze game
//!
//! Collect every required item scattered through the maze, then reach the
//! guardian. Arrive empty-handed, or short of even one item, and you lose.

pub mod data;
pub mod entities;
pub mod error;
pub mod game;
pub mod items;
pub mod ui;
pub mod world;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use data::GameConfig;
pub use error::{ConfigError, MapError, OutOfBounds, PlacementExhausted, SetupError};
pub use game::{Game, GameState, Outcome};
pub use world::{Direction, Grid, Position};
