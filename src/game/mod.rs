//! Game module - Core game logic and state management

mod goal;
mod movement;
mod state;

pub use goal::{evaluate, Outcome};
pub use movement::{collect, try_move, BlockReason, MoveOutcome};
pub use state::{Game, GameState, ItemView, Level, Snapshot};
