//! Terminal front end
//!
//! Draws the maze with ratatui and turns key presses into moves.

pub mod app;

pub use app::{direction_for, App, Screen};
