//! Data loading and external game content
//!
//! Session configuration lives in a RON file so maps, symbols and the
//! required item set can change without touching code.

pub mod config;

pub use config::{GameConfig, CONFIG_PATH};
