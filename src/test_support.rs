//! Shared fixtures for unit tests

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::world::{Grid, Symbols};

/// Square map text: wall border, open floor inside
pub fn bordered_map(size: usize) -> String {
    let mut text = String::new();
    for row in 0..size {
        for col in 0..size {
            let edge = row == 0 || col == 0 || row == size - 1 || col == size - 1;
            text.push(if edge { 'm' } else { 'f' });
        }
        text.push('\n');
    }
    text
}

pub fn bordered_grid(size: usize) -> Grid {
    Grid::build(&bordered_map(size), Symbols::default()).expect("bordered map is rectangular")
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
