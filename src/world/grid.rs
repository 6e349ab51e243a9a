//! Maze grid
//!
//! The tile matrix for one session, parsed from a text map.

use std::fs;
use std::path::Path;

use super::position::Position;
use super::tile::{Symbols, TileKind};
use crate::error::{MapError, OutOfBounds, SetupError};

/// A rectangular maze of tile symbols, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<char>,
    symbols: Symbols,
}

impl Grid {
    /// Parse a text map, one row per line and one tile per character.
    ///
    /// Every row must have the same length. Nothing is padded or truncated.
    pub fn build(map_text: &str, symbols: Symbols) -> Result<Self, MapError> {
        let mut tiles = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (row, line) in map_text.lines().enumerate() {
            let start = tiles.len();
            tiles.extend(line.chars());
            let found = tiles.len() - start;

            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(MapError::RaggedRow { row, expected, found });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = match width {
            Some(w) if w > 0 => w,
            _ => return Err(MapError::Empty),
        };

        Ok(Self {
            width: width as i32,
            height,
            tiles,
            symbols,
        })
    }

    /// Read and parse a map file
    pub fn load(path: impl AsRef<Path>, symbols: Symbols) -> Result<Self, SetupError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SetupError::MapFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::build(&text, symbols)?)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    /// Check if a position is within bounds
    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    fn index(&self, pos: Position) -> Result<usize, OutOfBounds> {
        if self.in_bounds(pos) {
            Ok((pos.y * self.width + pos.x) as usize)
        } else {
            Err(OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Symbol at a position
    pub fn tile_at(&self, pos: Position) -> Result<char, OutOfBounds> {
        self.index(pos).map(|idx| self.tiles[idx])
    }

    /// Overwrite the symbol at a position
    pub fn set_tile(&mut self, pos: Position, symbol: char) -> Result<(), OutOfBounds> {
        let idx = self.index(pos)?;
        self.tiles[idx] = symbol;
        Ok(())
    }

    pub fn is_wall(&self, symbol: char) -> bool {
        self.symbols.is_wall(symbol)
    }

    pub fn is_floor(&self, symbol: char) -> bool {
        self.symbols.is_floor(symbol)
    }

    pub fn kind_at(&self, pos: Position) -> Result<TileKind, OutOfBounds> {
        self.tile_at(pos).map(|symbol| self.symbols.kind(symbol))
    }

    /// Put the floor symbol back on a cell (marker cleared)
    pub fn clear_tile(&mut self, pos: Position) -> Result<(), OutOfBounds> {
        let floor = self.symbols.floor();
        self.set_tile(pos, floor)
    }

    /// Rows of symbols, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.tiles.chunks(self.width as usize)
    }

    /// Number of cells currently free for placement
    pub fn floor_count(&self) -> usize {
        self.tiles.iter().filter(|&&t| self.symbols.is_floor(t)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::bordered_map;

    #[test]
    fn test_build_dimensions() {
        let grid = Grid::build("mmmm\nmffm\nmmmm\n", Symbols::default()).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.rows().count(), 3);
    }

    #[test]
    fn test_build_strips_crlf() {
        let grid = Grid::build("mfm\r\nfff\r\n", Symbols::default()).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.tile_at(Position::new(2, 0)), Ok('m'));
    }

    #[test]
    fn test_build_15x15() {
        let grid = Grid::build(&bordered_map(15), Symbols::default()).unwrap();
        assert_eq!((grid.width(), grid.height()), (15, 15));
        assert_eq!(grid.floor_count(), 13 * 13);
    }

    #[test]
    fn test_ragged_row_rejected() {
        let mut text = bordered_map(15);
        // Drop one tile from the fourth row
        let row_len = 16;
        text.remove(3 * row_len + 5);
        let err = Grid::build(&text, Symbols::default()).unwrap_err();
        assert_eq!(
            err,
            MapError::RaggedRow {
                row: 3,
                expected: 15,
                found: 14
            }
        );
    }

    #[test]
    fn test_empty_map_rejected() {
        assert_eq!(Grid::build("", Symbols::default()), Err(MapError::Empty));
        assert_eq!(Grid::build("\n\n", Symbols::default()), Err(MapError::Empty));
    }

    #[test]
    fn test_tile_access_bounds() {
        let mut grid = Grid::build("ff\nfm\n", Symbols::default()).unwrap();
        assert_eq!(grid.tile_at(Position::new(1, 1)), Ok('m'));
        assert!(grid.tile_at(Position::new(2, 0)).is_err());
        assert!(grid.tile_at(Position::new(0, -1)).is_err());

        let before = grid.clone();
        let err = grid.set_tile(Position::new(0, 2), 'E').unwrap_err();
        assert_eq!(err.pos, Position::new(0, 2));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_set_and_clear_tile() {
        let mut grid = Grid::build("ff\nff\n", Symbols::default()).unwrap();
        let pos = Position::new(1, 0);
        grid.set_tile(pos, 'E').unwrap();
        assert_eq!(grid.kind_at(pos), Ok(TileKind::Marker));
        grid.clear_tile(pos).unwrap();
        assert_eq!(grid.tile_at(pos), Ok('f'));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Grid::load("does/not/exist.txt", Symbols::default()).unwrap_err();
        assert!(matches!(err, SetupError::MapFile { .. }));
    }
}
