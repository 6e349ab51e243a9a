//! Game configuration
//!
//! Everything the core needs to know about a session, built once and passed
//! by reference. Loaded from a RON file, with built-in defaults matching the
//! shipped map.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::entities::{NpcKind, CHARACTER_MARKER};
use crate::error::ConfigError;
use crate::items::ItemKind;
use crate::world::{Position, Region, Symbols, DEFAULT_PLACEMENT_ATTEMPTS};

/// Default config file location
pub const CONFIG_PATH: &str = "assets/config.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    /// Side of a square tile in pixels, for graphical front ends
    pub tile_size: u32,
    pub map_path: PathBuf,
    pub symbols: Symbols,
    /// Items the guardian demands, all of which are placed each session
    pub required_items: Vec<ItemKind>,
    pub guardian: NpcKind,
    /// Character spawn cell
    pub start: Position,
    /// Where items may be dropped (`None` = anywhere)
    pub item_region: Option<Region>,
    /// Where the guardian may stand, kept away from the spawn
    pub guardian_region: Option<Region>,
    pub placement_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 15,
            grid_height: 15,
            tile_size: 30,
            map_path: PathBuf::from("assets/map/map1.txt"),
            symbols: Symbols::default(),
            required_items: ItemKind::ALL.to_vec(),
            guardian: NpcKind::Guardian,
            start: Position::new(0, 0),
            item_region: Some(Region::new(1, 1, 14, 14)),
            guardian_region: Some(Region::new(11, 11, 14, 14)),
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Load from the default location, falling back to defaults if the file
    /// does not exist
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = Path::new(CONFIG_PATH);
        if !path.exists() {
            log::warn!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Load and validate a RON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Reject configurations no session could be built from
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.grid_width <= 0 || self.grid_height <= 0 {
            return invalid(format!(
                "grid must be non-empty, got {}x{}",
                self.grid_width, self.grid_height
            ));
        }
        if self.symbols.floors.is_empty() {
            return invalid("at least one floor symbol is required".into());
        }
        if let Some(s) = self.symbols.walls.iter().find(|s| self.symbols.floors.contains(*s)) {
            return invalid(format!("'{}' is both wall and floor", s));
        }

        let mut markers: Vec<char> = self.required_items.iter().map(|k| k.marker()).collect();
        markers.push(self.guardian.marker());
        markers.push(CHARACTER_MARKER);
        if let Some(m) = markers
            .iter()
            .find(|m| self.symbols.is_wall(**m) || self.symbols.is_floor(**m))
        {
            return invalid(format!("marker '{}' collides with a tile symbol", m));
        }

        if self.required_items.is_empty() {
            return invalid("no required items".into());
        }
        let unique: HashSet<ItemKind> = self.required_items.iter().copied().collect();
        if unique.len() != self.required_items.len() {
            return invalid("required items contain duplicates".into());
        }

        if self.placement_attempts == 0 {
            return invalid("placement_attempts must be positive".into());
        }
        let start = self.start;
        if start.x < 0 || start.y < 0 || start.x >= self.grid_width || start.y >= self.grid_height {
            return invalid(format!("start {} is outside the grid", start));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_ron_round_trip_of_defaults() {
        let config = GameConfig::default();
        let text = config.to_ron().unwrap();
        assert_eq!(GameConfig::from_ron(&text).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = GameConfig::from_ron("(tile_size: 16, required_items: [Tube])").unwrap();
        assert_eq!(config.tile_size, 16);
        assert_eq!(config.required_items, vec![ItemKind::Tube]);
        assert_eq!(config.grid_width, 15);
    }

    #[test]
    fn test_parse_error() {
        let err = GameConfig::from_ron("(tile_size: \"big\")").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_overlapping_symbols() {
        let mut config = GameConfig::default();
        config.symbols = Symbols::new(['m', 'f'], ['f']);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_marker_collision() {
        let mut config = GameConfig::default();
        config.symbols = Symbols::new(['G'], ['f']);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_character_marker_as_floor() {
        let mut config = GameConfig::default();
        config.symbols = Symbols::new(['m'], ['f', '@']);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_duplicate_items() {
        let mut config = GameConfig::default();
        config.required_items = vec![ItemKind::Ether, ItemKind::Ether];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_start_off_grid() {
        let mut config = GameConfig::default();
        config.start = Position::new(15, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load("no/such/config.ron").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
