//! Game state machine
//!
//! A session runs `Setup -> Playing -> {Won, Lost}`. Setup builds a fresh
//! level; nothing from a previous session survives into the next one.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::goal::{evaluate, Outcome};
use super::movement::{collect, try_move, MoveOutcome};
use crate::data::GameConfig;
use crate::entities::{
    spawn_character, spawn_npc, Character, Locatable, Npc, NpcKind, CHARACTER_MARKER,
};
use crate::error::{MapError, SetupError};
use crate::items::{scatter_items, Inventory, Item, ItemKind};
use crate::world::{Direction, Grid, Position};

/// All possible session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No playable level yet (or setup failed)
    Setup,
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        matches!(self, GameState::Won | GameState::Lost)
    }
}

/// Everything that lives for exactly one session
#[derive(Debug, Clone)]
pub struct Level {
    grid: Grid,
    character: Character,
    guardian: Npc,
    items: Vec<Item>,
}

impl Level {
    /// Assemble a level from already placed parts
    pub fn new(grid: Grid, character: Character, guardian: Npc, items: Vec<Item>) -> Self {
        Self {
            grid,
            character,
            guardian,
            items,
        }
    }

    /// Build a level from map text
    pub fn generate<R: RngCore + ?Sized>(
        config: &GameConfig,
        map_text: &str,
        rng: &mut R,
    ) -> Result<Self, SetupError> {
        let grid = Grid::build(map_text, config.symbols.clone())?;
        Self::populate(config, grid, rng)
    }

    /// Check the grid size, hold the spawn cell, place the guardian, then
    /// each required item, then spawn the character.
    pub fn populate<R: RngCore + ?Sized>(
        config: &GameConfig,
        mut grid: Grid,
        rng: &mut R,
    ) -> Result<Self, SetupError> {
        if grid.width() != config.grid_width || grid.height() != config.grid_height {
            return Err(MapError::DimensionMismatch {
                width: config.grid_width,
                height: config.grid_height,
                found_width: grid.width(),
                found_height: grid.height(),
            }
            .into());
        }

        let start = config.start;
        let start_symbol = grid.tile_at(start)?;
        if !grid.is_floor(start_symbol) {
            return Err(SetupError::BlockedStart {
                pos: start,
                symbol: start_symbol,
            });
        }
        // Nothing may be placed under the character
        grid.set_tile(start, CHARACTER_MARKER)?;

        let guardian = spawn_npc(
            &mut grid,
            rng,
            config.guardian,
            config.guardian_region,
            config.placement_attempts,
        )?;
        let items = scatter_items(
            &mut grid,
            rng,
            &config.required_items,
            config.item_region,
            config.placement_attempts,
        )?;

        grid.set_tile(start, start_symbol)?;
        let character = spawn_character(start);

        Ok(Self::new(grid, character, guardian, items))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn guardian(&self) -> &Npc {
        &self.guardian
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Move, pick up whatever lies on the new cell, and clear its marker
    pub fn move_character(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = try_move(&mut self.character, &self.grid, direction);
        match outcome {
            MoveOutcome::Moved(pos) => {
                log::debug!("Moved {} to {}", direction.name(), pos);
                let picked = collect(&mut self.character, &mut self.items);
                if !picked.is_empty() {
                    for kind in &picked {
                        log::info!("{} collected", kind.name());
                    }
                    // Collection happens on the character's cell, which is in bounds
                    if let Err(e) = self.grid.clear_tile(pos) {
                        log::warn!("Could not clear pickup marker: {}", e);
                    }
                }
            }
            MoveOutcome::Blocked(reason) => {
                log::debug!("Move {} blocked: {:?}", direction.name(), reason);
            }
        }
        outcome
    }

    pub fn evaluate(&self, required: &[ItemKind]) -> Outcome {
        evaluate(&self.character, &self.guardian, required)
    }
}

/// An item as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemView {
    pub kind: ItemKind,
    pub position: Position,
    pub pixel: (i32, i32),
    pub visible: bool,
}

/// Read-only view of a level for one frame
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    pub state: GameState,
    pub grid: &'a Grid,
    pub character: Position,
    pub guardian: Position,
    pub guardian_kind: NpcKind,
    pub items: Vec<ItemView>,
    pub inventory: &'a [ItemKind],
    pub required: &'a [ItemKind],
}

impl Snapshot<'_> {
    /// Visible item on a cell, if any
    pub fn item_at(&self, pos: Position) -> Option<&ItemView> {
        self.items.iter().find(|i| i.visible && i.position == pos)
    }
}

/// The main game struct that holds all session data
pub struct Game {
    config: GameConfig,
    state: GameState,
    level: Option<Level>,
    /// Random number generator (seedable for reproducibility)
    rng: Box<dyn RngCore>,
    sessions: u32,
}

impl Game {
    /// Create a new game seeded from OS entropy
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a game whose placements are reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: GameConfig, rng: impl RngCore + 'static) -> Self {
        Self {
            config,
            state: GameState::Setup,
            level: None,
            rng: Box::new(rng),
            sessions: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the current game state
    pub fn state(&self) -> GameState {
        self.state
    }

    fn set_state(&mut self, state: GameState) {
        log::debug!("State transition: {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    /// Number of sessions successfully set up so far
    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    /// Run setup on the given map text and start playing.
    ///
    /// Any previous level is dropped first. If setup fails the game stays in
    /// `Setup` with no level.
    pub fn start_session(&mut self, map_text: &str) -> Result<(), SetupError> {
        self.begin_setup();
        let grid = Grid::build(map_text, self.config.symbols.clone())?;
        self.start_on_grid(grid)
    }

    /// Start a session from the configured map file
    pub fn start_session_from_file(&mut self) -> Result<(), SetupError> {
        self.begin_setup();
        let grid = Grid::load(&self.config.map_path, self.config.symbols.clone())?;
        self.start_on_grid(grid)
    }

    fn begin_setup(&mut self) {
        self.level = None;
        self.set_state(GameState::Setup);
    }

    fn start_on_grid(&mut self, grid: Grid) -> Result<(), SetupError> {
        let level = Level::populate(&self.config, grid, self.rng.as_mut())?;
        log::info!(
            "Session {} ready: guardian at {}, {} items placed",
            self.sessions + 1,
            level.guardian().position(),
            level.items().len()
        );

        self.level = Some(level);
        self.sessions += 1;
        self.set_state(GameState::Playing);
        Ok(())
    }

    /// Start a session on a level built elsewhere
    pub fn start_with_level(&mut self, level: Level) {
        self.level = Some(level);
        self.sessions += 1;
        self.set_state(GameState::Playing);
    }

    /// Apply at most one directional command for this tick.
    ///
    /// Ignored unless a session is being played. Ends the session when the
    /// character reaches the guardian.
    pub fn handle_input(&mut self, command: Option<Direction>) -> GameState {
        if self.state != GameState::Playing {
            return self.state;
        }
        let (Some(direction), Some(level)) = (command, self.level.as_mut()) else {
            return self.state;
        };

        if !level.move_character(direction).moved() {
            return self.state;
        }

        match level.evaluate(&self.config.required_items) {
            Outcome::Ongoing => {}
            Outcome::Win => {
                log::info!("Guardian satisfied, session won");
                self.set_state(GameState::Won);
            }
            Outcome::Lose => {
                log::info!(
                    "Reached the guardian with {}/{} items, session lost",
                    level.character().inventory().len(),
                    self.config.required_items.len()
                );
                self.set_state(GameState::Lost);
            }
        }
        self.state
    }

    pub fn inventory(&self) -> Option<&Inventory> {
        self.level.as_ref().map(|l| l.character().inventory())
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Option<Snapshot<'_>> {
        let level = self.level.as_ref()?;
        let tile_size = self.config.tile_size;
        Some(Snapshot {
            state: self.state,
            grid: level.grid(),
            character: level.character().position(),
            guardian: level.guardian().position(),
            guardian_kind: level.guardian().kind(),
            items: level
                .items()
                .iter()
                .map(|item| ItemView {
                    kind: item.kind,
                    position: item.position,
                    pixel: item.pixel_position(tile_size),
                    visible: item.visible,
                })
                .collect(),
            inventory: level.character().inventory().snapshot(),
            required: &self.config.required_items,
        })
    }
}
