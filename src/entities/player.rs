//! Player character

use crate::items::Inventory;
use crate::world::Position;

use super::Locatable;

/// Holds the spawn cell while the rest of the level is placed
pub const CHARACTER_MARKER: char = '@';

/// The character steered by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    position: Position,
    inventory: Inventory,
}

impl Character {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            inventory: Inventory::new(),
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Only movement should call this; it does no collision checks
    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

impl Locatable for Character {
    fn position(&self) -> Position {
        self.position
    }
}

/// Spawn the character at the session start cell with an empty inventory
pub fn spawn_character(start: Position) -> Character {
    log::debug!("Spawned character at {}", start);
    Character::new(start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_empty_handed() {
        let character = spawn_character(Position::new(0, 0));
        assert_eq!(character.position(), Position::new(0, 0));
        assert!(character.inventory().is_empty());
        assert_eq!(character.pixel_position(30), (0, 0));
    }
}
