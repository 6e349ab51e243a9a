//! Inventory system
//!
//! Items the character has picked up, in pickup order.

use serde::{Deserialize, Serialize};

use super::item::ItemKind;

/// Ordered, duplicate-free collection of item kinds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<ItemKind>,
}

impl Inventory {
    /// Create a new inventory
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add an item kind.
    /// Returns false (and changes nothing) if it is already held.
    pub fn add(&mut self, kind: ItemKind) -> bool {
        if self.contains(kind) {
            return false;
        }
        self.items.push(kind);
        true
    }

    pub fn contains(&self, kind: ItemKind) -> bool {
        self.items.contains(&kind)
    }

    /// Held items in the order they were collected
    pub fn snapshot(&self) -> &[ItemKind] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemKind> + '_ {
        self.items.iter().copied()
    }

    /// Get current number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
