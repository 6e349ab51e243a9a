//! Win/lose check at the guardian

use std::collections::BTreeSet;

use crate::entities::{Character, Locatable, Npc};
use crate::items::ItemKind;

/// What meeting the guardian means for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Not standing on the guardian yet
    Ongoing,
    Win,
    Lose,
}

/// Judge the character against the guardian.
///
/// Only decides anything once both share a cell. Then the inventory must hold
/// exactly the required set; anything short of that loses on the spot.
pub fn evaluate(character: &Character, npc: &Npc, required: &[ItemKind]) -> Outcome {
    if !character.is_at(npc.position()) {
        return Outcome::Ongoing;
    }

    let held: BTreeSet<ItemKind> = character.inventory().iter().collect();
    let wanted: BTreeSet<ItemKind> = required.iter().copied().collect();

    if held == wanted {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
