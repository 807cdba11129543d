//! # Slots
//!
//! A slot is one cell of the layout: either a tile or a hole.

use serde::{Deserialize, Serialize};

/// State of a single layout cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// Material present.
    #[default]
    Tile,
    /// Cutout; no tile is placed.
    Hole,
}

impl Slot {
    /// Returns true for [`Slot::Tile`].
    #[inline]
    pub fn is_tile(self) -> bool {
        matches!(self, Slot::Tile)
    }

    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Slot::Tile => Slot::Hole,
            Slot::Hole => Slot::Tile,
        }
    }
}

impl From<bool> for Slot {
    fn from(is_tile: bool) -> Self {
        if is_tile {
            Slot::Tile
        } else {
            Slot::Hole
        }
    }
}

impl From<Slot> for bool {
    fn from(slot: Slot) -> Self {
        slot.is_tile()
    }
}
