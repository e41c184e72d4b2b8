//! The player's board: one color per code slot.

use serde::{Deserialize, Serialize};

use crate::core::{Color, MastermindError, Palette, Result, Sequence};

/// Current player selection, edited slot by slot before each check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    slots: Sequence,
}

impl Board {
    /// Create a board from its slot colors.
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        Self {
            slots: colors.into_iter().collect(),
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.slots
    }

    /// Color in `slot`, if the slot exists.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<Color> {
        self.slots.get(slot).copied()
    }

    /// Put `color` in `slot`.
    pub fn set(&mut self, palette: &Palette, slot: usize, color: Color) -> Result<()> {
        if !palette.contains(color) {
            return Err(MastermindError::guess(format!("{color} is not in the palette")));
        }
        *self.slot_mut(slot)? = color;
        Ok(())
    }

    /// Advance `slot` to the next palette color and return it.
    ///
    /// Wraps from the last palette color to the first, so every color is
    /// reachable.
    pub fn cycle(&mut self, palette: &Palette, slot: usize) -> Result<Color> {
        let current = self.slot_mut(slot)?;
        *current = palette.next_after(*current);
        Ok(*current)
    }

    fn slot_mut(&mut self, slot: usize) -> Result<&mut Color> {
        let len = self.slots.len();
        self.slots
            .get_mut(slot)
            .ok_or_else(|| MastermindError::guess(format!("slot {slot} is out of range (board has {len})")))
    }
}
