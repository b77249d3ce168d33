//! The two selection slots.

use serde::{Deserialize, Serialize};

use crate::core::entity::CardId;

/// Cards picked this turn, in pick order.
///
/// Slots fill front to back and a card can occupy at most one of them.
/// Once both are filled nothing more can be selected until they are
/// cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSlots {
    slots: [Option<CardId>; 2],
}

impl SelectionSlots {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// First pick of the turn.
    #[must_use]
    pub fn first(&self) -> Option<CardId> {
        self.slots[0]
    }

    /// Second pick of the turn.
    #[must_use]
    pub fn second(&self) -> Option<CardId> {
        self.slots[1]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of filled slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.slots.contains(&Some(card))
    }

    /// May `card` be picked next?
    ///
    /// Any card may be picked into empty slots; with one slot filled any
    /// card except its occupant; with both filled, none.
    #[must_use]
    pub fn allowed_to_select(&self, card: CardId) -> bool {
        match self.slots {
            [None, _] => true,
            [Some(first), None] => first != card,
            [Some(_), Some(_)] => false,
        }
    }

    /// Put `card` in the next free slot.
    ///
    /// Returns the slot index, or `None` if the card may not be selected.
    pub(crate) fn select(&mut self, card: CardId) -> Option<usize> {
        if !self.allowed_to_select(card) {
            return None;
        }
        let index = self.slots.iter().position(Option::is_none)?;
        self.slots[index] = Some(card);
        Some(index)
    }

    /// Empty both slots, returning what they held.
    pub(crate) fn take(&mut self) -> [Option<CardId>; 2] {
        std::mem::take(&mut self.slots)
    }
}
