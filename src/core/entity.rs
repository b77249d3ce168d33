//! Card identification.
//!
//! Every card on the table has a unique `CardId`.
//!
//! ## ID Layout
//!
//! IDs are dense and 0-based: a session with `n` pairs owns cards
//! `0..2n`. The deck builder hands them out in construction order, so a
//! `CardId` doubles as an index into the session's card table.
//!
//! ```
//! use memory_match::core::CardId;
//!
//! let card = CardId::new(3);
//! assert_eq!(card.index(), 3);
//! assert_eq!(format!("{}", card), "Card(3)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position of this card in the session's card table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over the IDs of a deck with `card_count` cards.
    pub fn all(card_count: usize) -> impl Iterator<Item = CardId> {
        (0..card_count as u32).map(CardId)
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
