//! Cards on the table.
//!
//! A `Card` is created once during setup and lives for the whole session.
//! Its identity, images and placement never change; only its flip state
//! and the `removed` flag do. Matched cards are hidden, not destroyed.

use serde::{Deserialize, Serialize};

use super::image::{ImageRef, PairKey};
use super::state::{CardPhase, CardState};
use crate::core::entity::CardId;
use crate::core::geometry::{Orientation, Vec2};
use crate::grid::Cell;

/// Where a card sits: its grid cell and the world position derived from it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub cell: Cell,
    pub position: Vec2,
}

/// A card in play.
#[derive(Clone, Debug)]
pub struct Card {
    id: CardId,
    pair_key: PairKey,
    front: ImageRef,
    back: ImageRef,
    placement: Placement,
    state: CardState,
    removed: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(
        id: CardId,
        front: ImageRef,
        back: ImageRef,
        placement: Placement,
        state: CardState,
    ) -> Self {
        Self {
            id,
            pair_key: PairKey::of(&front),
            front,
            back,
            placement,
            state,
            removed: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn pair_key(&self) -> PairKey {
        self.pair_key
    }

    /// Does this card form a pair with `other`?
    ///
    /// A card never pairs with itself.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.id != other.id && self.pair_key == other.pair_key
    }

    #[must_use]
    pub fn front(&self) -> &ImageRef {
        &self.front
    }

    #[must_use]
    pub fn back(&self) -> &ImageRef {
        &self.back
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    #[must_use]
    pub fn cell(&self) -> Cell {
        self.placement.cell
    }

    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.placement.position
    }

    #[must_use]
    pub fn state(&self) -> &CardState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> CardPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.state.orientation()
    }

    /// Has this card been cleared as part of a matched pair?
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    pub(crate) fn state_mut(&mut self) -> &mut CardState {
        &mut self.state
    }

    pub(crate) fn remove(&mut self) {
        self.removed = true;
    }
}
