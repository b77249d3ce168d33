//! Read-only views for the renderer.
//!
//! A snapshot is a plain, serializable copy of everything needed to draw
//! the table: where each card is, how far it is turned, and whether it is
//! still in play.

use serde::{Deserialize, Serialize};

use super::game::{GameSession, SessionStatus};
use super::slots::SelectionSlots;
use crate::cards::{Card, CardPhase, ImageRef, PairKey};
use crate::core::entity::CardId;
use crate::core::geometry::Vec2;
use crate::grid::Cell;

/// Drawable state of one card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub pair_key: PairKey,
    pub front: ImageRef,
    pub back: ImageRef,
    pub cell: Cell,
    pub position: Vec2,
    pub phase: CardPhase,
    /// Rotation about the vertical axis: 0 shows the back, 180 the front.
    pub yaw_degrees: f32,
    pub removed: bool,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id(),
            pair_key: card.pair_key(),
            front: card.front().clone(),
            back: card.back().clone(),
            cell: card.cell(),
            position: card.position(),
            phase: card.phase(),
            yaw_degrees: card.orientation().yaw_degrees(),
            removed: card.is_removed(),
        }
    }
}

/// Drawable state of the whole session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub slots: SelectionSlots,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    pub cards: Vec<CardView>,
}

impl GameSession {
    /// Capture the current state for drawing.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.status(),
            slots: *self.slots(),
            matched_pairs: self.matched_pairs(),
            total_pairs: self.total_pairs(),
            cards: self.cards().iter().map(CardView::from).collect(),
        }
    }
}
