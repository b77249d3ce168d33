//! Per-card flip state machine.
//!
//! ```text
//!             request_flip_to_face_up            advance(..) reaches 1
//!   FaceDown ────────────────────────► TurningToFaceUp ──────────────► FaceUp
//!      ▲                                                                 │
//!      │      advance(..) reaches 1          request_flip_to_face_down   │
//!      └─────────────────────── TurningToFaceDown ◄──────────────────────┘
//! ```
//!
//! Flip requests are only honoured from the matching rest phase. A flip
//! that has started always runs to completion; there is no cancel.

use serde::{Deserialize, Serialize};

use crate::core::config::TurnDuration;
use crate::core::geometry::Orientation;

/// Which way a card is facing, or which way it is turning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardPhase {
    /// Resting with the back towards the viewer.
    #[default]
    FaceDown,
    /// Resting with the front towards the viewer.
    FaceUp,
    /// Animating from back to front.
    TurningToFaceUp,
    /// Animating from front to back.
    TurningToFaceDown,
}

impl CardPhase {
    /// Is the card mid-animation?
    #[must_use]
    pub const fn is_turning(self) -> bool {
        matches!(self, CardPhase::TurningToFaceUp | CardPhase::TurningToFaceDown)
    }

    /// Rest phase this phase ends in.
    #[must_use]
    pub const fn settled(self) -> Self {
        match self {
            CardPhase::FaceDown | CardPhase::TurningToFaceDown => CardPhase::FaceDown,
            CardPhase::FaceUp | CardPhase::TurningToFaceUp => CardPhase::FaceUp,
        }
    }

    /// Orientation of the rest phase this phase ends in.
    #[must_use]
    pub const fn target_orientation(self) -> Orientation {
        match self.settled() {
            CardPhase::FaceUp => Orientation::face_up(),
            _ => Orientation::face_down(),
        }
    }
}

/// Flip state of one card.
///
/// `progress` runs from 0 to 1 while turning and is reset to 0 whenever a
/// new turn starts. The phase resolves exactly when progress reaches 1.
#[derive(Clone, Debug, PartialEq)]
pub struct CardState {
    phase: CardPhase,
    progress: f32,
    start: Orientation,
    duration: TurnDuration,
}

impl CardState {
    /// A face-down card that turns over in `duration`.
    #[must_use]
    pub fn new(duration: TurnDuration) -> Self {
        Self {
            phase: CardPhase::FaceDown,
            progress: 0.0,
            start: Orientation::face_down(),
            duration,
        }
    }

    #[must_use]
    pub fn phase(&self) -> CardPhase {
        self.phase
    }

    /// Turn progress in `[0, 1]`. Only meaningful while turning.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub fn is_turning(&self) -> bool {
        self.phase.is_turning()
    }

    #[must_use]
    pub fn duration(&self) -> TurnDuration {
        self.duration
    }

    /// Start turning face up. Ignored unless the card is face down.
    ///
    /// Returns whether the flip started.
    pub fn request_flip_to_face_up(&mut self) -> bool {
        self.begin_turn(CardPhase::FaceDown, CardPhase::TurningToFaceUp)
    }

    /// Start turning face down. Ignored unless the card is face up.
    ///
    /// Returns whether the flip started.
    pub fn request_flip_to_face_down(&mut self) -> bool {
        self.begin_turn(CardPhase::FaceUp, CardPhase::TurningToFaceDown)
    }

    fn begin_turn(&mut self, from: CardPhase, to: CardPhase) -> bool {
        if self.phase != from {
            return false;
        }
        self.start = self.orientation();
        self.phase = to;
        self.progress = 0.0;
        true
    }

    /// Advance the animation by `delta_time` seconds.
    ///
    /// Returns the rest phase if the turn finished during this call. Does
    /// nothing when the card is not turning or `delta_time` is not a
    /// non-negative finite number.
    pub fn advance(&mut self, delta_time: f32) -> Option<CardPhase> {
        if !self.phase.is_turning() || !delta_time.is_finite() || delta_time < 0.0 {
            return None;
        }

        self.progress += delta_time / self.duration.seconds();
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.phase = self.phase.settled();
            return Some(self.phase);
        }
        None
    }

    /// Current orientation, interpolated while turning.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        if self.phase.is_turning() {
            Orientation::slerp(self.start, self.phase.target_orientation(), self.progress)
        } else {
            self.phase.target_orientation()
        }
    }
}
