//! Inbound events, their outcomes, and the dispatch queue.
//!
//! The platform layer turns clicks into `CardTapped` and frame times into
//! `Tick`, pushes them onto an `EventQueue`, and runs the queue against the
//! session. Each event is handled to completion before the next one starts.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::VecDeque;

use super::game::GameSession;
use crate::cards::{CardPhase, PairKey};
use crate::core::entity::CardId;

/// Something that happened outside the core.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The player tapped or clicked a card.
    CardTapped(CardId),
    /// Frame clock advanced by this many seconds.
    Tick(f32),
}

/// Why a tap had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No card with that ID exists in this session.
    UnknownCard,
    /// The card was already cleared.
    Removed,
    /// A picked pair is waiting to be cleared or turned back.
    Resolving,
    /// The card is the one already picked this turn.
    AlreadySelected,
    /// The card is face up or mid-turn.
    NotFaceDown,
}

/// Result of handling a tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TapOutcome {
    /// The card was turned up as the first pick.
    FirstSelected,
    /// The card was turned up as the second pick and the pair evaluated.
    SecondSelected { matched: bool },
    /// The tap was dropped.
    Ignored(IgnoreReason),
}

impl TapOutcome {
    /// Did the tap change anything?
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, TapOutcome::Ignored(_))
    }
}

/// How a picked pair was resolved once the timeout elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// The cards matched and were taken off the table.
    Cleared { first: CardId, second: CardId, pair_key: PairKey },
    /// The cards differed and were turned face down again.
    TurnedBack { first: CardId, second: CardId },
}

/// What a tick changed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Cards whose flip finished during this tick, with the phase they
    /// settled in.
    pub settled: SmallVec<[(CardId, CardPhase); 4]>,

    /// Set when a picked pair was resolved during this tick.
    pub resolution: Option<Resolution>,
}

impl TickReport {
    /// Did nothing change?
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.settled.is_empty() && self.resolution.is_none()
    }
}

/// Outcome of dispatching one event.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionUpdate {
    Tap { card: CardId, outcome: TapOutcome },
    Tick(TickReport),
}

impl GameSession {
    /// Handle one event synchronously.
    pub fn dispatch(&mut self, event: SessionEvent) -> SessionUpdate {
        match event {
            SessionEvent::CardTapped(card) => SessionUpdate::Tap {
                card,
                outcome: self.on_card_tapped(card),
            },
            SessionEvent::Tick(delta_time) => SessionUpdate::Tick(self.on_tick(delta_time)),
        }
    }
}

/// FIFO queue of pending events.
///
/// ## Example
///
/// ```
/// use memory_match::cards::StaticCatalog;
/// use memory_match::core::{CardId, SessionConfig};
/// use memory_match::session::{EventQueue, GameSession, SessionStatus};
///
/// let config = SessionConfig::new(2, 2).with_seed(7);
/// let mut session = GameSession::new(&config, &StaticCatalog::numbered(4, 1)).unwrap();
///
/// let mut queue = EventQueue::new();
/// queue.tap(CardId::new(0));
/// queue.tick(0.1);
///
/// let updates = queue.run(&mut session);
/// assert_eq!(updates.len(), 2);
/// assert!(queue.is_empty());
/// assert_eq!(session.status(), SessionStatus::AwaitingSecondSelection);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: VecDeque<SessionEvent>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: SessionEvent) {
        self.events.push_back(event);
    }

    /// Queue a tap on `card`.
    pub fn tap(&mut self, card: CardId) {
        self.push(SessionEvent::CardTapped(card));
    }

    /// Queue a clock tick of `delta_time` seconds.
    pub fn tick(&mut self, delta_time: f32) {
        self.push(SessionEvent::Tick(delta_time));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Dispatch every queued event in arrival order.
    pub fn run(&mut self, session: &mut GameSession) -> Vec<SessionUpdate> {
        let mut updates = Vec::with_capacity(self.events.len());
        while let Some(event) = self.events.pop_front() {
            updates.push(session.dispatch(event));
        }
        updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_outcome_is_accepted() {
        assert!(TapOutcome::FirstSelected.is_accepted());
        assert!(TapOutcome::SecondSelected { matched: false }.is_accepted());
        assert!(!TapOutcome::Ignored(IgnoreReason::Resolving).is_accepted());
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = EventQueue::new();
        queue.tap(CardId(1));
        queue.tick(0.5);
        queue.tap(CardId(2));

        assert_eq!(queue.len(), 3);
        let order: Vec<_> = queue.events.iter().copied().collect();
        assert_eq!(
            order,
            vec![
                SessionEvent::CardTapped(CardId(1)),
                SessionEvent::Tick(0.5),
                SessionEvent::CardTapped(CardId(2)),
            ]
        );
    }

    #[test]
    fn test_default_report_is_quiet() {
        assert!(TickReport::default().is_quiet());
    }

    #[test]
    fn test_event_serialization() {
        let event = SessionEvent::CardTapped(CardId(4));
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: SessionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
