//! The turn state machine.
//!
//! ```text
//!   AwaitingFirstSelection ──tap face-down card──► AwaitingSecondSelection
//!            ▲                                              │
//!            │                              tap another face-down card
//!            │                                              │
//!            │                              ┌───────────────┴──────────────┐
//!            │                              ▼                              ▼
//!            │                         MatchFound                    NoMatchFound
//!            │                              │                              │
//!            └────── timeout elapsed ───────┴──── (clear pair / turn back) ┘
//! ```
//!
//! Taps that do not fit the current state are dropped, never errors.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::event::{IgnoreReason, Resolution, TapOutcome, TickReport};
use super::slots::SelectionSlots;
use crate::cards::{AssetCatalog, Card, CardPhase, CardState, ImageRef, Placement};
use crate::core::config::SessionConfig;
use crate::core::entity::CardId;
use crate::core::error::{ConfigurationError, SetupResult};
use crate::core::rng::GameRng;
use crate::deck::DeckBuilder;
use crate::grid::{Grid, GridLayout};

/// Where the session is in the current turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// No card picked yet.
    #[default]
    AwaitingFirstSelection,
    /// One card picked.
    AwaitingSecondSelection,
    /// Two matching cards picked, waiting to clear them.
    MatchFound,
    /// Two different cards picked, waiting to turn them back.
    NoMatchFound,
}

impl SessionStatus {
    /// Is a picked pair waiting out the timeout?
    #[must_use]
    pub const fn is_resolving(self) -> bool {
        matches!(self, SessionStatus::MatchFound | SessionStatus::NoMatchFound)
    }
}

/// One play session: the table and the turn in progress.
///
/// Cards are addressed by `CardId`; the session owns them and is the only
/// thing that mutates them.
#[derive(Clone, Debug)]
pub struct GameSession {
    layout: GridLayout,
    timeout_target: f32,
    seed: u64,
    back: ImageRef,
    cards: Vec<Card>,
    grid: Grid,
    slots: SelectionSlots,
    status: SessionStatus,
    timeout: f32,
    matched_pairs: usize,
}

impl GameSession {
    /// Deal a new table.
    ///
    /// Configuration is validated before the catalog is consulted. Any
    /// failure aborts setup; no partially dealt session is returned.
    pub fn new<C>(config: &SessionConfig, catalog: &C) -> SetupResult<Self>
    where
        C: AssetCatalog + ?Sized,
    {
        config.validate()?;
        let pair_count = config.pair_count()?;
        let duration = config.turn_duration()?;

        let rng = config.seed.map_or_else(GameRng::from_random_seed, GameRng::new);
        let seed = rng.seed();
        info!(
            seed,
            rows = config.rows,
            columns = config.columns,
            pairs = pair_count,
            "dealing memory session"
        );

        let deck = DeckBuilder::build(
            pair_count,
            &catalog.front_images(),
            &catalog.back_images(),
            &mut rng.for_context("deck"),
        )?;

        let layout = GridLayout::from_config(config);
        let ids: Vec<CardId> = deck.cards().iter().map(|card| card.id).collect();
        let grid = layout.place(&ids, &mut rng.for_context("layout"))?;

        let back = deck.back().clone();
        let footprint = catalog.footprint(&back);
        let cards = deck
            .into_cards()
            .into_iter()
            .map(|pending| -> Result<Card, ConfigurationError> {
                let cell = grid.cell_of(pending.id).ok_or(ConfigurationError::CardCountMismatch {
                    cards: ids.len(),
                    cells: grid.len(),
                })?;
                let placement = Placement {
                    cell,
                    position: layout.position_of(cell, footprint),
                };
                Ok(Card::new(
                    pending.id,
                    pending.front,
                    pending.back,
                    placement,
                    CardState::new(duration),
                ))
            })
            .collect::<Result<Vec<_>, ConfigurationError>>()?;

        Ok(Self {
            layout,
            timeout_target: config.timeout_target,
            seed,
            back,
            cards,
            grid,
            slots: SelectionSlots::new(),
            status: SessionStatus::AwaitingFirstSelection,
            timeout: 0.0,
            matched_pairs: 0,
        })
    }

    // === Queries ===

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn slots(&self) -> &SelectionSlots {
        &self.slots
    }

    /// May `card` be picked given the current slots?
    #[must_use]
    pub fn allowed_to_select(&self, card: CardId) -> bool {
        self.slots.allowed_to_select(card)
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// All cards, indexed by `CardId`.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Back image shared by every card.
    #[must_use]
    pub fn back_image(&self) -> &ImageRef {
        &self.back
    }

    /// Seed the table was dealt from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Seconds accumulated towards the timeout, while a pair is resolving.
    #[must_use]
    pub fn timeout_elapsed(&self) -> Option<f32> {
        self.status.is_resolving().then_some(self.timeout)
    }

    #[must_use]
    pub fn timeout_target(&self) -> f32 {
        self.timeout_target
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    #[must_use]
    pub fn remaining_pairs(&self) -> usize {
        self.total_pairs() - self.matched_pairs
    }

    /// Every card has been cleared.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(Card::is_removed)
    }

    // === Events ===

    /// Handle a tap on `card`.
    pub fn on_card_tapped(&mut self, card: CardId) -> TapOutcome {
        let outcome = self.try_select(card);
        match outcome {
            TapOutcome::Ignored(reason) => debug!(card = %card, ?reason, "tap ignored"),
            _ => debug!(card = %card, ?outcome, status = ?self.status, "card selected"),
        }
        outcome
    }

    fn try_select(&mut self, card: CardId) -> TapOutcome {
        if self.status.is_resolving() {
            return TapOutcome::Ignored(IgnoreReason::Resolving);
        }
        let Some(target) = self.cards.get(card.index()) else {
            return TapOutcome::Ignored(IgnoreReason::UnknownCard);
        };
        if target.is_removed() {
            return TapOutcome::Ignored(IgnoreReason::Removed);
        }
        if !self.slots.allowed_to_select(card) {
            return TapOutcome::Ignored(IgnoreReason::AlreadySelected);
        }
        if target.phase() != CardPhase::FaceDown {
            return TapOutcome::Ignored(IgnoreReason::NotFaceDown);
        }

        self.cards[card.index()].state_mut().request_flip_to_face_up();
        self.slots.select(card);

        if self.status == SessionStatus::AwaitingFirstSelection {
            self.status = SessionStatus::AwaitingSecondSelection;
            return TapOutcome::FirstSelected;
        }

        let matched = self
            .slots
            .first()
            .is_some_and(|first| self.cards[first.index()].matches(&self.cards[card.index()]));
        self.status = if matched {
            SessionStatus::MatchFound
        } else {
            SessionStatus::NoMatchFound
        };
        self.timeout = 0.0;
        TapOutcome::SecondSelected { matched }
    }

    /// Advance animations and the resolution timeout by `delta_time` seconds.
    ///
    /// Card flips advance first. A matched pair is cleared as soon as the
    /// timeout has elapsed. A mismatched pair also waits for both of its
    /// cards to finish turning face up, so they can be turned back.
    pub fn on_tick(&mut self, delta_time: f32) -> TickReport {
        let mut report = TickReport::default();
        if !delta_time.is_finite() || delta_time < 0.0 {
            warn!(delta_time, "dropping malformed tick");
            return report;
        }

        for card in self.cards.iter_mut().filter(|card| !card.is_removed()) {
            if let Some(phase) = card.state_mut().advance(delta_time) {
                report.settled.push((card.id(), phase));
            }
        }

        if self.status.is_resolving() {
            self.timeout += delta_time;
            let ready = self.status == SessionStatus::MatchFound || self.picks_settled();
            if self.timeout >= self.timeout_target && ready {
                report.resolution = self.resolve();
            }
        }

        report
    }

    fn picks_settled(&self) -> bool {
        [self.slots.first(), self.slots.second()]
            .into_iter()
            .flatten()
            .all(|id| !self.cards[id.index()].state().is_turning())
    }

    fn resolve(&mut self) -> Option<Resolution> {
        let status = std::mem::take(&mut self.status);
        self.timeout = 0.0;

        let [Some(first), Some(second)] = self.slots.take() else {
            return None;
        };

        let resolution = if status == SessionStatus::MatchFound {
            self.cards[first.index()].remove();
            self.cards[second.index()].remove();
            self.matched_pairs += 1;

            let pair_key = self.cards[first.index()].pair_key();
            info!(
                pair = %pair_key,
                matched = self.matched_pairs,
                total = self.total_pairs(),
                "pair cleared"
            );
            Resolution::Cleared { first, second, pair_key }
        } else {
            self.cards[first.index()].state_mut().request_flip_to_face_down();
            self.cards[second.index()].state_mut().request_flip_to_face_down();
            debug!(first = %first, second = %second, "pair turned back");
            Resolution::TurnedBack { first, second }
        };

        if self.is_complete() {
            info!(pairs = self.matched_pairs, "all pairs cleared");
        }

        Some(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{PairKey, StaticCatalog};
    use crate::core::error::{InsufficientAssetsError, SetupError};

    fn session(rows: usize, columns: usize) -> GameSession {
        let config = SessionConfig::new(rows, columns)
            .with_turn_duration(0.5)
            .with_timeout_target(1.0)
            .with_seed(42);
        GameSession::new(&config, &StaticCatalog::numbered(20, 3)).unwrap()
    }

    /// Two cards sharing a pair key, plus one card from a different pair.
    fn pick(session: &GameSession) -> (CardId, CardId, CardId) {
        let first = session.cards()[0].clone();
        let partner = session
            .cards()
            .iter()
            .find(|c| c.matches(&first))
            .unwrap()
            .id();
        let other = session
            .cards()
            .iter()
            .find(|c| c.pair_key() != first.pair_key())
            .unwrap()
            .id();
        (first.id(), partner, other)
    }

    fn run_ticks(session: &mut GameSession, ticks: usize, delta_time: f32) {
        for _ in 0..ticks {
            session.on_tick(delta_time);
        }
    }

    #[test]
    fn test_setup() {
        let s = session(4, 4);
        assert_eq!(s.cards().len(), 16);
        assert_eq!(s.grid().len(), 16);
        assert_eq!(s.total_pairs(), 8);
        assert_eq!(s.status(), SessionStatus::AwaitingFirstSelection);
        assert!(s.slots().is_empty());
        assert!(s.cards().iter().all(|c| c.phase() == CardPhase::FaceDown));
        assert_eq!(s.seed(), 42);
    }

    #[test]
    fn test_positions_follow_cells() {
        let s = session(2, 3);
        for card in s.cards() {
            assert_eq!(s.grid().cell_of(card.id()), Some(card.cell()));
            assert_eq!(
                card.position(),
                s.layout().position_of(card.cell(), crate::core::Vec2::ONE)
            );
        }
    }

    #[test]
    fn test_odd_grid_rejected() {
        let config = SessionConfig::new(3, 3).with_seed(1);
        let err = GameSession::new(&config, &StaticCatalog::numbered(20, 1)).unwrap_err();
        assert_eq!(
            err,
            SetupError::Configuration(ConfigurationError::OddCellCount { rows: 3, columns: 3 })
        );
    }

    #[test]
    fn test_not_enough_fronts() {
        let config = SessionConfig::new(4, 4).with_seed(1);
        let err = GameSession::new(&config, &StaticCatalog::numbered(7, 1)).unwrap_err();
        assert_eq!(
            err,
            SetupError::InsufficientAssets(InsufficientAssetsError::TooFewFrontImages {
                required: 8,
                available: 7,
            })
        );
    }

    #[test]
    fn test_first_selection() {
        let mut s = session(2, 2);
        let (a1, _, _) = pick(&s);

        assert_eq!(s.on_card_tapped(a1), TapOutcome::FirstSelected);
        assert_eq!(s.status(), SessionStatus::AwaitingSecondSelection);
        assert_eq!(s.slots().first(), Some(a1));
        assert_eq!(s.card(a1).unwrap().phase(), CardPhase::TurningToFaceUp);
    }

    #[test]
    fn test_retap_first_is_ignored() {
        let mut s = session(2, 2);
        let (a1, _, _) = pick(&s);
        s.on_card_tapped(a1);
        run_ticks(&mut s, 2, 0.25);

        assert_eq!(
            s.on_card_tapped(a1),
            TapOutcome::Ignored(IgnoreReason::AlreadySelected)
        );
        assert_eq!(s.status(), SessionStatus::AwaitingSecondSelection);
        assert_eq!(s.card(a1).unwrap().phase(), CardPhase::FaceUp);
    }

    #[test]
    fn test_match_found() {
        let mut s = session(2, 2);
        let (a1, a2, _) = pick(&s);
        s.on_card_tapped(a1);

        assert_eq!(s.on_card_tapped(a2), TapOutcome::SecondSelected { matched: true });
        assert_eq!(s.status(), SessionStatus::MatchFound);
        assert_eq!(s.timeout_elapsed(), Some(0.0));
    }

    #[test]
    fn test_no_match_found() {
        let mut s = session(2, 2);
        let (a1, _, b1) = pick(&s);
        s.on_card_tapped(a1);

        assert_eq!(s.on_card_tapped(b1), TapOutcome::SecondSelected { matched: false });
        assert_eq!(s.status(), SessionStatus::NoMatchFound);
    }

    #[test]
    fn test_taps_ignored_while_resolving() {
        let mut s = session(2, 2);
        let (a1, a2, b1) = pick(&s);
        s.on_card_tapped(a1);
        s.on_card_tapped(a2);

        assert_eq!(s.on_card_tapped(b1), TapOutcome::Ignored(IgnoreReason::Resolving));
        assert_eq!(s.card(b1).unwrap().phase(), CardPhase::FaceDown);
        assert!(!s.allowed_to_select(b1));
    }

    #[test]
    fn test_unknown_card_ignored() {
        let mut s = session(2, 2);
        assert_eq!(
            s.on_card_tapped(CardId::new(99)),
            TapOutcome::Ignored(IgnoreReason::UnknownCard)
        );
        assert_eq!(s.status(), SessionStatus::AwaitingFirstSelection);
    }

    #[test]
    fn test_match_clears_after_timeout() {
        let mut s = session(2, 2);
        let (a1, a2, _) = pick(&s);
        s.on_card_tapped(a1);
        s.on_card_tapped(a2);

        run_ticks(&mut s, 3, 0.25);
        assert_eq!(s.status(), SessionStatus::MatchFound);

        let report = s.on_tick(0.25);
        assert_eq!(
            report.resolution,
            Some(Resolution::Cleared {
                first: a1,
                second: a2,
                pair_key: s.card(a1).unwrap().pair_key(),
            })
        );
        assert_eq!(s.status(), SessionStatus::AwaitingFirstSelection);
        assert!(s.slots().is_empty());
        assert!(s.card(a1).unwrap().is_removed());
        assert!(s.card(a2).unwrap().is_removed());
        assert_eq!(s.matched_pairs(), 1);
        assert_eq!(s.remaining_pairs(), 1);
        assert!(!s.is_complete());
    }

    #[test]
    fn test_removed_card_ignored() {
        let mut s = session(2, 2);
        let (a1, a2, _) = pick(&s);
        s.on_card_tapped(a1);
        s.on_card_tapped(a2);
        s.on_tick(2.0);

        assert_eq!(s.on_card_tapped(a1), TapOutcome::Ignored(IgnoreReason::Removed));
    }

    #[test]
    fn test_mismatch_turns_back() {
        let mut s = session(2, 2);
        let (a1, _, b1) = pick(&s);
        s.on_card_tapped(a1);
        s.on_card_tapped(b1);

        let report = s.on_tick(1.0);
        assert_eq!(report.resolution, Some(Resolution::TurnedBack { first: a1, second: b1 }));
        assert_eq!(s.status(), SessionStatus::AwaitingFirstSelection);
        assert_eq!(s.card(a1).unwrap().phase(), CardPhase::TurningToFaceDown);

        s.on_tick(0.5);
        for id in [a1, b1] {
            let card = s.card(id).unwrap();
            assert_eq!(card.phase(), CardPhase::FaceDown);
            assert!(!card.is_removed());
        }
        assert!(s.slots().is_empty());
    }

    #[test]
    fn test_turning_card_cannot_be_picked() {
        let mut s = session(2, 2);
        let (a1, _, b1) = pick(&s);
        s.on_card_tapped(a1);
        s.on_card_tapped(b1);
        s.on_tick(1.0);

        // a1 is now turning face down
        assert_eq!(s.on_card_tapped(a1), TapOutcome::Ignored(IgnoreReason::NotFaceDown));
        assert_eq!(s.status(), SessionStatus::AwaitingFirstSelection);
    }

    #[test]
    fn test_resolution_waits_for_flips() {
        let config = SessionConfig::new(2, 2)
            .with_turn_duration(2.0)
            .with_timeout_target(0.5)
            .with_seed(3);
        let mut s = GameSession::new(&config, &StaticCatalog::numbered(2, 1)).unwrap();
        let (a1, _, b1) = pick(&s);
        s.on_card_tapped(a1);
        s.on_card_tapped(b1);

        assert!(s.on_tick(1.0).resolution.is_none());
        assert_eq!(s.status(), SessionStatus::NoMatchFound);

        let report = s.on_tick(1.0);
        assert!(report.resolution.is_some());
        assert_eq!(s.card(b1).unwrap().phase(), CardPhase::TurningToFaceDown);
    }

    #[test]
    fn test_match_clears_while_still_turning() {
        let config = SessionConfig::new(2, 2)
            .with_turn_duration(2.0)
            .with_timeout_target(0.5)
            .with_seed(3);
        let mut s = GameSession::new(&config, &StaticCatalog::numbered(2, 1)).unwrap();
        let (a1, a2, _) = pick(&s);
        s.on_card_tapped(a1);
        s.on_card_tapped(a2);

        assert!(s.on_tick(0.25).resolution.is_none());
        let report = s.on_tick(0.25);
        assert!(matches!(report.resolution, Some(Resolution::Cleared { .. })));
        assert_eq!(s.status(), SessionStatus::AwaitingFirstSelection);
        assert!(s.card(a1).unwrap().is_removed());
        assert!(s.card(a2).unwrap().is_removed());
        assert_eq!(s.matched_pairs(), 1);
    }

    #[test]
    fn test_zero_timeout_resolves_on_first_settled_tick() {
        let config = SessionConfig::new(2, 2)
            .with_turn_duration(0.5)
            .with_timeout_target(0.0)
            .with_seed(3);
        let mut s = GameSession::new(&config, &StaticCatalog::numbered(2, 1)).unwrap();
        let (a1, a2, _) = pick(&s);
        s.on_card_tapped(a1);
        s.on_card_tapped(a2);

        let report = s.on_tick(0.5);
        assert_eq!(report.settled.len(), 2);
        assert!(matches!(report.resolution, Some(Resolution::Cleared { .. })));
    }

    #[test]
    fn test_malformed_tick_dropped() {
        let mut s = session(2, 2);
        let (a1, _, _) = pick(&s);
        s.on_card_tapped(a1);

        assert!(s.on_tick(-1.0).is_quiet());
        assert!(s.on_tick(f32::NAN).is_quiet());
        assert_eq!(s.card(a1).unwrap().state().progress(), 0.0);
    }

    #[test]
    fn test_play_to_completion() {
        let mut s = session(2, 4);
        while !s.is_complete() {
            let next = s.cards().iter().find(|c| !c.is_removed()).unwrap().clone();
            let partner = s.cards().iter().find(|c| c.matches(&next)).unwrap().id();
            s.on_card_tapped(next.id());
            s.on_card_tapped(partner);
            s.on_tick(1.0);
        }

        assert_eq!(s.matched_pairs(), 4);
        assert_eq!(s.remaining_pairs(), 0);
        assert_eq!(s.status(), SessionStatus::AwaitingFirstSelection);
    }

    #[test]
    fn test_pair_keys_from_catalog() {
        let s = session(2, 2);
        let keys: Vec<PairKey> = s.cards().iter().map(Card::pair_key).collect();
        assert!(keys.iter().all(|k| k.image().raw() < 20));
    }
}
