//! Deck construction.
//!
//! Picks distinct front images for the requested number of pairs, one shared
//! back image, and deals two cards per front.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::cards::{ImageRef, PairKey};
use crate::core::entity::CardId;
use crate::core::error::{ConfigurationError, InsufficientAssetsError, SetupResult};
use crate::core::rng::GameRng;

/// A card identity waiting to be placed on the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingCard {
    pub id: CardId,
    pub pair_key: PairKey,
    pub front: ImageRef,
    pub back: ImageRef,
}

/// The cards for one session, before placement.
///
/// Every pair key appears on exactly two cards. Card order carries no
/// meaning; placement randomizes positions independently.
#[derive(Clone, Debug)]
pub struct Deck {
    back: ImageRef,
    fronts: Vec<ImageRef>,
    cards: Vec<PendingCard>,
}

impl Deck {
    /// The back image shared by every card.
    #[must_use]
    pub fn back(&self) -> &ImageRef {
        &self.back
    }

    /// The chosen front images, one per pair.
    #[must_use]
    pub fn fronts(&self) -> &[ImageRef] {
        &self.fronts
    }

    #[must_use]
    pub fn cards(&self) -> &[PendingCard] {
        &self.cards
    }

    #[must_use]
    pub fn into_cards(self) -> Vec<PendingCard> {
        self.cards
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.fronts.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Builds decks from image pools.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{AssetCatalog, StaticCatalog};
/// use memory_match::core::GameRng;
/// use memory_match::deck::DeckBuilder;
///
/// let catalog = StaticCatalog::numbered(10, 3);
/// let mut rng = GameRng::new(42);
///
/// let deck = DeckBuilder::build(4, &catalog.front_images(), &catalog.back_images(), &mut rng)
///     .unwrap();
///
/// assert_eq!(deck.len(), 8);
/// assert_eq!(deck.pair_count(), 4);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DeckBuilder;

impl DeckBuilder {
    /// Build a deck of `pair_count` pairs.
    ///
    /// Fronts are drawn uniformly without replacement from the distinct
    /// images in `front_pool` (repeated IDs count once). One back is drawn
    /// uniformly from `back_pool` and shared by all cards.
    pub fn build(
        pair_count: usize,
        front_pool: &[ImageRef],
        back_pool: &[ImageRef],
        rng: &mut GameRng,
    ) -> SetupResult<Deck> {
        if pair_count == 0 {
            return Err(ConfigurationError::NoPairs.into());
        }

        let mut seen = FxHashSet::default();
        let distinct: Vec<&ImageRef> = front_pool
            .iter()
            .filter(|image| seen.insert(image.id))
            .collect();

        let too_few = InsufficientAssetsError::TooFewFrontImages {
            required: pair_count,
            available: distinct.len(),
        };
        if distinct.len() < pair_count {
            return Err(too_few.into());
        }
        if back_pool.is_empty() {
            return Err(InsufficientAssetsError::NoBackImages.into());
        }

        let picks = rng
            .sample_indices(distinct.len(), pair_count)
            .ok_or(too_few)?;
        let fronts: Vec<ImageRef> = picks.into_iter().map(|i| distinct[i].clone()).collect();
        let back = rng
            .choose(back_pool)
            .cloned()
            .ok_or(InsufficientAssetsError::NoBackImages)?;

        debug!(pairs = pair_count, back = %back, "selected deck images");

        let mut cards = Vec::with_capacity(pair_count * 2);
        for front in &fronts {
            for _ in 0..2 {
                cards.push(PendingCard {
                    id: CardId::new(cards.len() as u32),
                    pair_key: PairKey::of(front),
                    front: front.clone(),
                    back: back.clone(),
                });
            }
        }

        Ok(Deck { back, fronts, cards })
    }
}
