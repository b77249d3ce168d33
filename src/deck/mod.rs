//! Deck construction: choosing images and dealing pairs.

pub mod builder;

pub use builder::{Deck, DeckBuilder, PendingCard};
