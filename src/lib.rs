//! # memory-match
//!
//! State machines for a pair-matching memory card game.
//!
//! A rectangular grid of face-down cards hides pairs of images. The player
//! turns two cards over per turn; matching pairs are cleared, mismatches
//! are turned back after a short pause, and play continues until the table
//! is empty.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No drawing, asset loading or input capture. The
//!    platform layer feeds in taps and clock ticks and reads back card
//!    positions and orientations.
//!
//! 2. **Event-Driven**: Every change happens synchronously inside
//!    `GameSession::on_card_tapped` or `GameSession::on_tick`. Animations
//!    and the post-turn pause simply wait for enough accumulated tick time.
//!
//! 3. **Fail at Setup Only**: Bad configuration or missing images abort
//!    session construction. Afterwards, out-of-turn input is ignored.
//!
//! 4. **Reproducible Deals**: A seeded `GameRng` makes deck choice and
//!    placement repeatable.
//!
//! ## Modules
//!
//! - `core`: Card IDs, RNG, configuration, errors, geometry
//! - `cards`: Images, pair keys, card flip state machine, asset catalog seam
//! - `deck`: Choosing images and dealing pairs
//! - `grid`: Random placement and world positions
//! - `session`: Turn state machine, selection slots, event dispatch
//!
//! ## Example
//!
//! ```
//! use memory_match::{GameSession, SessionConfig, SessionStatus, StaticCatalog, TapOutcome};
//!
//! let config = SessionConfig::new(2, 2).with_seed(42);
//! let catalog = StaticCatalog::numbered(2, 1);
//! let mut session = GameSession::new(&config, &catalog).unwrap();
//!
//! let first = session.cards()[0].id();
//! assert_eq!(session.on_card_tapped(first), TapOutcome::FirstSelected);
//! assert_eq!(session.status(), SessionStatus::AwaitingSecondSelection);
//! ```

pub mod core;
pub mod cards;
pub mod deck;
pub mod grid;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    CardId, GameRng,
    SessionConfig, TurnDuration,
    ConfigurationError, InsufficientAssetsError, SetupError, SetupResult,
    Orientation, Vec2,
};

pub use crate::cards::{
    AssetCatalog, StaticCatalog,
    Card, CardPhase, CardState, Placement,
    ImageId, ImageRef, PairKey,
};

pub use crate::deck::{Deck, DeckBuilder, PendingCard};

pub use crate::grid::{Cell, Grid, GridLayout};

pub use crate::session::{
    GameSession, SessionStatus, SelectionSlots,
    SessionEvent, SessionUpdate, EventQueue,
    TapOutcome, IgnoreReason, TickReport, Resolution,
    SessionSnapshot, CardView,
};
