//! The play session: turn state machine, selection slots and event dispatch.
//!
//! ## Key Types
//!
//! - `GameSession`: Owns the table and drives turns
//! - `SessionStatus`: Where the current turn stands
//! - `SelectionSlots`: The (at most) two cards picked this turn
//! - `SessionEvent` / `EventQueue`: Taps and ticks from the platform layer
//! - `SessionSnapshot`: Serializable view for the renderer

pub mod slots;
pub mod game;
pub mod event;
pub mod snapshot;

pub use slots::SelectionSlots;
pub use game::{GameSession, SessionStatus};
pub use event::{
    EventQueue, IgnoreReason, Resolution, SessionEvent, SessionUpdate, TapOutcome, TickReport,
};
pub use snapshot::{CardView, SessionSnapshot};
