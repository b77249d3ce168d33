//! Core types: card IDs, RNG, configuration, errors, geometry.
//!
//! These are the building blocks every other module leans on. Nothing here
//! knows about turns or selections.

pub mod entity;
pub mod rng;
pub mod config;
pub mod error;
pub mod geometry;

pub use entity::CardId;
pub use rng::GameRng;
pub use config::{SessionConfig, TurnDuration};
pub use error::{ConfigurationError, InsufficientAssetsError, SetupError, SetupResult};
pub use geometry::{Orientation, Vec2};
