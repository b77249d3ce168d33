//! Cards: images, pair keys, the flip state machine and the card entity.
//!
//! ## Key Types
//!
//! - `ImageRef` / `ImageId`: Opaque references to front and back images
//! - `PairKey`: What two matching cards share (the front image ID)
//! - `CardState` / `CardPhase`: Per-card flip state machine
//! - `Card`: A card on the table with its immutable placement
//! - `AssetCatalog`: Where images come from (implemented by the platform)

pub mod image;
pub mod catalog;
pub mod state;
pub mod instance;

pub use image::{ImageId, ImageRef, PairKey};
pub use catalog::{AssetCatalog, StaticCatalog};
pub use state::{CardPhase, CardState};
pub use instance::{Card, Placement};
