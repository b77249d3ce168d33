//! Setup error types.
//!
//! Only table setup can fail. Once a session exists, every input is either
//! acted on or ignored, so nothing here is reachable from steady-state play.

use thiserror::Error;

use super::entity::CardId;

/// Result type alias for session setup.
pub type SetupResult<T> = std::result::Result<T, SetupError>;

/// The requested table cannot be built as configured.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("grid must have at least one row and one column, got {rows}x{columns}")]
    EmptyGrid { rows: usize, columns: usize },

    #[error("cannot deal pairs onto an odd number of cells ({rows}x{columns})")]
    OddCellCount { rows: usize, columns: usize },

    #[error("grid of {rows}x{columns} cells is too large")]
    GridTooLarge { rows: usize, columns: usize },

    #[error("a deck needs at least one pair")]
    NoPairs,

    #[error("{cards} cards cannot fill a grid of {cells} cells")]
    CardCountMismatch { cards: usize, cells: usize },

    #[error("{0} appears more than once in the cards to place")]
    DuplicateCard(CardId),

    #[error("turn duration must be a positive number of seconds, got {0}")]
    NonPositiveTurnDuration(f32),

    #[error("timeout target must be a non-negative number of seconds, got {0}")]
    InvalidTimeout(f32),

    #[error("card spacing and anchor must be finite")]
    NonFiniteSpacing,
}

/// The asset catalog cannot supply the images the table needs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InsufficientAssetsError {
    #[error("too few front images to make {required} pairs ({available} distinct available)")]
    TooFewFrontImages { required: usize, available: usize },

    #[error("no back images to choose from")]
    NoBackImages,
}

/// Any failure while constructing a session.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SetupError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("insufficient assets: {0}")]
    InsufficientAssets(#[from] InsufficientAssetsError),
}
