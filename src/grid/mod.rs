//! Grid placement: which cell each card occupies and where that is.

pub mod layout;

pub use layout::{Cell, Grid, GridLayout};
