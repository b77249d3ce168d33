//! Session configuration.
//!
//! A session is configured once, before any card exists:
//! - grid size (`rows` × `columns`, must be even)
//! - flip animation length and the pause before a pair resolves
//! - table geometry (anchor and spacing between cards)
//! - an optional seed for reproducible deals
//!
//! Validation happens up front so that no asset work is done for a table
//! that could never be dealt.

use serde::{Deserialize, Serialize};

use super::error::ConfigurationError;
use super::geometry::Vec2;

/// Length of a card flip in seconds.
///
/// Only constructible from a strictly positive, finite value, so per-tick
/// code can divide by it without re-checking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnDuration(f32);

impl TurnDuration {
    /// Validate a flip duration.
    pub fn new(seconds: f32) -> Result<Self, ConfigurationError> {
        if seconds.is_finite() && seconds > 0.0 {
            Ok(Self(seconds))
        } else {
            Err(ConfigurationError::NonPositiveTurnDuration(seconds))
        }
    }

    /// Duration in seconds.
    #[must_use]
    pub const fn seconds(self) -> f32 {
        self.0
    }
}

/// Complete configuration for one play session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of grid rows.
    pub rows: usize,

    /// Number of grid columns.
    pub columns: usize,

    /// Seconds a card takes to turn over.
    pub turn_duration: f32,

    /// Seconds to wait after the second pick before the pair is cleared or
    /// turned back.
    pub timeout_target: f32,

    /// World position of cell (0, 0).
    pub anchor: Vec2,

    /// Horizontal gap between neighbouring cards.
    pub offset_x: f32,

    /// Vertical gap between neighbouring cards.
    pub offset_y: f32,

    /// Seed for the deal. `None` draws a fresh seed per session.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            columns: 4,
            turn_duration: 0.5,
            timeout_target: 1.0,
            anchor: Vec2::ZERO,
            offset_x: 0.1,
            offset_y: 0.1,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Create a config for a `rows` × `columns` table with default timings.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    /// Set the flip duration.
    #[must_use]
    pub fn with_turn_duration(mut self, seconds: f32) -> Self {
        self.turn_duration = seconds;
        self
    }

    /// Set the pause before a picked pair resolves.
    #[must_use]
    pub fn with_timeout_target(mut self, seconds: f32) -> Self {
        self.timeout_target = seconds;
        self
    }

    /// Set the world position of the first cell.
    #[must_use]
    pub fn with_anchor(mut self, anchor: Vec2) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the gaps between cards.
    #[must_use]
    pub fn with_spacing(mut self, offset_x: f32, offset_y: f32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// Fix the deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of cells on the table, `None` if it overflows.
    #[must_use]
    pub fn cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    /// Number of pairs the table holds, if the grid can be tiled with pairs.
    pub fn pair_count(&self) -> Result<usize, ConfigurationError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigurationError::EmptyGrid {
                rows: self.rows,
                columns: self.columns,
            });
        }
        let cells = self.cell_count().ok_or(ConfigurationError::GridTooLarge {
            rows: self.rows,
            columns: self.columns,
        })?;
        if cells % 2 != 0 {
            return Err(ConfigurationError::OddCellCount {
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(cells / 2)
    }

    /// Validated flip duration.
    pub fn turn_duration(&self) -> Result<TurnDuration, ConfigurationError> {
        TurnDuration::new(self.turn_duration)
    }

    /// Check every option, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.pair_count()?;
        self.turn_duration()?;

        if !self.timeout_target.is_finite() || self.timeout_target < 0.0 {
            return Err(ConfigurationError::InvalidTimeout(self.timeout_target));
        }
        if !self.anchor.is_finite() || !self.offset_x.is_finite() || !self.offset_y.is_finite() {
            return Err(ConfigurationError::NonFiniteSpacing);
        }

        Ok(())
    }
}
