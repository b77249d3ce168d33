//! Grid placement and world positions.
//!
//! Placement is a uniformly random bijection between cards and cells,
//! built by shuffling the cell indices and dealing cards onto them in
//! order. Positions are a pure function of the cell and the layout.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::config::SessionConfig;
use crate::core::entity::CardId;
use crate::core::error::ConfigurationError;
use crate::core::geometry::Vec2;
use crate::core::rng::GameRng;

/// A grid cell, addressed by row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Grid dimensions and table geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: usize,
    pub columns: usize,
    pub anchor: Vec2,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl GridLayout {
    /// Layout with cards packed edge to edge from the origin.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            anchor: Vec2::ZERO,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Layout described by a session config.
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            rows: config.rows,
            columns: config.columns,
            anchor: config.anchor,
            offset_x: config.offset_x,
            offset_y: config.offset_y,
        }
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: Vec2) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_spacing(mut self, offset_x: f32, offset_y: f32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// Number of cells, `None` if it overflows.
    #[must_use]
    pub fn cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    /// Cell at row-major `index`.
    #[must_use]
    pub fn cell_at_index(&self, index: usize) -> Cell {
        Cell::new(index / self.columns, index % self.columns)
    }

    /// Assign every card to its own random cell.
    ///
    /// Fails when the number of cards differs from the number of cells or
    /// a card is listed twice.
    pub fn place(&self, cards: &[CardId], rng: &mut GameRng) -> Result<Grid, ConfigurationError> {
        let cell_count = self.cell_count().ok_or(ConfigurationError::GridTooLarge {
            rows: self.rows,
            columns: self.columns,
        })?;
        if cards.len() != cell_count {
            return Err(ConfigurationError::CardCountMismatch {
                cards: cards.len(),
                cells: cell_count,
            });
        }
        let mut seen = FxHashSet::default();
        if let Some(&duplicate) = cards.iter().find(|&&card| !seen.insert(card)) {
            return Err(ConfigurationError::DuplicateCard(duplicate));
        }

        let mut order: Vec<usize> = (0..cell_count).collect();
        rng.shuffle(&mut order);

        let mut cells = vec![CardId::new(0); cell_count];
        let mut locations = FxHashMap::default();
        for (&card, &index) in cards.iter().zip(&order) {
            let cell = self.cell_at_index(index);
            debug!(card = %card, cell = %cell, "placed card");
            cells[index] = card;
            locations.insert(card, cell);
        }

        Ok(Grid {
            rows: self.rows,
            columns: self.columns,
            cells,
            locations,
        })
    }

    /// World position of a card with the given footprint at `cell`.
    #[must_use]
    pub fn position_of(&self, cell: Cell, footprint: Vec2) -> Vec2 {
        self.anchor
            + Vec2::new(
                cell.column as f32 * (footprint.x + self.offset_x),
                cell.row as f32 * (footprint.y + self.offset_y),
            )
    }
}

/// A fully populated grid of cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    /// Row-major cell contents.
    cells: Vec<CardId>,
    locations: FxHashMap<CardId, Cell>,
}

impl Grid {
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Card in `cell`, or `None` if the cell is outside the grid.
    #[must_use]
    pub fn card_at(&self, cell: Cell) -> Option<CardId> {
        if cell.row >= self.rows || cell.column >= self.columns {
            return None;
        }
        self.cells.get(cell.row * self.columns + cell.column).copied()
    }

    /// Cell holding `card`.
    #[must_use]
    pub fn cell_of(&self, card: CardId) -> Option<Cell> {
        self.locations.get(&card).copied()
    }

    /// Every `(cell, card)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, CardId)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &card)| (Cell::new(i / columns, i % columns), card))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<CardId> {
        CardId::all(n).collect()
    }

    #[test]
    fn test_place_is_bijection() {
        let layout = GridLayout::new(3, 4);
        let cards = ids(12);
        let grid = layout.place(&cards, &mut GameRng::new(42)).unwrap();

        assert_eq!(grid.len(), 12);
        let mut placed: Vec<_> = grid.cells().map(|(_, card)| card).collect();
        placed.sort();
        assert_eq!(placed, cards);

        for (cell, card) in grid.cells() {
            assert_eq!(grid.cell_of(card), Some(cell));
            assert_eq!(grid.card_at(cell), Some(card));
        }
    }

    #[test]
    fn test_place_count_mismatch() {
        let layout = GridLayout::new(2, 2);
        let err = layout.place(&ids(3), &mut GameRng::new(0)).unwrap_err();
        assert_eq!(err, ConfigurationError::CardCountMismatch { cards: 3, cells: 4 });
    }

    #[test]
    fn test_place_rejects_duplicate_cards() {
        let layout = GridLayout::new(2, 2);
        let cards = [CardId::new(0), CardId::new(1), CardId::new(1), CardId::new(3)];
        let err = layout.place(&cards, &mut GameRng::new(0)).unwrap_err();
        assert_eq!(err, ConfigurationError::DuplicateCard(CardId::new(1)));
    }

    #[test]
    fn test_place_rejects_oversized_grid() {
        let layout = GridLayout::new(usize::MAX, 2);
        assert_eq!(layout.cell_count(), None);
        let err = layout.place(&ids(4), &mut GameRng::new(0)).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::GridTooLarge { rows: usize::MAX, columns: 2 }
        );
    }

    #[test]
    fn test_place_is_random_but_seeded() {
        let layout = GridLayout::new(4, 4);
        let cards = ids(16);

        let a = layout.place(&cards, &mut GameRng::new(1)).unwrap();
        let b = layout.place(&cards, &mut GameRng::new(1)).unwrap();
        let c = layout.place(&cards, &mut GameRng::new(2)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_cells_row_major() {
        let layout = GridLayout::new(2, 3);
        let grid = layout.place(&ids(6), &mut GameRng::new(9)).unwrap();
        let cells: Vec<_> = grid.cells().map(|(cell, _)| cell).collect();

        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[2], Cell::new(0, 2));
        assert_eq!(cells[3], Cell::new(1, 0));
        assert_eq!(cells[5], Cell::new(1, 2));
    }

    #[test]
    fn test_card_at_out_of_bounds() {
        let grid = GridLayout::new(2, 2).place(&ids(4), &mut GameRng::new(0)).unwrap();
        assert!(grid.card_at(Cell::new(2, 0)).is_none());
        assert!(grid.card_at(Cell::new(0, 2)).is_none());
        assert!(grid.cell_of(CardId::new(4)).is_none());
    }

    #[test]
    fn test_position_of() {
        let layout = GridLayout::new(2, 2)
            .with_anchor(Vec2::new(-1.0, 2.0))
            .with_spacing(0.5, 0.25);
        let footprint = Vec2::new(2.0, 3.0);

        assert_eq!(layout.position_of(Cell::new(0, 0), footprint), Vec2::new(-1.0, 2.0));
        assert_eq!(layout.position_of(Cell::new(0, 1), footprint), Vec2::new(1.5, 2.0));
        assert_eq!(layout.position_of(Cell::new(1, 0), footprint), Vec2::new(-1.0, 5.25));
        assert_eq!(layout.position_of(Cell::new(1, 1), footprint), Vec2::new(1.5, 5.25));
    }

    #[test]
    fn test_from_config() {
        let config = SessionConfig::new(3, 2)
            .with_anchor(Vec2::new(1.0, 1.0))
            .with_spacing(0.2, 0.4);
        let layout = GridLayout::from_config(&config);

        assert_eq!(layout.cell_count(), Some(6));
        assert_eq!(layout.anchor, Vec2::new(1.0, 1.0));
        assert_eq!(layout.offset_y, 0.4);
    }
}
