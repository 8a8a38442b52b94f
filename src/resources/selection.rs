//! Tile addressing and the currently held tile.
//!
//! A [`TileCoord`] addresses a tile by (row, column) in the catalog; a
//! [`TileIndex`] is the flat `row * columns + column` form stored in the grid
//! and in level files. [`CursorSelector`] is the resource tracking which tile
//! the user is holding.

use bevy_ecs::prelude::Resource;

/// Position of a tile inside the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub row: u32,
    pub column: u32,
}

impl TileCoord {
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

/// Flat tile index: `row * columns + column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileIndex(pub u32);

impl TileIndex {
    /// Encode a catalog coordinate for a catalog `columns` wide.
    pub fn encode(coord: TileCoord, columns: u32) -> Self {
        TileIndex(coord.row * columns + coord.column)
    }

    /// Decode into a catalog coordinate for a catalog `columns` wide.
    pub fn decode(self, columns: u32) -> TileCoord {
        TileCoord {
            row: self.0 / columns,
            column: self.0 % columns,
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// The tile currently held by the user.
///
/// [`advance`](Self::advance) walks down a catalog column and then moves to the
/// next column, wrapping at both ends; [`retreat`](Self::retreat) is its exact
/// inverse.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct CursorSelector {
    rows: u32,
    columns: u32,
    current: TileCoord,
}

impl CursorSelector {
    /// Selector over a `rows` x `columns` catalog, starting at (0, 0).
    pub fn new(rows: u32, columns: u32) -> Self {
        Self {
            rows,
            columns,
            current: TileCoord::new(0, 0),
        }
    }

    /// Selector starting at `coord`, clamped into the catalog.
    pub fn with_selection(rows: u32, columns: u32, coord: TileCoord) -> Self {
        Self {
            rows,
            columns,
            current: TileCoord::new(
                coord.row.min(rows.saturating_sub(1)),
                coord.column.min(columns.saturating_sub(1)),
            ),
        }
    }

    pub fn current(&self) -> TileCoord {
        self.current
    }

    /// Flat index of the held tile.
    pub fn index(&self) -> TileIndex {
        TileIndex::encode(self.current, self.columns)
    }

    /// Move one tile forward: next row, then next column, wrapping to (0, 0).
    pub fn advance(&mut self) {
        self.current.row += 1;
        if self.current.row >= self.rows {
            self.current.row = 0;
            self.current.column += 1;
            if self.current.column >= self.columns {
                self.current.column = 0;
            }
        }
    }

    /// Move one tile backward: previous row, then previous column.
    ///
    /// Row 0 and column 0 are reachable; retreating from (0, 0) lands on the
    /// last tile `(rows - 1, columns - 1)`.
    pub fn retreat(&mut self) {
        if self.current.row > 0 {
            self.current.row -= 1;
            return;
        }
        self.current.row = self.rows.saturating_sub(1);
        if self.current.column > 0 {
            self.current.column -= 1;
        } else {
            self.current.column = self.columns.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_encode_decode() {
        let index = TileIndex::encode(TileCoord::new(2, 3), 21);
        assert_eq!(index, TileIndex(45));
        assert_eq!(index.decode(21), TileCoord::new(2, 3));
    }

    #[test]
    fn test_every_index_decodes_back() {
        for i in 0..7 * 21 {
            let coord = TileIndex(i).decode(21);
            assert_eq!(coord.row, i / 21);
            assert_eq!(coord.column, i % 21);
            assert_eq!(TileIndex::encode(coord, 21), TileIndex(i));
        }
    }

    #[test]
    fn test_advance_walks_rows_then_columns() {
        let mut selector = CursorSelector::new(7, 21);
        selector.advance();
        assert_eq!(selector.current(), TileCoord::new(1, 0));
        for _ in 0..5 {
            selector.advance();
        }
        assert_eq!(selector.current(), TileCoord::new(6, 0));
        selector.advance();
        assert_eq!(selector.current(), TileCoord::new(0, 1));
    }

    #[test]
    fn test_advance_wraps_from_last_tile() {
        let mut selector = CursorSelector::with_selection(7, 21, TileCoord::new(6, 20));
        selector.advance();
        assert_eq!(selector.current(), TileCoord::new(0, 0));
    }

    #[test]
    fn test_retreat_from_origin_wraps_to_last_tile() {
        let mut selector = CursorSelector::new(7, 21);
        selector.retreat();
        assert_eq!(selector.current(), TileCoord::new(6, 20));
    }

    #[test]
    fn test_retreat_visits_row_zero() {
        let mut selector = CursorSelector::with_selection(7, 21, TileCoord::new(1, 4));
        selector.retreat();
        assert_eq!(selector.current(), TileCoord::new(0, 4));
        selector.retreat();
        assert_eq!(selector.current(), TileCoord::new(6, 3));
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let start = TileCoord::new(3, 11);
        let mut selector = CursorSelector::with_selection(7, 21, start);
        for _ in 0..7 * 21 {
            selector.advance();
        }
        assert_eq!(selector.current(), start);
        for _ in 0..7 * 21 {
            selector.retreat();
        }
        assert_eq!(selector.current(), start);
    }

    #[test]
    fn test_retreat_undoes_advance() {
        let mut selector = CursorSelector::new(7, 21);
        for _ in 0..40 {
            let before = selector.current();
            selector.advance();
            selector.retreat();
            assert_eq!(selector.current(), before);
            selector.advance();
        }
    }

    #[test]
    fn test_with_selection_clamps() {
        let selector = CursorSelector::with_selection(7, 21, TileCoord::new(9, 30));
        assert_eq!(selector.current(), TileCoord::new(6, 20));
        assert_eq!(selector.index(), TileIndex(146));
    }
}
