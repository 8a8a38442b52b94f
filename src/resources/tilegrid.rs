//! The level grid: the single source of truth for what the level contains.

use bevy_ecs::prelude::Resource;

use crate::error::GridError;
use crate::resources::selection::TileIndex;

/// Raw value written for an empty cell in level files.
pub const EMPTY_CELL: i32 = -1;

/// Fixed-size grid of optional tile indices, stored row by row.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tile_count: u32,
    cells: Vec<Option<TileIndex>>,
}

impl TileGrid {
    /// All-empty grid. `tile_count` bounds the indices that may be painted.
    pub fn new(width: u32, height: u32, tile_count: u32) -> Self {
        Self {
            width,
            height,
            tile_count,
            cells: vec![None; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn tile_count(&self) -> u32 {
        self.tile_count
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    fn offset(&self, x: u32, y: u32) -> Result<usize, GridError> {
        if !self.contains(x, y) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y * self.width + x) as usize)
    }

    /// Tile at `(x, y)`; `None` for empty or out-of-bounds cells.
    pub fn get(&self, x: u32, y: u32) -> Option<TileIndex> {
        self.offset(x, y).ok().and_then(|i| self.cells[i])
    }

    /// Level-file value of `(x, y)`: the tile index, or [`EMPTY_CELL`].
    pub fn raw(&self, x: u32, y: u32) -> i32 {
        self.get(x, y)
            .map_or(EMPTY_CELL, |index| index.get() as i32)
    }

    /// Place `index` at `(x, y)`.
    pub fn paint(&mut self, x: u32, y: u32, index: TileIndex) -> Result<(), GridError> {
        if index.get() >= self.tile_count {
            return Err(GridError::TileOutOfRange {
                index: index.get(),
                tile_count: self.tile_count,
            });
        }
        let i = self.offset(x, y)?;
        self.cells[i] = Some(index);
        Ok(())
    }

    /// Empty the cell at `(x, y)`.
    pub fn erase(&mut self, x: u32, y: u32) -> Result<(), GridError> {
        let i = self.offset(x, y)?;
        self.cells[i] = None;
        Ok(())
    }

    /// Replace every cell at once. `cells` must be row-major and exactly
    /// `width * height` long; indices are assumed already validated.
    pub(crate) fn replace_cells(&mut self, cells: Vec<Option<TileIndex>>) {
        debug_assert_eq!(cells.len(), self.cells.len());
        self.cells = cells;
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<TileIndex>]> {
        self.cells.chunks(self.width as usize)
    }

    /// Number of non-empty cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = TileGrid::new(15, 10, 147);
        assert_eq!(grid.filled(), 0);
        assert_eq!(grid.raw(0, 0), EMPTY_CELL);
        assert_eq!(grid.raw(14, 9), EMPTY_CELL);
        assert_eq!(grid.rows().count(), 10);
    }

    #[test]
    fn test_paint_then_get() {
        let mut grid = TileGrid::new(15, 10, 147);
        grid.paint(3, 7, TileIndex(45)).unwrap();
        assert_eq!(grid.get(3, 7), Some(TileIndex(45)));
        assert_eq!(grid.raw(3, 7), 45);
        assert_eq!(grid.get(7, 3), None);
    }

    #[test]
    fn test_erase_then_get() {
        let mut grid = TileGrid::new(15, 10, 147);
        grid.paint(0, 0, TileIndex(1)).unwrap();
        grid.erase(0, 0).unwrap();
        assert_eq!(grid.get(0, 0), None);
        assert_eq!(grid.raw(0, 0), -1);
        // Erasing an empty cell is fine.
        grid.erase(0, 0).unwrap();
    }

    #[test]
    fn test_every_cell_paints_independently() {
        let mut grid = TileGrid::new(4, 3, 147);
        for y in 0..3 {
            for x in 0..4 {
                grid.paint(x, y, TileIndex(y * 4 + x)).unwrap();
            }
        }
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(grid.raw(x, y), (y * 4 + x) as i32);
            }
        }
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut grid = TileGrid::new(15, 10, 147);
        assert_eq!(
            grid.paint(15, 0, TileIndex(0)),
            Err(GridError::OutOfBounds {
                x: 15,
                y: 0,
                width: 15,
                height: 10
            })
        );
        assert!(grid.erase(0, 10).is_err());
        assert_eq!(grid.get(100, 100), None);
        assert_eq!(grid.filled(), 0);
    }

    #[test]
    fn test_index_outside_catalog_is_rejected() {
        let mut grid = TileGrid::new(15, 10, 147);
        assert_eq!(
            grid.paint(0, 0, TileIndex(147)),
            Err(GridError::TileOutOfRange {
                index: 147,
                tile_count: 147
            })
        );
        assert_eq!(grid.get(0, 0), None);
    }
}
