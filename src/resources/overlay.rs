//! Render overlay: drawable mirror of the [`TileGrid`].
//!
//! Each grid cell has one [`OverlaySprite`] that is either empty or bound to a
//! catalog coordinate, placed at the cell's pixel position. The overlay is
//! derived state: every grid change must be followed by a sync of the same
//! cell (or of the whole grid after a load) before the next frame renders.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

use crate::resources::selection::TileCoord;
use crate::resources::tilegrid::TileGrid;

/// One drawable cell of the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlaySprite {
    /// Catalog tile to draw, or `None` for an empty cell.
    pub tile: Option<TileCoord>,
    /// Top-left corner in window pixels.
    pub position: Vector2,
}

#[derive(Resource, Debug, Clone)]
pub struct RenderOverlay {
    width: u32,
    height: u32,
    tile_size: u32,
    catalog_columns: u32,
    sprites: Vec<OverlaySprite>,
}

impl RenderOverlay {
    /// Empty overlay for a `width` x `height` grid.
    pub fn new(width: u32, height: u32, tile_size: u32, catalog_columns: u32) -> Self {
        let size = tile_size as f32;
        let sprites = (0..height)
            .flat_map(|y| {
                (0..width).map(move |x| OverlaySprite {
                    tile: None,
                    position: Vector2 {
                        x: x as f32 * size,
                        y: y as f32 * size,
                    },
                })
            })
            .collect();
        Self {
            width,
            height,
            tile_size,
            catalog_columns,
            sprites,
        }
    }

    /// Empty overlay sized to match `grid`.
    pub fn for_grid(grid: &TileGrid, tile_size: u32, catalog_columns: u32) -> Self {
        Self::new(grid.width(), grid.height(), tile_size, catalog_columns)
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&OverlaySprite> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.sprites.get((y * self.width + x) as usize)
    }

    /// Copy the grid value at `(x, y)` into the matching sprite.
    ///
    /// Out-of-bounds coordinates are ignored.
    pub fn sync_cell(&mut self, grid: &TileGrid, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let tile = grid
            .get(x, y)
            .map(|index| index.decode(self.catalog_columns));
        let size = self.tile_size as f32;
        self.sprites[(y * self.width + x) as usize] = OverlaySprite {
            tile,
            position: Vector2 {
                x: x as f32 * size,
                y: y as f32 * size,
            },
        };
    }

    /// Rebuild every sprite from `grid`.
    pub fn sync_all(&mut self, grid: &TileGrid) {
        for y in 0..self.height {
            for x in 0..self.width {
                self.sync_cell(grid, x, y);
            }
        }
    }

    /// Non-empty sprites in draw order.
    pub fn visible(&self) -> impl Iterator<Item = (TileCoord, Vector2)> + '_ {
        self.sprites
            .iter()
            .filter_map(|s| s.tile.map(|tile| (tile, s.position)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::selection::TileIndex;

    #[test]
    fn test_new_overlay_is_empty_and_positioned() {
        let overlay = RenderOverlay::new(15, 10, 70, 21);
        assert_eq!(overlay.visible().count(), 0);
        let sprite = overlay.get(3, 2).unwrap();
        assert_eq!(sprite.tile, None);
        assert_eq!(sprite.position, Vector2 { x: 210.0, y: 140.0 });
        assert!(overlay.get(15, 0).is_none());
    }

    #[test]
    fn test_sync_cell_binds_decoded_tile() {
        let mut grid = TileGrid::new(15, 10, 147);
        let mut overlay = RenderOverlay::for_grid(&grid, 70, 21);
        grid.paint(0, 0, TileIndex(45)).unwrap();
        overlay.sync_cell(&grid, 0, 0);

        let sprite = overlay.get(0, 0).unwrap();
        assert_eq!(sprite.tile, Some(TileCoord::new(2, 3)));
        assert_eq!(sprite.position, Vector2 { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_sync_cell_clears_erased_tile() {
        let mut grid = TileGrid::new(15, 10, 147);
        let mut overlay = RenderOverlay::for_grid(&grid, 70, 21);
        grid.paint(4, 5, TileIndex(10)).unwrap();
        overlay.sync_cell(&grid, 4, 5);
        grid.erase(4, 5).unwrap();
        overlay.sync_cell(&grid, 4, 5);
        assert_eq!(overlay.get(4, 5).unwrap().tile, None);
    }

    #[test]
    fn test_sync_all_mirrors_grid() {
        let mut grid = TileGrid::new(3, 2, 147);
        grid.paint(0, 0, TileIndex(0)).unwrap();
        grid.paint(2, 1, TileIndex(146)).unwrap();
        let mut overlay = RenderOverlay::for_grid(&grid, 70, 21);
        overlay.sync_all(&grid);

        let visible: Vec<_> = overlay.visible().collect();
        assert_eq!(
            visible,
            vec![
                (TileCoord::new(0, 0), Vector2 { x: 0.0, y: 0.0 }),
                (TileCoord::new(6, 20), Vector2 { x: 140.0, y: 70.0 }),
            ]
        );
    }
}
