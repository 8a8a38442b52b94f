//! Grid cell under the mouse.
//!
//! Updated once per frame by [`update_cursor_cell`](crate::systems::cursor::update_cursor_cell).
//! Edits are applied to this cell and the preview sprite is drawn at its
//! snapped position.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// A cell of the level grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

impl GridPos {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Hovered cell, `None` while the mouse is outside the grid.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorCell {
    pub cell: Option<GridPos>,
}

impl CursorCell {
    pub fn at(x: u32, y: u32) -> Self {
        Self {
            cell: Some(GridPos::new(x, y)),
        }
    }

    /// Top-left pixel of the hovered cell.
    pub fn snapped_position(&self, tile_size: u32) -> Option<Vector2> {
        self.cell.map(|c| Vector2 {
            x: (c.x * tile_size) as f32,
            y: (c.y * tile_size) as f32,
        })
    }
}

/// Snap a window-space position to a grid cell by integer division.
///
/// Positions left of / above the window or past the grid edge give `None`.
pub fn snap_to_grid(position: Vector2, tile_size: u32, width: u32, height: u32) -> Option<GridPos> {
    if position.x < 0.0 || position.y < 0.0 || tile_size == 0 {
        return None;
    }
    let x = position.x as u32 / tile_size;
    let y = position.y as u32 / tile_size;
    (x < width && y < height).then_some(GridPos { x, y })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_inside_grid() {
        let pos = Vector2 { x: 145.0, y: 69.9 };
        assert_eq!(snap_to_grid(pos, 70, 15, 10), Some(GridPos::new(2, 0)));
        let pos = Vector2 { x: 0.0, y: 0.0 };
        assert_eq!(snap_to_grid(pos, 70, 15, 10), Some(GridPos::new(0, 0)));
        let pos = Vector2 { x: 1049.0, y: 699.0 };
        assert_eq!(snap_to_grid(pos, 70, 15, 10), Some(GridPos::new(14, 9)));
    }

    #[test]
    fn test_snap_outside_grid() {
        assert_eq!(snap_to_grid(Vector2 { x: 1050.0, y: 10.0 }, 70, 15, 10), None);
        assert_eq!(snap_to_grid(Vector2 { x: 10.0, y: 700.0 }, 70, 15, 10), None);
        assert_eq!(snap_to_grid(Vector2 { x: -1.0, y: 10.0 }, 70, 15, 10), None);
        assert_eq!(snap_to_grid(Vector2 { x: 10.0, y: -0.5 }, 70, 15, 10), None);
    }

    #[test]
    fn test_snapped_position() {
        assert_eq!(
            CursorCell::at(2, 3).snapped_position(70),
            Some(Vector2 { x: 140.0, y: 210.0 })
        );
        assert_eq!(CursorCell::default().snapped_position(70), None);
    }
}
