//! Hovered-cell tracking.
use bevy_ecs::prelude::*;

use crate::resources::cursor::{CursorCell, snap_to_grid};
use crate::resources::editorconfig::EditorConfig;

/// Snap the mouse position to the grid and store it in [`CursorCell`].
pub fn update_cursor_cell(
    mut cursor: ResMut<CursorCell>,
    config: Res<EditorConfig>,
    rl: NonSend<raylib::RaylibHandle>,
) {
    let cell = snap_to_grid(
        rl.get_mouse_position(),
        config.tile_size,
        config.grid_width,
        config.grid_height,
    );
    if cursor.cell != cell {
        cursor.cell = cell;
    }
}
