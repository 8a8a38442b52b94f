//! Grid editing systems.
//!
//! [`apply_edit_commands`] is the only place where painting and erasing touch
//! the [`TileGrid`]. It runs once per frame, after input handling and before
//! rendering, and updates the [`RenderOverlay`] cell in the same step so the
//! frame never shows a stale sprite.
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::events::edit::EditCommand;
use crate::resources::cursor::CursorCell;
use crate::resources::overlay::RenderOverlay;
use crate::resources::selection::CursorSelector;
use crate::resources::tilegrid::TileGrid;

/// Drain queued [`EditCommand`]s and apply them at the hovered cell.
///
/// Commands are applied in arrival order, so when a paint and an erase land
/// in the same frame the later one wins. With the mouse outside the grid the
/// commands are dropped.
pub fn apply_edit_commands(
    mut reader: MessageReader<EditCommand>,
    cursor: Res<CursorCell>,
    selector: Res<CursorSelector>,
    mut grid: ResMut<TileGrid>,
    mut overlay: ResMut<RenderOverlay>,
) {
    let Some(cell) = cursor.cell else {
        let dropped = reader.read().count();
        if dropped > 0 {
            debug!("Mouse outside grid, dropped {} edit(s)", dropped);
        }
        return;
    };

    for command in reader.read() {
        let result = match command {
            EditCommand::Paint => grid.paint(cell.x, cell.y, selector.index()),
            EditCommand::Erase => grid.erase(cell.x, cell.y),
        };
        match result {
            Ok(()) => {
                overlay.sync_cell(&grid, cell.x, cell.y);
                debug!("{:?} at ({}, {})", command, cell.x, cell.y);
            }
            Err(e) => warn!("{:?} rejected: {}", command, e),
        }
    }
}

/// Advance the [`Messages<EditCommand>`] buffers once per frame.
pub fn update_edit_commands(mut msgs: ResMut<Messages<EditCommand>>) {
    msgs.update();
}
