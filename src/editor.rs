//! Editor world setup.
//!
//! Builds the ECS world shared by the windowed binary and the headless
//! tests: every editor resource sized from [`EditorConfig`], the edit command
//! queue, and the observers for save/load/screenshot/debug events. Raylib
//! handles and the tileset catalog are inserted separately by `main`.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;

use crate::events::edit::EditCommand;
use crate::events::level::{load_level_observer, save_level_observer};
use crate::events::screenshot::screenshot_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::cursor::CursorCell;
use crate::resources::editorconfig::EditorConfig;
use crate::resources::input::InputState;
use crate::resources::overlay::RenderOverlay;
use crate::resources::prompt::Prompt;
use crate::resources::screenshot::PendingScreenshot;
use crate::resources::selection::CursorSelector;
use crate::resources::tilegrid::TileGrid;
use crate::systems::edit::{apply_edit_commands, update_edit_commands};
use crate::systems::input::handle_editor_input;

/// Insert the editor resources and observers into `world`.
///
/// The grid starts all empty and the selection at tile (0, 0).
pub fn setup_editor(world: &mut World, config: EditorConfig, prompt: Prompt) {
    let grid = TileGrid::new(config.grid_width, config.grid_height, config.tile_count());
    let overlay = RenderOverlay::for_grid(&grid, config.tile_size, config.catalog_columns);
    info!(
        "Editing a {}x{} grid with {} tiles",
        grid.width(),
        grid.height(),
        grid.tile_count()
    );

    world.insert_resource(CursorSelector::new(
        config.catalog_rows,
        config.catalog_columns,
    ));
    world.insert_resource(grid);
    world.insert_resource(overlay);
    world.insert_resource(CursorCell::default());
    world.insert_resource(InputState::default());
    world.insert_resource(PendingScreenshot::default());
    world.insert_resource(prompt);
    world.insert_resource(config);
    world.init_resource::<Messages<EditCommand>>();

    world.spawn(Observer::new(save_level_observer));
    world.spawn(Observer::new(load_level_observer));
    world.spawn(Observer::new(screenshot_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Ensure the observers are registered before any system triggers events.
    world.flush();
}

/// Add the window-independent part of the frame: input handling, then the
/// single edit point, then the queue advance.
pub fn add_editing_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (
            handle_editor_input,
            apply_edit_commands,
            update_edit_commands,
        )
            .chain(),
    );
}
