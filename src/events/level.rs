//! Save/load events and their observers.
//!
//! Pressing the save or load key triggers [`SaveLevelEvent`] or
//! [`LoadLevelEvent`]. The observers ask for a level name through the
//! [`Prompt`] resource, resolve it inside the configured levels directory and
//! run the file operation immediately, outside the per-frame edit path.
//!
//! Failures are reported and leave the grid and overlay untouched; the editor
//! keeps running.
use std::path::{Path, PathBuf};

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{error, info};

use crate::error::LevelError;
use crate::levelfile;
use crate::resources::editorconfig::EditorConfig;
use crate::resources::overlay::RenderOverlay;
use crate::resources::prompt::Prompt;
use crate::resources::tilegrid::TileGrid;

/// Request to save the grid under a name asked from the user.
#[derive(Event, Debug, Clone, Copy)]
pub struct SaveLevelEvent {}

/// Request to replace the grid with a level asked from the user.
#[derive(Event, Debug, Clone, Copy)]
pub struct LoadLevelEvent {}

/// Load `path` into `grid` and rebuild the whole overlay from it.
///
/// Both are left untouched when the file cannot be read or parsed.
pub fn load_level_into(
    path: &Path,
    grid: &mut TileGrid,
    overlay: &mut RenderOverlay,
) -> Result<(), LevelError> {
    levelfile::load_level(path, grid)?;
    overlay.sync_all(grid);
    Ok(())
}

fn ask_level_path(prompt: &mut Prompt, levels_dir: &Path, question: &str) -> Option<PathBuf> {
    let Some(name) = prompt.ask(question) else {
        info!("No level name given, cancelled");
        return None;
    };
    match levelfile::level_path(levels_dir, &name) {
        Ok(path) => Some(path),
        Err(e) => {
            error!("{}", e);
            None
        }
    }
}

/// Observer that writes the current grid to `<levels>/<name>.txt`.
pub fn save_level_observer(
    _trigger: On<SaveLevelEvent>,
    mut prompt: ResMut<Prompt>,
    config: Res<EditorConfig>,
    grid: Res<TileGrid>,
) {
    let Some(path) = ask_level_path(
        &mut prompt,
        &config.levels_dir,
        "Enter a name to save your level: ",
    ) else {
        return;
    };
    match levelfile::save_level(&path, &grid) {
        Ok(()) => info!("Level saved to {}", path.display()),
        Err(e) => error!("Unable to save level: {}", e),
    }
}

/// Observer that replaces the grid with `<levels>/<name>.txt`.
pub fn load_level_observer(
    _trigger: On<LoadLevelEvent>,
    mut prompt: ResMut<Prompt>,
    config: Res<EditorConfig>,
    mut grid: ResMut<TileGrid>,
    mut overlay: ResMut<RenderOverlay>,
) {
    let Some(path) = ask_level_path(
        &mut prompt,
        &config.levels_dir,
        "Enter the name of the level you want to open: ",
    ) else {
        return;
    };
    match load_level_into(&path, &mut grid, &mut overlay) {
        Ok(()) => info!(
            "Level loaded from {} ({} tiles)",
            path.display(),
            grid.filled()
        ),
        Err(e) => error!("Unable to load level: {}", e),
    }
}
