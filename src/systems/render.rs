use std::ffi::CString;
use std::fs;
use std::path::Path;

use bevy_ecs::prelude::*;
use log::{error, info};
use raylib::ffi;
use raylib::prelude::*;

use crate::resources::cursor::CursorCell;
use crate::resources::debugmode::DebugMode;
use crate::resources::editorconfig::EditorConfig;
use crate::resources::overlay::RenderOverlay;
use crate::resources::screenshot::PendingScreenshot;
use crate::resources::selection::CursorSelector;
use crate::resources::tileset::TilesetCatalog;

/// Draw the level, the preview of the held tile and the debug overlay, then
/// capture a pending screenshot before the frame is presented.
#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    catalog: NonSend<TilesetCatalog>,
    overlay: Res<RenderOverlay>,
    cursor: Res<CursorCell>,
    selector: Res<CursorSelector>,
    config: Res<EditorConfig>,
    debug: Option<Res<DebugMode>>,
    mut screenshot: ResMut<PendingScreenshot>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);

    for (tile, position) in overlay.visible() {
        if let Some(texture) = catalog.lookup(tile) {
            d.draw_texture_v(texture, position, Color::WHITE);
        }
    }

    // Preview of the held tile, slightly transparent.
    if let (Some(position), Some(texture)) = (
        cursor.snapped_position(config.tile_size),
        catalog.lookup(selector.current()),
    ) {
        d.draw_texture_v(texture, position, Color::new(255, 255, 255, 200));
    }

    if debug.is_some() {
        render_debug_ui(&mut d, &config, &cursor, &selector);
    }

    if let Some(path) = screenshot.take() {
        save_screenshot(&mut d, &th, &path);
    }
}

fn render_debug_ui(
    d: &mut RaylibDrawHandle,
    config: &EditorConfig,
    cursor: &CursorCell,
    selector: &CursorSelector,
) {
    let (w, h) = config.window_size();
    let size = config.tile_size as i32;
    for x in 0..=config.grid_width as i32 {
        d.draw_line(x * size, 0, x * size, h as i32, Color::DARKGRAY);
    }
    for y in 0..=config.grid_height as i32 {
        d.draw_line(0, y * size, w as i32, y * size, Color::DARKGRAY);
    }

    if let Some(position) = cursor.snapped_position(config.tile_size) {
        d.draw_rectangle_lines(
            position.x as i32,
            position.y as i32,
            size,
            size,
            Color::YELLOW,
        );
    }

    let held = selector.current();
    let hovered = match cursor.cell {
        Some(c) => format!("({}, {})", c.x, c.y),
        None => "-".to_string(),
    };
    let text = format!(
        "DEBUG (F11) | FPS: {} | tile {} (row {}, col {}) | cell {}",
        d.get_fps(),
        selector.index().get(),
        held.row,
        held.column,
        hovered
    );
    d.draw_rectangle(0, 0, w as i32, 20, Color::new(0, 0, 0, 160));
    d.draw_text(&text, 6, 5, 10, Color::RAYWHITE);
}

/// Create the parent directory of `path` and convert it for raylib.
fn screenshot_target(path: &Path) -> Result<CString, String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| format!("unable to create {}: {}", parent.display(), e))?;
    }
    CString::new(path.to_string_lossy().as_bytes())
        .map_err(|_| format!("invalid screenshot path {:?}", path))
}

/// Write the current frame to `path` as PNG.
fn save_screenshot(d: &mut RaylibDrawHandle, th: &RaylibThread, path: &Path) {
    let c_path = match screenshot_target(path) {
        Ok(c_path) => c_path,
        Err(e) => {
            error!("Screenshot failed: {}", e);
            return;
        }
    };
    // Draws are batched until EndDrawing; flush them so the capture holds
    // the preview and the debug text.
    unsafe { ffi::rlDrawRenderBatchActive() };
    let image = d.load_image_from_screen(th);
    let saved = unsafe { ffi::ExportImage(*image, c_path.as_ptr()) };
    if saved {
        info!("Screenshot saved to {}", path.display());
    } else {
        error!("Unable to save screenshot to {}", path.display());
    }
}
