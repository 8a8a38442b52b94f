//! Editor configuration resource.
//!
//! Holds every dimension the editor depends on (tile size, catalog shape,
//! grid shape) plus asset and output locations. Values are loaded from an INI
//! file; anything missing keeps its default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [tileset]
//! path = Tileset/Platformer-70x70.png
//! tile_size = 70
//! rows = 7
//! columns = 21
//!
//! [grid]
//! width = 15
//! height = 10
//!
//! [paths]
//! levels = Levels
//! screenshots = Screenshots
//!
//! [window]
//! title = Tilemap Editor
//! target_fps = 144
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::resources::tileset::TilesetLayout;

const DEFAULT_TILESET_PATH: &str = "Tileset/Platformer-70x70.png";
const DEFAULT_TILE_SIZE: u32 = 70;
const DEFAULT_CATALOG_ROWS: u32 = 7;
const DEFAULT_CATALOG_COLUMNS: u32 = 21;
const DEFAULT_GRID_WIDTH: u32 = 15;
const DEFAULT_GRID_HEIGHT: u32 = 10;
const DEFAULT_LEVELS_DIR: &str = "Levels";
const DEFAULT_SCREENSHOTS_DIR: &str = "Screenshots";
const DEFAULT_TITLE: &str = "Tilemap Editor";
const DEFAULT_TARGET_FPS: u32 = 144;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Editor configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Tileset image to slice at startup.
    pub tileset_path: PathBuf,
    /// Edge length of one square tile in pixels, both in the tileset and on screen.
    pub tile_size: u32,
    /// Number of tile rows in the catalog.
    pub catalog_rows: u32,
    /// Number of tile columns in the catalog.
    pub catalog_columns: u32,
    /// Grid width in cells.
    pub grid_width: u32,
    /// Grid height in cells.
    pub grid_height: u32,
    /// Directory holding level text files.
    pub levels_dir: PathBuf,
    /// Directory receiving screenshots.
    pub screenshots_dir: PathBuf,
    pub window_title: String,
    pub target_fps: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorConfig {
    /// Create a configuration with the default values.
    pub fn new() -> Self {
        Self {
            tileset_path: PathBuf::from(DEFAULT_TILESET_PATH),
            tile_size: DEFAULT_TILE_SIZE,
            catalog_rows: DEFAULT_CATALOG_ROWS,
            catalog_columns: DEFAULT_CATALOG_COLUMNS,
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            levels_dir: PathBuf::from(DEFAULT_LEVELS_DIR),
            screenshots_dir: PathBuf::from(DEFAULT_SCREENSHOTS_DIR),
            window_title: DEFAULT_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a default configuration bound to a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [tileset] section
        if let Some(path) = config.get("tileset", "path") {
            self.tileset_path = PathBuf::from(path);
        }
        if let Some(value) = read_u32(&config, "tileset", "tile_size") {
            self.tile_size = value;
        }
        if let Some(value) = read_u32(&config, "tileset", "rows") {
            self.catalog_rows = value;
        }
        if let Some(value) = read_u32(&config, "tileset", "columns") {
            self.catalog_columns = value;
        }

        // [grid] section
        if let Some(value) = read_u32(&config, "grid", "width") {
            self.grid_width = value;
        }
        if let Some(value) = read_u32(&config, "grid", "height") {
            self.grid_height = value;
        }

        // [paths] section
        if let Some(levels) = config.get("paths", "levels") {
            self.levels_dir = PathBuf::from(levels);
        }
        if let Some(screenshots) = config.get("paths", "screenshots") {
            self.screenshots_dir = PathBuf::from(screenshots);
        }

        // [window] section
        if let Some(title) = config.get("window", "title") {
            self.window_title = title;
        }
        if let Some(value) = read_u32(&config, "window", "target_fps") {
            self.target_fps = value;
        }

        info!(
            "Loaded config: tileset {:?} ({}x{} tiles of {}px), grid {}x{}, fps={}",
            self.tileset_path,
            self.catalog_rows,
            self.catalog_columns,
            self.tile_size,
            self.grid_width,
            self.grid_height,
            self.target_fps
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [tileset] section
        config.set(
            "tileset",
            "path",
            Some(self.tileset_path.display().to_string()),
        );
        config.set("tileset", "tile_size", Some(self.tile_size.to_string()));
        config.set("tileset", "rows", Some(self.catalog_rows.to_string()));
        config.set("tileset", "columns", Some(self.catalog_columns.to_string()));

        // [grid] section
        config.set("grid", "width", Some(self.grid_width.to_string()));
        config.set("grid", "height", Some(self.grid_height.to_string()));

        // [paths] section
        config.set("paths", "levels", Some(self.levels_dir.display().to_string()));
        config.set(
            "paths",
            "screenshots",
            Some(self.screenshots_dir.display().to_string()),
        );

        // [window] section
        config.set("window", "title", Some(self.window_title.clone()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Reject configurations whose dimensions would make the editor unusable.
    ///
    /// Besides zero sizes, every product derived from the dimensions (tile
    /// count, grid cells, window and tileset pixels) must fit in an `i32`,
    /// the range raylib and the level file format work in.
    pub fn validate(&self) -> Result<(), String> {
        let checks = [
            ("tileset.tile_size", self.tile_size),
            ("tileset.rows", self.catalog_rows),
            ("tileset.columns", self.catalog_columns),
            ("grid.width", self.grid_width),
            ("grid.height", self.grid_height),
        ];
        for (key, value) in checks {
            if value == 0 {
                return Err(format!("{} must be greater than zero", key));
            }
        }
        let products = [
            ("tileset.rows * tileset.columns", self.catalog_rows, self.catalog_columns),
            ("grid.width * grid.height", self.grid_width, self.grid_height),
            ("grid.width * tileset.tile_size", self.grid_width, self.tile_size),
            ("grid.height * tileset.tile_size", self.grid_height, self.tile_size),
            ("tileset.columns * tileset.tile_size", self.catalog_columns, self.tile_size),
            ("tileset.rows * tileset.tile_size", self.catalog_rows, self.tile_size),
        ];
        for (what, a, b) in products {
            let fits = a
                .checked_mul(b)
                .is_some_and(|product| i32::try_from(product).is_ok());
            if !fits {
                return Err(format!("{} is too large ({} * {})", what, a, b));
            }
        }
        Ok(())
    }

    /// Tileset slicing geometry described by this configuration.
    pub fn tileset_layout(&self) -> TilesetLayout {
        TilesetLayout::new(self.tile_size, self.catalog_rows, self.catalog_columns)
    }

    /// Total number of tiles in the catalog.
    pub fn tile_count(&self) -> u32 {
        self.catalog_rows * self.catalog_columns
    }

    /// Window size in pixels: the grid exactly fills the window.
    pub fn window_size(&self) -> (u32, u32) {
        (
            self.grid_width * self.tile_size,
            self.grid_height * self.tile_size,
        )
    }
}

/// Read an unsigned key that must fit in a `u32`.
///
/// Out-of-range values are reported and ignored, like unparsable ones.
fn read_u32(config: &Ini, section: &str, key: &str) -> Option<u32> {
    let value = config.getuint(section, key).ok().flatten()?;
    match u32::try_from(value) {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("{}.{} = {} is out of range, ignored", section, key, value);
            None
        }
    }
}
