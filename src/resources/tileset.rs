//! Tileset catalog: one sprite sheet sliced into addressable tile textures.
//!
//! [`TilesetLayout`] is the pure slicing geometry (region rectangles and image
//! size checks). [`TilesetCatalog`] owns the GPU textures built from it.
//!
//! Note: [`TilesetCatalog`] is a non-send resource because raylib textures
//! must be accessed from the main thread only.

use std::path::Path;

use log::{debug, info};
use raylib::prelude::*;

use crate::error::TilesetError;
use crate::resources::selection::TileCoord;

/// Shape of the catalog and the size of its tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilesetLayout {
    pub tile_size: u32,
    pub rows: u32,
    pub columns: u32,
}

impl TilesetLayout {
    pub fn new(tile_size: u32, rows: u32, columns: u32) -> Self {
        Self {
            tile_size,
            rows,
            columns,
        }
    }

    pub fn tile_count(&self) -> u32 {
        self.rows * self.columns
    }

    /// Source rectangle of the tile at `coord` inside the sheet.
    pub fn region(&self, coord: TileCoord) -> Rectangle {
        let size = self.tile_size as f32;
        Rectangle {
            x: coord.column as f32 * size,
            y: coord.row as f32 * size,
            width: size,
            height: size,
        }
    }

    /// All catalog coordinates in storage order (row by row).
    pub fn coords(self) -> impl Iterator<Item = TileCoord> {
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).map(move |column| TileCoord::new(row, column))
        })
    }

    /// Check that an image of `width` x `height` pixels can be sliced.
    ///
    /// The image must be an exact multiple of the tile size on both axes and
    /// hold at least `rows` x `columns` tiles.
    pub fn check_image_size(&self, width: u32, height: u32) -> Result<(), TilesetError> {
        if width % self.tile_size != 0 || height % self.tile_size != 0 {
            return Err(TilesetError::NotTileAligned {
                width,
                height,
                tile_size: self.tile_size,
            });
        }
        let needed_width = self.columns * self.tile_size;
        let needed_height = self.rows * self.tile_size;
        if width < needed_width || height < needed_height {
            return Err(TilesetError::TooSmall {
                width,
                height,
                rows: self.rows,
                columns: self.columns,
                tile_size: self.tile_size,
                needed_width,
                needed_height,
            });
        }
        Ok(())
    }
}

/// Loaded tile textures, immutable after startup.
///
/// This is a non-send resource; use `NonSend<TilesetCatalog>` in system parameters.
pub struct TilesetCatalog {
    layout: TilesetLayout,
    textures: Vec<Texture2D>,
}

impl TilesetCatalog {
    /// Load `path` and slice it according to `layout`.
    pub fn load(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        path: &Path,
        layout: TilesetLayout,
    ) -> Result<Self, TilesetError> {
        let path_str = path.to_string_lossy();
        let sheet = Image::load_image(&path_str).map_err(|e| TilesetError::Image {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        layout.check_image_size(sheet.width() as u32, sheet.height() as u32)?;

        let mut textures = Vec::with_capacity(layout.tile_count() as usize);
        for coord in layout.coords() {
            let tile = sheet.from_image(layout.region(coord));
            let texture =
                rl.load_texture_from_image(th, &tile)
                    .map_err(|e| TilesetError::Texture {
                        row: coord.row,
                        column: coord.column,
                        reason: e.to_string(),
                    })?;
            textures.push(texture);
        }
        debug!("Sliced {} tiles from {:?}", textures.len(), path);
        info!(
            "Loaded tileset {:?}: {}x{} tiles of {}px",
            path, layout.rows, layout.columns, layout.tile_size
        );

        Ok(Self { layout, textures })
    }

    /// Texture at `coord`, or `None` outside the catalog.
    pub fn lookup(&self, coord: TileCoord) -> Option<&Texture2D> {
        if coord.row >= self.layout.rows || coord.column >= self.layout.columns {
            return None;
        }
        self.textures
            .get((coord.row * self.layout.columns + coord.column) as usize)
    }
}
