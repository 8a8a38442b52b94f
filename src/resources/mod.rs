//! ECS resources made available to systems.
//!
//! Overview
//! - `cursor` – grid cell under the mouse this frame
//! - `debugmode` – presence toggles the debug overlay
//! - `editorconfig` – dimensions, asset paths and output directories
//! - `input` – per-frame keyboard/mouse state relevant to editing
//! - `overlay` – drawable mirror of the grid
//! - `prompt` – console name prompt for save/load/screenshot
//! - `screenshot` – screenshot waiting to be captured
//! - `selection` – tile addressing and the held tile
//! - `tilegrid` – the level grid
//! - `tileset` – sliced tileset textures
pub mod cursor;
pub mod debugmode;
pub mod editorconfig;
pub mod input;
pub mod overlay;
pub mod prompt;
pub mod screenshot;
pub mod selection;
pub mod tilegrid;
pub mod tileset;
