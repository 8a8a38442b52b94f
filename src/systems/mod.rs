//! Editor systems.
//!
//! Submodules overview
//! - [`cursor`] – snap the mouse position to the hovered grid cell
//! - [`edit`] – apply queued paint/erase commands to grid and overlay
//! - [`input`] – read hardware input and turn it into editor actions
//! - [`render`] – draw the level, the tile preview and the debug overlay

pub mod cursor;
pub mod edit;
pub mod input;
pub mod render;
