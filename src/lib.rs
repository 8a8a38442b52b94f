//! Tilemap editor library.
//!
//! This module exposes the editor's resources, systems, events and level file
//! codec for use in integration tests and by the binary.

pub mod editor;
pub mod error;
pub mod events;
pub mod levelfile;
pub mod resources;
pub mod systems;
