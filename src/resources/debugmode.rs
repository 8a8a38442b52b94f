//! Debug overlay toggle.
//!
//! While this resource exists the renderer draws grid lines and a status
//! line (held tile, hovered cell, FPS) on top of the level.

use bevy_ecs::prelude::Resource;

/// Marker resource, toggled by F11.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct DebugMode;
