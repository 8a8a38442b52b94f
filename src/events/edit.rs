//! Per-frame edit commands.
//!
//! Input handling writes [`EditCommand`] messages whenever a paint or erase
//! click arrives; [`apply_edit_commands`](crate::systems::edit::apply_edit_commands)
//! drains them exactly once per frame and applies them to the hovered cell.
//! However many clicks arrive during a frame, the grid is only mutated at that
//! single point.

use bevy_ecs::message::Message;

/// A grid edit requested by the user, applied at the hovered cell.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    /// Place the held tile.
    Paint,
    /// Empty the cell.
    Erase,
}
