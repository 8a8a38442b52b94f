//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`InputState`].
//! - [`handle_editor_input`] turns that state into editor actions: cycling the
//!   held tile, queueing [`EditCommand`]s, and triggering save/load/screenshot
//!   and debug events.
//!
//! Keys act on the press edge, so holding a key performs its action once.
use bevy_ecs::prelude::*;
use log::trace;
use raylib::ffi::{KeyboardKey, MouseButton};

use crate::events::edit::EditCommand;
use crate::events::level::{LoadLevelEvent, SaveLevelEvent};
use crate::events::screenshot::ScreenshotEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, ButtonState, InputState};
use crate::resources::selection::CursorSelector;

/// Poll Raylib for keyboard and mouse input and update the `InputState` resource.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSend<raylib::RaylibHandle>) {
    let read_key = |state: &mut BoolState| {
        let key: KeyboardKey = state.key_binding;
        state.just_pressed = rl.is_key_pressed(key);
    };
    let read_button = |state: &mut ButtonState| {
        let button: MouseButton = state.button_binding;
        state.just_pressed = rl.is_mouse_button_pressed(button);
    };

    let input = &mut *input;
    for key in [
        &mut input.select_next,
        &mut input.select_previous,
        &mut input.screenshot,
        &mut input.save_level,
        &mut input.load_level,
        &mut input.mode_debug,
    ] {
        read_key(key);
    }
    read_button(&mut input.paint);
    read_button(&mut input.erase);
}

/// Apply this frame's input to the editor.
///
/// Selection changes take effect immediately. Paint/erase clicks are only
/// queued; [`apply_edit_commands`](crate::systems::edit::apply_edit_commands)
/// applies them later in the frame. Save, load and screenshot are handed to
/// their observers through events.
pub fn handle_editor_input(
    input: Res<InputState>,
    mut selector: ResMut<CursorSelector>,
    mut edits: MessageWriter<EditCommand>,
    mut commands: Commands,
) {
    if input.select_next.just_pressed {
        selector.advance();
        trace!("Selected tile {:?}", selector.current());
    }
    if input.select_previous.just_pressed {
        selector.retreat();
        trace!("Selected tile {:?}", selector.current());
    }

    if input.paint.just_pressed {
        edits.write(EditCommand::Paint);
    }
    if input.erase.just_pressed {
        edits.write(EditCommand::Erase);
    }

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
    if input.screenshot.just_pressed {
        commands.trigger(ScreenshotEvent {});
    }
    if input.save_level.just_pressed {
        commands.trigger(SaveLevelEvent {});
    }
    if input.load_level.just_pressed {
        commands.trigger(LoadLevelEvent {});
    }
}
