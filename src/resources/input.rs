//! Per-frame input resource.
//!
//! Captures the keys and mouse buttons the editor reacts to and exposes them
//! to systems via the [`InputState`] resource. Arrow keys cycle the held
//! tile, mouse buttons paint and erase, letter keys save and load.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Press edge of a key with its keyboard binding.
pub struct BoolState {
    /// Whether the key was pressed this frame.
    pub just_pressed: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

#[derive(Debug, Clone, Copy)]
/// Press edge of a mouse button with its binding.
pub struct ButtonState {
    pub just_pressed: bool,
    pub button_binding: MouseButton,
}

/// Resource capturing the per-frame input relevant to editing.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub select_next: BoolState,
    pub select_previous: BoolState,
    pub screenshot: BoolState,
    pub save_level: BoolState,
    pub load_level: BoolState,
    pub mode_debug: BoolState,
    pub paint: ButtonState,
    pub erase: ButtonState,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            just_pressed: false,
            key_binding,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

impl ButtonState {
    pub fn bound_to(button_binding: MouseButton) -> Self {
        Self {
            just_pressed: false,
            button_binding,
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            select_next: BoolState::bound_to(KeyboardKey::KEY_UP),
            select_previous: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            screenshot: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            save_level: BoolState::bound_to(KeyboardKey::KEY_S),
            load_level: BoolState::bound_to(KeyboardKey::KEY_L),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            paint: ButtonState::bound_to(MouseButton::MOUSE_BUTTON_LEFT),
            erase: ButtonState::bound_to(MouseButton::MOUSE_BUTTON_RIGHT),
        }
    }
}

impl InputState {
    /// Clear every edge flag; used between frames and in tests.
    pub fn clear_edges(&mut self) {
        for key in [
            &mut self.select_next,
            &mut self.select_previous,
            &mut self.screenshot,
            &mut self.save_level,
            &mut self.load_level,
            &mut self.mode_debug,
        ] {
            key.just_pressed = false;
        }
        self.paint.just_pressed = false;
        self.erase.just_pressed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.just_pressed);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.select_next.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.select_previous.key_binding, KeyboardKey::KEY_DOWN);
        assert_eq!(input.screenshot.key_binding, KeyboardKey::KEY_SPACE);
        assert_eq!(input.save_level.key_binding, KeyboardKey::KEY_S);
        assert_eq!(input.load_level.key_binding, KeyboardKey::KEY_L);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
        assert_eq!(input.paint.button_binding, MouseButton::MOUSE_BUTTON_LEFT);
        assert_eq!(input.erase.button_binding, MouseButton::MOUSE_BUTTON_RIGHT);
    }

    #[test]
    fn test_clear_edges_resets_presses() {
        let mut input = InputState::default();
        input.save_level.just_pressed = true;
        input.paint.just_pressed = true;
        input.clear_edges();
        assert_eq!(input.save_level.key_binding, KeyboardKey::KEY_S);
        assert!(!input.save_level.just_pressed);
        assert!(!input.paint.just_pressed);
    }
}
