//! Per-frame input resource.
//!
//! Captures the keys the host binary cares about and the pointer-down events
//! (mouse presses or touch taps, in surface coordinates) waiting to be
//! hit-tested against the live bubbles.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding,
        }
    }
}

/// Resource capturing the per-frame input relevant to the game.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Quit (default: Escape).
    pub action_back: BoolState,
    /// Pause/resume by detaching/attaching (default: P).
    pub pause_toggle: BoolState,
    /// Debug overlay toggle (default: F11).
    pub mode_debug: BoolState,
    /// Pointer-down positions not yet handled, in arrival order.
    pub pointer_presses: Vec<Vector2>,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            action_back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            pause_toggle: BoolState::bound_to(KeyboardKey::KEY_P),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            pointer_presses: Vec::new(),
        }
    }
}

impl InputState {
    /// Queue a pointer-down event at `(x, y)`.
    pub fn push_pointer_down(&mut self, x: f32, y: f32) {
        self.pointer_presses.push(Vector2 { x, y });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.action_back.key_binding, KeyboardKey::KEY_ESCAPE);
        assert_eq!(input.pause_toggle.key_binding, KeyboardKey::KEY_P);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
        assert!(!input.pause_toggle.active);
        assert!(input.pointer_presses.is_empty());
    }

    #[test]
    fn test_push_pointer_down_keeps_arrival_order() {
        let mut input = InputState::default();
        input.push_pointer_down(1.0, 2.0);
        input.push_pointer_down(3.0, 4.0);
        assert_eq!(input.pointer_presses.len(), 2);
        assert_eq!(input.pointer_presses[0].x, 1.0);
        assert_eq!(input.pointer_presses[1].y, 4.0);
    }
}
