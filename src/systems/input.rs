//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame,
//!   writes key state and pointer-down events into
//!   [`InputState`], and turns lifecycle keys (quit, pause) and window focus
//!   changes into lifecycle requests.
//! - [`update_screen_size`] mirrors the window size into [`ScreenSize`]; this
//!   is the host's layout notification.
//!
//! Only the desktop host adds these systems; headless hosts and tests feed
//! [`InputState`] and [`ScreenSize`] directly.
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::{MouseButton, RaylibHandle};

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::{BoolState, InputState};
use crate::resources::screensize::ScreenSize;

/// Lifecycle state the pause key moves to from `current`, if any.
pub fn pause_toggle_target(current: &GameStates) -> Option<GameStates> {
    match current {
        GameStates::Active | GameStates::AwaitingLayout => Some(GameStates::Detached),
        GameStates::Detached => Some(GameStates::AwaitingLayout),
        GameStates::Quitting => None,
    }
}

fn poll_key(state: &mut BoolState, rl: &RaylibHandle) {
    state.active = rl.is_key_down(state.key_binding);
    state.just_pressed = rl.is_key_pressed(state.key_binding);
    state.just_released = rl.is_key_released(state.key_binding);
}

/// Poll Raylib for input and update the `InputState` resource.
///
/// `paused_by_focus` remembers whether the last detach came from losing
/// window focus, so regaining focus only resumes what focus paused.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<RaylibHandle>,
    state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
    mut commands: Commands,
    mut paused_by_focus: Local<bool>,
) {
    poll_key(&mut input.action_back, &rl);
    poll_key(&mut input.pause_toggle, &rl);
    poll_key(&mut input.mode_debug, &rl);

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        let pos = rl.get_mouse_position();
        input.push_pointer_down(pos.x, pos.y);
    }

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }

    if input.action_back.just_pressed {
        next_state.set(GameStates::Quitting);
        return;
    }

    if input.pause_toggle.just_pressed {
        if let Some(target) = pause_toggle_target(state.get()) {
            info!("Pause toggled: {:?} -> {:?}", state.get(), target);
            next_state.set(target);
            *paused_by_focus = false;
        }
        return;
    }

    let focused = rl.is_window_focused();
    match state.get() {
        GameStates::Active if !focused => {
            info!("Window lost focus, detaching");
            next_state.set(GameStates::Detached);
            *paused_by_focus = true;
        }
        GameStates::Detached if focused && *paused_by_focus => {
            info!("Window regained focus, attaching");
            next_state.set(GameStates::AwaitingLayout);
            *paused_by_focus = false;
        }
        _ => {}
    }
}

/// Copy the current window size into [`ScreenSize`].
pub fn update_screen_size(mut screen: ResMut<ScreenSize>, rl: NonSend<RaylibHandle>) {
    let (w, h) = (rl.get_screen_width(), rl.get_screen_height());
    if screen.w != w || screen.h != h {
        info!("Viewport {}x{} -> {}x{}", screen.w, screen.h, w, h);
        screen.w = w;
        screen.h = h;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pause_toggle_target() {
        assert_eq!(
            pause_toggle_target(&GameStates::Active),
            Some(GameStates::Detached)
        );
        assert_eq!(
            pause_toggle_target(&GameStates::AwaitingLayout),
            Some(GameStates::Detached)
        );
        assert_eq!(
            pause_toggle_target(&GameStates::Detached),
            Some(GameStates::AwaitingLayout)
        );
        assert_eq!(pause_toggle_target(&GameStates::Quitting), None);
    }
}
