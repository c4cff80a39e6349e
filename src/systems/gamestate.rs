use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use bevy_ecs::prelude::*;

pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    // Check if there is a pending state change
    if let NextGameStates::Pending(_new_state) = next_state.get() {
        // If there is, trigger the GameStateChangedEvent
        commands.trigger(GameStateChangedEvent {});
    }
}

pub fn state_is_awaiting_layout(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::AwaitingLayout)
}

/// Ticks only make sense once a wave can exist.
pub fn state_is_not_awaiting_layout(state: Res<GameState>) -> bool {
    !matches!(state.get(), GameStates::AwaitingLayout)
}

pub fn state_is_not_quitting(state: Res<GameState>) -> bool {
    !matches!(state.get(), GameStates::Quitting)
}
