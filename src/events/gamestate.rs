//! Lifecycle transition event and observer.
//!
//! Systems and the host request a change to the lifecycle [`GameStates`] by
//! updating [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then
//! triggers the observer in this module, which applies the transition to
//! [`GameState`] and runs the exit/enter hooks.
//!
//! The hooks bind the [`GameTicker`] to the lifecycle: entering
//! [`GameStates::Active`] starts it and leaving that state cancels it, so no
//! tick ever fires for a detached component.
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::ticker::GameTicker;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending lifecycle transition should be
/// applied.
///
/// Emitting this event causes [`observe_gamestate_change_event`] to read
/// [`NextGameState`]. If it contains [`Pending`], the observer updates the
/// authoritative [`GameState`], runs exit/enter hooks, and clears the pending
/// value; if it is [`Unchanged`], nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending lifecycle transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending and different from the current state, copies the new value
///   into [`GameState`], then runs the exit hook of the previous state and
///   the enter hook of the new one.
/// - Always resets [`NextGameState`] to [`Unchanged`] when something was pending.
/// - `Quitting` is terminal: later requests are dropped.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    mut ticker: ResMut<GameTicker>,
) {
    debug!("GameStateChangedEvent triggered");

    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
        return;
    };

    // Clone the next state value first so we don't keep an immutable borrow while mutating.
    let next_state_value = next_game_state.get().clone();
    match next_state_value {
        Pending(new_state) => {
            next_game_state.reset();
            let old_state = game_state.get().clone();
            if old_state == new_state {
                debug!("Already in {:?}", new_state);
                return;
            }
            if old_state == GameStates::Quitting {
                debug!("Ignoring transition to {:?} while quitting", new_state);
                return;
            }
            info!("Transitioning from {:?} to {:?}", old_state, new_state);
            game_state.set(new_state.clone());
            on_state_exit(&old_state, &mut ticker);
            on_state_enter(&new_state, &mut ticker);
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}

/// Internal: run state-specific "enter" hooks for the given state.
fn on_state_enter(state: &GameStates, ticker: &mut GameTicker) {
    match state {
        GameStates::Detached => debug!("Entered Detached state"),
        GameStates::AwaitingLayout => debug!("Entered AwaitingLayout state"),
        GameStates::Active => ticker.start(),
        GameStates::Quitting => debug!("Entered Quitting state"),
    }
}

/// Internal: run state-specific "exit" hooks for the given state.
fn on_state_exit(state: &GameStates, ticker: &mut GameTicker) {
    match state {
        GameStates::Active => ticker.cancel(),
        other => debug!("Exited {:?} state", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::observer::Observer;
    use crate::resources::gamestate::NextGameStates;

    fn make_world() -> World {
        let mut world = World::new();
        world.insert_resource(GameState::new());
        world.insert_resource(NextGameState::new());
        world.insert_resource(GameTicker::new(0.03));
        world.spawn(Observer::new(observe_gamestate_change_event));
        world.flush();
        world
    }

    fn request(world: &mut World, state: GameStates) {
        world.resource_mut::<NextGameState>().set(state);
        world.trigger(GameStateChangedEvent {});
    }

    #[test]
    fn test_entering_active_starts_ticker() {
        let mut world = make_world();
        request(&mut world, GameStates::Active);
        assert_eq!(world.resource::<GameState>().get(), &GameStates::Active);
        assert!(world.resource::<GameTicker>().is_running());
        assert_eq!(
            world.resource::<NextGameState>().get(),
            &NextGameStates::Unchanged
        );
    }

    #[test]
    fn test_leaving_active_cancels_ticker() {
        let mut world = make_world();
        request(&mut world, GameStates::Active);
        request(&mut world, GameStates::Detached);
        assert_eq!(world.resource::<GameState>().get(), &GameStates::Detached);
        assert!(!world.resource::<GameTicker>().is_running());
    }

    #[test]
    fn test_quitting_is_terminal() {
        let mut world = make_world();
        request(&mut world, GameStates::Active);
        request(&mut world, GameStates::Quitting);
        request(&mut world, GameStates::Active);
        assert_eq!(world.resource::<GameState>().get(), &GameStates::Quitting);
        assert!(!world.resource::<GameTicker>().is_running());
    }

    #[test]
    fn test_unchanged_is_noop() {
        let mut world = make_world();
        world.trigger(GameStateChangedEvent {});
        assert_eq!(world.resource::<GameState>().get(), &GameStates::Detached);
    }
}
