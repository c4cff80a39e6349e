//! Lifecycle state resources.
//!
//! These resources track the authoritative lifecycle state of the game and
//! any pending transition requested by systems or the host. See
//! `crate::events::gamestate::observe_gamestate_change_event` for how a
//! transition is applied and how the ticker follows it.

use bevy_ecs::prelude::Resource;

/// Discrete lifecycle states of the game component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    /// Not attached to a host; the ticker is cancelled.
    #[default]
    Detached,
    /// Attached, waiting for a laid-out viewport before generating bubbles.
    AwaitingLayout,
    /// The ticker is running and bubbles rise.
    Active,
    /// Shutting down; input is ignored.
    Quitting,
}

/// Representation of a requested next state.
///
/// Use [`NextGameState::set`] to mark a transition as pending; an observer
/// will later apply it and reset the value to [`NextGameStates::Unchanged`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current lifecycle state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Create a new state initialized to [`GameStates::Detached`].
    pub fn new() -> Self {
        GameState {
            current: GameStates::Detached,
        }
    }
    /// Read-only access to the current state.
    pub fn get(&self) -> &GameStates {
        &self.current
    }
    /// Update the current state immediately.
    ///
    /// Prefer requesting transitions via [`NextGameState`] and the event
    /// observer so enter/exit hooks run.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

/// Intent to change to a new lifecycle state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    /// Create a new value initialized to [`NextGameStates::Unchanged`].
    pub fn new() -> Self {
        NextGameState {
            next: NextGameStates::Unchanged,
        }
    }

    /// Get the current transition request.
    pub fn get(&self) -> &NextGameStates {
        &self.next
    }

    /// Request a transition to `next` by marking it as pending.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    /// Reset to [`NextGameStates::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_state_starts_detached() {
        assert_eq!(GameState::new().get(), &GameStates::Detached);
    }

    #[test]
    fn test_next_game_state_set_and_reset() {
        let mut next = NextGameState::new();
        assert_eq!(next.get(), &NextGameStates::Unchanged);
        next.set(GameStates::Active);
        assert_eq!(next.get(), &NextGameStates::Pending(GameStates::Active));
        next.reset();
        assert_eq!(next.get(), &NextGameStates::Unchanged);
    }
}
