//! Fixed-step game ticker.
//!
//! The [`GameTicker`] turns variable host frame times into whole game ticks.
//! It accumulates elapsed time while running and releases one tick for every
//! full `interval`, subtracting the interval instead of zeroing so the long
//! term rate stays exact. Bubble motion is applied per tick, never scaled by
//! the frame delta.
//!
//! The ticker is bound to the component lifecycle: the game state observer
//! starts it when entering [`GameStates::Active`] and cancels it when leaving.
//!
//! [`GameStates::Active`]: crate::resources::gamestate::GameStates::Active

use bevy_ecs::prelude::Resource;
use log::{debug, warn};

/// Upper bound of ticks released by a single [`GameTicker::advance`] call.
///
/// A longer stall (window dragged, debugger break) drops the backlog instead
/// of fast-forwarding the whole wave in one frame.
pub const MAX_TICKS_PER_ADVANCE: u32 = 10;

#[derive(Resource, Clone, Debug)]
pub struct GameTicker {
    /// Tick interval in seconds.
    pub interval: f32,
    accumulator: f32,
    running: bool,
    /// Ticks released since construction.
    pub fired: u64,
}

impl GameTicker {
    /// Create a stopped ticker with the given interval in seconds.
    pub fn new(interval: f32) -> Self {
        GameTicker {
            interval,
            accumulator: 0.0,
            running: false,
            fired: 0,
        }
    }

    /// Start releasing ticks. The first tick comes one full interval later.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.accumulator = 0.0;
            if self.interval <= 0.0 {
                warn!("Ticker started with a {}s interval, no ticks will fire", self.interval);
            } else {
                debug!("Ticker started ({}s interval)", self.interval);
            }
        }
    }

    /// Stop releasing ticks and forget any partial interval.
    pub fn cancel(&mut self) {
        if self.running {
            self.running = false;
            self.accumulator = 0.0;
            debug!("Ticker cancelled after {} ticks", self.fired);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Accumulate `dt` seconds and return how many ticks are due now.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !self.running || self.interval <= 0.0 {
            return 0;
        }
        self.accumulator += dt.max(0.0);

        let mut due = 0;
        while self.accumulator >= self.interval && due < MAX_TICKS_PER_ADVANCE {
            self.accumulator -= self.interval;
            due += 1;
        }
        if self.accumulator >= self.interval {
            debug!(
                "Ticker dropping {:.3}s of backlog",
                self.accumulator - self.accumulator % self.interval
            );
            self.accumulator %= self.interval;
        }

        self.fired += due as u64;
        due
    }
}
