//! Redraw request flag.
//!
//! Ticks and pops raise the flag; the renderer clears it once the frame that
//! shows the change has been drawn. raylib redraws every frame anyway, so the
//! flag is informative for hosts that only repaint on demand.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct RedrawRequest {
    pending: bool,
    /// Total number of requests since construction.
    pub requests: u64,
}

impl RedrawRequest {
    pub fn request(&mut self) {
        self.pending = true;
        self.requests += 1;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Clear the flag, returning whether it was set.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}
