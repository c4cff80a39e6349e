//! Wave bookkeeping.
//!
//! Hands out the spawn order numbers that define the live list order of
//! bubbles (see [`Bubble`](crate::components::bubble::Bubble)) and counts
//! generated waves.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WaveState {
    /// Number of waves generated since construction.
    pub waves: u64,
    next_order: u64,
}

impl WaveState {
    /// Take the next spawn order number.
    pub fn next_order(&mut self) -> u64 {
        let order = self.next_order;
        self.next_order += 1;
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_order_is_monotonic() {
        let mut wave = WaveState::default();
        assert_eq!(wave.next_order(), 0);
        assert_eq!(wave.next_order(), 1);
        assert_eq!(wave.next_order(), 2);
        assert_eq!(wave.waves, 0);
    }
}
