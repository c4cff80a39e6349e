//! Random source for bubble placement.
//!
//! Wrapped in a resource so hosts and tests can seed it for reproducible waves.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;

#[derive(Resource, Clone, Debug)]
pub struct BubbleRng(pub Rng);

impl BubbleRng {
    pub fn with_seed(seed: u64) -> Self {
        BubbleRng(Rng::with_seed(seed))
    }
}

impl Default for BubbleRng {
    fn default() -> Self {
        BubbleRng(Rng::new())
    }
}
