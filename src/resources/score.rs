use bevy_ecs::prelude::Resource;

/// In-session score. Seeded from the score store at construction and only
/// ever incremented afterwards.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub value: u32,
}

impl Score {
    pub fn new(value: u32) -> Self {
        Score { value }
    }
}
