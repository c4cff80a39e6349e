use bevy_ecs::prelude::Resource;

/// Host frame time, in seconds.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
}
