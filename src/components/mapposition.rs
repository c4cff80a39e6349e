use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Position of an entity in surface coordinates (y grows downwards).
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        MapPosition {
            pos: Vector2 { x, y },
        }
    }
}
