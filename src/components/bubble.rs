//! Bubble component.
//!
//! A [`Bubble`] is a circular target that rises from below the bottom edge of
//! the viewport. Its center lives in the entity's
//! [`MapPosition`](crate::components::mapposition::MapPosition); the radius
//! never changes after spawning.
//!
//! Bubbles of a wave are kept in a logical list. ECS storage does not keep an
//! insertion order, so every bubble carries the `order` number it was spawned
//! with: a lower number means earlier in the list. Hit-testing relies on this
//! to pop the first bubble in the list when several overlap.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// A poppable circular target.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Bubble {
    /// Radius in surface units.
    pub radius: f32,
    /// Spawn order; lower is earlier in the live list.
    pub order: u64,
}

impl Bubble {
    pub fn new(radius: f32, order: u64) -> Self {
        Bubble { radius, order }
    }

    /// Whether `point` lies inside (or on the edge of) a bubble centered at `center`.
    pub fn contains(&self, center: Vector2, point: Vector2) -> bool {
        let dx = point.x - center.x;
        let dy = point.y - center.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// Whether a bubble centered at `center` has fully left through the top edge.
    pub fn has_escaped(&self, center: Vector2) -> bool {
        center.y + self.radius < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vector2 {
        Vector2 { x, y }
    }

    #[test]
    fn test_contains_center_and_edge() {
        let b = Bubble::new(60.0, 0);
        assert!(b.contains(v(100.0, 100.0), v(100.0, 100.0)));
        assert!(b.contains(v(100.0, 100.0), v(160.0, 100.0)));
        assert!(b.contains(v(100.0, 100.0), v(100.0, 40.0)));
    }

    #[test]
    fn test_contains_rejects_outside() {
        let b = Bubble::new(60.0, 0);
        assert!(!b.contains(v(100.0, 100.0), v(160.5, 100.0)));
        // Inside the bounding box but outside the circle
        assert!(!b.contains(v(100.0, 100.0), v(150.0, 150.0)));
    }

    #[test]
    fn test_has_escaped_requires_top_edge_above_zero() {
        let b = Bubble::new(60.0, 0);
        assert!(!b.has_escaped(v(0.0, -60.0)));
        assert!(b.has_escaped(v(0.0, -60.5)));
        assert!(!b.has_escaped(v(0.0, 500.0)));
    }
}
