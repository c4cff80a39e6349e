//! Screen size resource.
//!
//! Stores the current viewport dimensions in pixels. The host updates it at
//! layout time and on every resize; bubble generation and rendering read it.

use bevy_ecs::prelude::Resource;

/// Current viewport size in pixels. Zero until the host has laid out the surface.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    /// Whether a wave can be spawned keeping `margin` free on both sides.
    ///
    /// The horizontal spawn range `[margin, w - margin]` must not be degenerate.
    pub fn can_host_wave(&self, margin: i32) -> bool {
        self.w > margin.saturating_mul(2) && self.h > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_laid_out() {
        assert!(!ScreenSize::default().can_host_wave(100));
    }

    #[test]
    fn test_can_host_wave_needs_width_above_twice_the_margin() {
        assert!(!ScreenSize { w: 200, h: 800 }.can_host_wave(100));
        assert!(ScreenSize { w: 201, h: 800 }.can_host_wave(100));
        assert!(!ScreenSize { w: 400, h: 0 }.can_host_wave(100));
    }

    #[test]
    fn test_huge_margin_never_fits() {
        assert!(!ScreenSize { w: i32::MAX, h: 800 }.can_host_wave(i32::MAX));
        assert!(!ScreenSize { w: i32::MAX, h: 800 }.can_host_wave(i32::MAX / 2 + 1));
    }
}
