use glam::Vec2;

/// How the logical world maps onto the physical window.
///
/// - `world`: logical resolution the camera shows (world units)
/// - `screen_box`: physical pixels the world is rendered into
/// - `offset`: position of `screen_box` inside the window (letterbox bars)
/// - `window`: full physical window size
///
/// Only the resize policy writes to this; everything else reads it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenViewport {
    pub world: Vec2,
    pub screen_box: Vec2,
    pub offset: Vec2,
    pub window: Vec2,
}

impl ScreenViewport {
    /// A viewport whose window, box and world all share one size.
    pub fn new(width: f32, height: f32) -> Self {
        let size = Vec2::new(width, height);
        Self {
            world: size,
            screen_box: size,
            offset: Vec2::ZERO,
            window: size,
        }
    }

    /// Physical pixels per world unit, per axis.
    #[inline]
    pub fn screen_to_world_scale(&self) -> Vec2 {
        self.screen_box / self.world
    }

    /// Ratio between the full window and the rendered box, per axis.
    ///
    /// `(1, 1)` unless the box is letterboxed.
    #[inline]
    pub fn window_to_box_ratio(&self) -> Vec2 {
        self.window / self.screen_box
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.world.cmpgt(Vec2::ZERO).all()
            && self.screen_box.cmpgt(Vec2::ZERO).all()
            && self.window.cmpgt(Vec2::ZERO).all()
            && self.world.is_finite()
            && self.screen_box.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_viewport_has_unit_ratios() {
        let v = ScreenViewport::new(320.0, 200.0);
        assert_eq!(v.screen_to_world_scale(), Vec2::ONE);
        assert_eq!(v.window_to_box_ratio(), Vec2::ONE);
        assert!(v.is_valid());
    }

    #[test]
    fn stretched_viewport_scales_per_axis() {
        let v = ScreenViewport {
            world: Vec2::new(100.0, 100.0),
            screen_box: Vec2::new(200.0, 50.0),
            offset: Vec2::ZERO,
            window: Vec2::new(200.0, 50.0),
        };
        assert_eq!(v.screen_to_world_scale(), Vec2::new(2.0, 0.5));
    }

    #[test]
    fn zero_world_is_invalid() {
        let mut v = ScreenViewport::new(10.0, 10.0);
        v.world = Vec2::ZERO;
        assert!(!v.is_valid());
    }
}
