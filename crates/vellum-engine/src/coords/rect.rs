use glam::Vec2;

/// Axis-aligned rectangle in world units.
///
/// `origin` is the corner with the smallest coordinates, which is the
/// bottom-left corner in the engine's +Y up space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle of `size` centred on `center`.
    #[inline]
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self::from_origin_size(center - size * 0.5, size)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Uniformly scales position and size around the world origin.
    #[inline]
    pub fn scaled(self, factor: f32) -> Self {
        Self::from_origin_size(self.origin * factor, self.size * factor)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let min = self.origin.min(self.origin + self.size);
        let max = self.origin.max(self.origin + self.size);
        p.x >= min.x && p.y >= min.y && p.x < max.x && p.y < max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn contains_min_corner_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_max_corner_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn contains_outside() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(15.0, 15.0)));
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(-1.0, 5.0)));
    }

    #[test]
    fn contains_negative_size_is_normalized() {
        assert!(r(10.0, 10.0, -10.0, -10.0).contains(Vec2::new(5.0, 5.0)));
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn centered_puts_center_at_anchor() {
        let rect = Rect::centered(Vec2::new(4.0, -2.0), Vec2::new(20.0, 4.0));
        assert_eq!(rect, r(-6.0, -4.0, 20.0, 4.0));
        assert_eq!(rect.center(), Vec2::new(4.0, -2.0));
    }

    #[test]
    fn scaled_moves_origin_and_size() {
        assert_eq!(r(2.0, 4.0, 6.0, 8.0).scaled(0.5), r(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
