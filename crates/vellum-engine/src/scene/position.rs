use glam::Vec2;

/// Unit of a draw item's logical position. `(0, 0)` is the centre of the view
/// in both units.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum PositionUnit {
    /// World units.
    #[default]
    Pixels,
    /// `(100, 100)` is the top-right corner, `(-100, -100)` the bottom-left.
    Percent,
}

impl PositionUnit {
    /// Converts a logical position into world units for a view of `world` size.
    #[inline]
    pub fn translate(self, position: Vec2, world: Vec2) -> Vec2 {
        match self {
            PositionUnit::Pixels => position,
            PositionUnit::Percent => position * world / 200.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORLD: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn pixels_pass_through() {
        let p = Vec2::new(-12.5, 40.0);
        assert_eq!(PositionUnit::Pixels.translate(p, WORLD), p);
    }

    #[test]
    fn percent_corners_hit_view_edges() {
        assert_eq!(PositionUnit::Percent.translate(Vec2::new(100.0, 100.0), WORLD), Vec2::new(400.0, 300.0));
        assert_eq!(PositionUnit::Percent.translate(Vec2::new(-100.0, -100.0), WORLD), Vec2::new(-400.0, -300.0));
        assert_eq!(PositionUnit::Percent.translate(Vec2::ZERO, WORLD), Vec2::ZERO);
    }

    #[test]
    fn percent_axes_are_independent() {
        assert_eq!(PositionUnit::Percent.translate(Vec2::new(50.0, 0.0), WORLD), Vec2::new(200.0, 0.0));
    }
}
