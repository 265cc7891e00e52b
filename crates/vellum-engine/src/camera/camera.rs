use glam::{Mat4, Vec2, Vec3};

/// 2D orthographic camera.
///
/// The camera looks at `position`; the visible area is `viewport * zoom` world
/// units centred on it (larger zoom shows more of the world). Y is up.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec2,
    pub zoom: f32,
    /// Visible world size at zoom 1.
    pub viewport: Vec2,
}

impl Camera {
    /// Zoom never drops below this; a zero-sized projection has no inverse.
    pub const MIN_ZOOM: f32 = 0.01;

    pub fn new(width: f32, height: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
            viewport: Vec2::new(width, height),
        }
    }

    /// Projection matrix at an explicit zoom, without the camera translation.
    pub fn projection_at(&self, zoom: f32) -> Mat4 {
        let half = self.viewport * zoom * 0.5;
        Mat4::orthographic_rh(-half.x, half.x, -half.y, half.y, -1.0, 1.0)
    }

    /// Projection at the current zoom, without translation.
    #[inline]
    pub fn projection(&self) -> Mat4 {
        self.projection_at(self.zoom)
    }

    /// World → clip space: projection after the inverse camera translation.
    pub fn combined(&self) -> Mat4 {
        self.projection() * Mat4::from_translation(-self.position.extend(0.0))
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.position += Vec2::new(dx, dy);
    }

    /// Adds `delta` to the zoom, clamped at [`Camera::MIN_ZOOM`].
    pub fn zoom_by(&mut self, delta: f32) {
        let zoom = self.zoom + delta;
        if zoom < Self::MIN_ZOOM {
            log::warn!("Camera: zoom {zoom} clamped to {}", Self::MIN_ZOOM);
            self.zoom = Self::MIN_ZOOM;
        } else {
            self.zoom = zoom;
        }
    }

    /// Maps a screen pixel (top-left origin, +Y down) to world space.
    ///
    /// The point is normalised against the full `window`, matching how a
    /// stretched viewport spreads the world across the whole window.
    pub fn unproject(&self, screen: Vec2, window: Vec2) -> Vec2 {
        let ndc = Vec3::new(
            2.0 * screen.x / window.x - 1.0,
            1.0 - 2.0 * screen.y / window.y,
            0.0,
        );
        self.combined().inverse().project_point3(ndc).truncate()
    }
}
