use glam::Vec2;

use super::{PointerSample, RawPointer};
use crate::camera::Camera;
use crate::coords::ScreenViewport;

/// Screen pixel → world space through the camera.
#[inline]
pub fn to_projected(screen: Vec2, camera: &Camera, window: Vec2) -> Vec2 {
    camera.unproject(screen, window)
}

/// Screen pixel → pixels from the window centre, +Y up.
#[inline]
pub fn to_unprojected(screen: Vec2, window: Vec2) -> Vec2 {
    Vec2::new(screen.x - window.x / 2.0, window.y / 2.0 - screen.y)
}

/// Computes both coordinate pairs for a raw sample.
pub fn transform(raw: RawPointer, camera: &Camera, viewport: &ScreenViewport) -> PointerSample {
    PointerSample {
        raw,
        projected: to_projected(raw.screen, camera, viewport.window),
        unprojected: to_unprojected(raw.screen, viewport.window),
    }
}
