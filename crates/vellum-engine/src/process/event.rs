/// Application lifecycle notifications.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppEvent {
    /// The window's physical size changed.
    Resize { width: u32, height: u32 },
    /// A frame is about to be rendered.
    Render { delta_seconds: f32 },
    Pause,
    Resume,
    Dispose,
}

/// Request to pan and zoom the camera by the given deltas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraChange {
    pub dx: f32,
    pub dy: f32,
    pub zoom_delta: f32,
}

impl CameraChange {
    pub fn new(dx: f32, dy: f32, zoom_delta: f32) -> Self {
        Self { dx, dy, zoom_delta }
    }
}

/// Camera state after a [`CameraChange`] was applied.
///
/// The position is truncated to whole world units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraStatus {
    pub x: i32,
    pub y: i32,
    pub zoom: f32,
}
