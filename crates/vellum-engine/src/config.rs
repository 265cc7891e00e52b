use crate::camera::ResizePolicy;
use crate::coords::Color;

/// Render process configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Logical world size the camera starts with (and keeps, for the
    /// `KeepResolution*` policies).
    pub initial_width: u32,
    pub initial_height: u32,
    pub resize_policy: ResizePolicy,
    /// Resolve pointer input against drawn entities and emit pointer events.
    pub emit_pointer_events: bool,
    pub clear_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            initial_width: 1280,
            initial_height: 720,
            resize_policy: ResizePolicy::KeepResolution,
            emit_pointer_events: true,
            clear_color: Color::new(0.5, 0.5, 0.5, 1.0),
        }
    }
}
