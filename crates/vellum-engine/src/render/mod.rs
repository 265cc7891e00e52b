//! Draw pass: the render process, its per-kind renderers and the backend seam.

mod backend;
mod process;
mod sprite;
mod text;

pub use backend::{BackendCall, Projection, RecordingBackend, RenderBackend, SpriteDraw, TextDraw};
pub use process::{RenderPorts, RenderProcess};

use crate::camera::Camera;
use crate::coords::ScreenViewport;
use crate::interact::FrameRegistry;

/// Per-item drawing context shared by the sprite and text renderers.
pub(crate) struct DrawCtx<'a> {
    pub camera: &'a Camera,
    pub viewport: &'a ScreenViewport,
    pub backend: &'a mut dyn RenderBackend,
    pub registry: &'a mut FrameRegistry,
}
