//! Orthographic camera and the resize policy that reconciles it with the window.

mod camera;
mod resize;

pub use camera::Camera;
pub use resize::{fit_box, FitBox, ResizePolicy};
