//! Pointer input resolved against the geometry drawn this frame.
//!
//! The renderers record every drawn item in a [`FrameRegistry`]; at the end of
//! the frame [`HitTestEngine`] transforms the buffered pointer samples and
//! finds the entity each one landed on.

mod hit;
mod pointer;
mod registry;
mod transform;

pub use hit::HitTestEngine;
pub use pointer::{PointerEvent, PointerKind, PointerSample, RawPointer};
pub use registry::{FrameRegistry, RenderedEntity};
pub use transform::{to_projected, to_unprojected, transform};
