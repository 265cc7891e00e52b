//! Coordinate and geometry types shared by the renderers and hit testing.
//!
//! Canonical space for drawn rectangles:
//! - world units, origin at the centre of the view
//! - +X right, +Y up
//!
//! Screen (pointer) coordinates are physical pixels with a top-left origin and
//! +Y down; `interact::transform` converts between the two.

mod color;
mod rect;
mod viewport;

pub use color::Color;
pub use glam::Vec2;
pub use rect::Rect;
pub use viewport::ScreenViewport;
