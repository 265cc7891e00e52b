//! Text shaping seam, the fontdue-backed font system, and the per-frame layout cache.

mod font_system;
mod layout_cache;

pub use font_system::{FontLoadError, FontSystem};
pub use layout_cache::LayoutCache;

use crate::error::RenderError;

/// One glyph of a shaped string, relative to the layout's top-left corner
/// (+Y down, as the rasteriser reports it).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlyphPlacement {
    pub ch: char,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A shaped string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextLayout {
    pub width: f32,
    pub height: f32,
    pub glyphs: Vec<GlyphPlacement>,
}

/// Turns a string into a [`TextLayout`].
///
/// `font: None` selects the shaper's default font.
pub trait TextShaper {
    fn layout(&self, font: Option<&str>, text: &str) -> Result<TextLayout, RenderError>;
}
