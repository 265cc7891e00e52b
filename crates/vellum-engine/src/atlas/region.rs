use std::fmt;

use glam::Vec2;

/// Identifies one page of one loaded atlas.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId {
    pub atlas: usize,
    pub page: usize,
}

impl TextureId {
    #[inline]
    pub const fn new(atlas: usize, page: usize) -> Self {
        Self { atlas, page }
    }
}

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.atlas, self.page)
    }
}

/// A named sub-rectangle of an atlas page, resolved for drawing.
///
/// `x`/`y` are page pixels with row 0 at the top of the image.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureRegion {
    pub texture: TextureId,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl TextureRegion {
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}
