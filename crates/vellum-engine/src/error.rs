use std::fmt;

use crate::atlas::TextureId;

/// Errors raised while drawing a frame or resolving pointer hits.
///
/// `UnknownRegion` and `UnknownFont` are configuration errors: the draw item
/// names something that was never loaded. The remaining variants mean the
/// engine's own bookkeeping is inconsistent and the frame cannot continue.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// No loaded atlas contains a region with this name.
    UnknownRegion(String),
    /// No font was registered under this name.
    UnknownFont(String),
    /// A sprite entity reached hit testing without its texture region.
    SpriteWithoutRegion { id: String },
    /// A region points at an atlas page that does not exist.
    MissingTexture(TextureId),
    /// An atlas page could not be decoded into a raster.
    Raster { texture: TextureId, message: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnknownRegion(name) => {
                write!(f, "no loaded atlas contains a region named '{name}'")
            }
            RenderError::UnknownFont(name) => write!(f, "no font registered as '{name}'"),
            RenderError::SpriteWithoutRegion { id } => {
                write!(f, "sprite entity '{id}' was registered without a texture region")
            }
            RenderError::MissingTexture(texture) => {
                write!(f, "atlas page {texture} does not exist")
            }
            RenderError::Raster { texture, message } => {
                write!(f, "failed to decode atlas page {texture}: {message}")
            }
        }
    }
}

impl std::error::Error for RenderError {}
