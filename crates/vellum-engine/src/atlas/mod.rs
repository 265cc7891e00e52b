//! Texture atlases and the two caches built on them.
//!
//! - [`TextureRegionCache`]: region name → [`TextureRegion`], built once from a
//!   set of atlases and queried by the sprite renderer every frame.
//! - [`RasterAlphaCache`]: atlas page → decoded RGBA raster, filled lazily by
//!   pixel-accurate hit testing.

mod atlas;
mod cache;
mod raster;
mod region;

pub use atlas::{AtlasPage, AtlasParseError, AtlasRegion, PageSource, TextureAtlas};
pub use cache::TextureRegionCache;
pub use raster::RasterAlphaCache;
pub use region::{TextureId, TextureRegion};
