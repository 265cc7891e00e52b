use std::collections::HashMap;

use image::RgbaImage;

use super::{PageSource, TextureId, TextureRegionCache};
use crate::error::RenderError;

/// Decoded atlas pages kept on the CPU for alpha queries.
///
/// Pages are decoded the first time a hit test touches them and stay resident
/// until [`invalidate`](Self::invalidate) is called for that page.
#[derive(Debug, Default)]
pub struct RasterAlphaCache {
    rasters: HashMap<TextureId, RgbaImage>,
}

impl RasterAlphaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alpha of page pixel `(x, y)`, row 0 at the top.
    ///
    /// Coordinates outside the page read as fully transparent.
    pub fn alpha(
        &mut self,
        pages: &TextureRegionCache,
        texture: TextureId,
        x: i64,
        y: i64,
    ) -> Result<u8, RenderError> {
        let raster = self.raster(pages, texture)?;

        if x < 0 || y < 0 || x >= raster.width() as i64 || y >= raster.height() as i64 {
            return Ok(0);
        }
        Ok(raster.get_pixel(x as u32, y as u32)[3])
    }

    /// Drops the decoded page. Returns whether it was resident.
    pub fn invalidate(&mut self, texture: TextureId) -> bool {
        self.rasters.remove(&texture).is_some()
    }

    pub fn clear(&mut self) {
        self.rasters.clear();
    }

    #[inline]
    pub fn is_resident(&self, texture: TextureId) -> bool {
        self.rasters.contains_key(&texture)
    }

    fn raster(&mut self, pages: &TextureRegionCache, texture: TextureId) -> Result<&RgbaImage, RenderError> {
        if !self.rasters.contains_key(&texture) {
            let decoded = decode(pages, texture)?;
            self.rasters.insert(texture, decoded);
        }
        self.rasters
            .get(&texture)
            .ok_or(RenderError::MissingTexture(texture))
    }
}

fn decode(pages: &TextureRegionCache, texture: TextureId) -> Result<RgbaImage, RenderError> {
    match pages.page_source(texture) {
        None => Err(RenderError::MissingTexture(texture)),
        Some(PageSource::Memory(img)) => Ok(img.clone()),
        Some(PageSource::File(path)) => {
            log::debug!("RasterAlphaCache: decoding {} for page {}", path.display(), texture);
            image::open(path)
                .map(|img| img.to_rgba8())
                .map_err(|e| RenderError::Raster { texture, message: e.to_string() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::TextureAtlas;
    use image::Rgba;
    use std::path::PathBuf;

    fn cache_with_page(img: RgbaImage) -> TextureRegionCache {
        let mut atlas = TextureAtlas::new();
        atlas.add_page(PageSource::Memory(img));
        let mut cache = TextureRegionCache::new();
        cache.add_atlas(atlas);
        cache
    }

    fn half_transparent() -> RgbaImage {
        // Left column opaque, right column clear.
        RgbaImage::from_fn(2, 2, |x, _| if x == 0 { Rgba([255, 0, 0, 255]) } else { Rgba([0, 0, 0, 0]) })
    }

    #[test]
    fn reads_alpha_lazily() {
        let pages = cache_with_page(half_transparent());
        let mut raster = RasterAlphaCache::new();
        let id = TextureId::new(0, 0);

        assert!(!raster.is_resident(id));
        assert_eq!(raster.alpha(&pages, id, 0, 1).unwrap(), 255);
        assert_eq!(raster.alpha(&pages, id, 1, 1).unwrap(), 0);
        assert!(raster.is_resident(id));
    }

    #[test]
    fn out_of_bounds_reads_transparent() {
        let pages = cache_with_page(half_transparent());
        let mut raster = RasterAlphaCache::new();
        let id = TextureId::new(0, 0);
        assert_eq!(raster.alpha(&pages, id, -1, 0).unwrap(), 0);
        assert_eq!(raster.alpha(&pages, id, 0, 2).unwrap(), 0);
    }

    #[test]
    fn invalidate_forces_reload() {
        let pages = cache_with_page(half_transparent());
        let mut raster = RasterAlphaCache::new();
        let id = TextureId::new(0, 0);
        raster.alpha(&pages, id, 0, 0).unwrap();

        assert!(raster.invalidate(id));
        assert!(!raster.is_resident(id));
        assert!(!raster.invalidate(id));
        assert_eq!(raster.alpha(&pages, id, 0, 0).unwrap(), 255);
    }

    #[test]
    fn missing_page_is_an_error() {
        let pages = TextureRegionCache::new();
        let mut raster = RasterAlphaCache::new();
        let id = TextureId::new(0, 0);
        assert_eq!(raster.alpha(&pages, id, 0, 0), Err(RenderError::MissingTexture(id)));
    }

    #[test]
    fn undecodable_file_is_a_raster_error() {
        let mut atlas = TextureAtlas::new();
        atlas.add_page(PageSource::File(PathBuf::from("no/such/page.png")));
        let mut pages = TextureRegionCache::new();
        pages.add_atlas(atlas);

        let mut raster = RasterAlphaCache::new();
        assert!(matches!(
            raster.alpha(&pages, TextureId::new(0, 0), 0, 0),
            Err(RenderError::Raster { .. })
        ));
    }
}
