use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;

use super::{PageSource, TextureAtlas, TextureId, TextureRegion};
use crate::error::RenderError;

/// Name → region lookup across every loaded atlas.
///
/// Region names are expected to be unique across all atlases. If two atlases
/// declare the same name the first one added wins and a warning is logged.
#[derive(Debug, Default)]
pub struct TextureRegionCache {
    atlases: Vec<TextureAtlas>,
    regions: HashMap<String, TextureRegion>,
}

impl TextureRegionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every atlas file in order.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut cache = Self::new();
        for path in paths {
            cache.add_atlas(TextureAtlas::load(path)?);
        }
        Ok(cache)
    }

    /// Adds an atlas and indexes its regions. Returns the atlas index.
    pub fn add_atlas(&mut self, atlas: TextureAtlas) -> usize {
        let index = self.atlases.len();

        for region in atlas.regions() {
            if self.regions.contains_key(&region.name) {
                log::warn!(
                    "TextureRegionCache: region '{}' in atlas {} shadowed by an earlier atlas",
                    region.name,
                    index
                );
                continue;
            }
            self.regions.insert(
                region.name.clone(),
                TextureRegion {
                    texture: TextureId::new(index, region.page),
                    x: region.x,
                    y: region.y,
                    width: region.width,
                    height: region.height,
                },
            );
        }

        self.atlases.push(atlas);
        index
    }

    /// Looks up a region by name.
    pub fn region(&self, name: &str) -> Result<TextureRegion, RenderError> {
        self.regions
            .get(name)
            .copied()
            .ok_or_else(|| RenderError::UnknownRegion(name.to_string()))
    }

    /// Pixel source of an atlas page.
    pub fn page_source(&self, texture: TextureId) -> Option<&PageSource> {
        self.atlases
            .get(texture.atlas)
            .and_then(|atlas| atlas.pages().get(texture.page))
            .map(|page| &page.source)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
