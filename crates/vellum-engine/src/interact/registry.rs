use glam::Vec2;

use crate::atlas::TextureRegion;
use crate::coords::Rect;
use crate::scene::DrawItem;

/// What was drawn where, for one item in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEntity {
    /// Drawn rectangle in the item's own space (world units, +Y up).
    pub rect: Rect,
    /// Rotation pivot used when drawing.
    pub pivot: Vec2,
    /// Camera zoom active when the item was drawn.
    pub zoom: f32,
    pub item: DrawItem,
    /// Source region for sprites; `None` for text.
    pub region: Option<TextureRegion>,
}

/// Per-frame arena of [`RenderedEntity`] records.
///
/// Filled by the renderers during the draw pass, read by hit testing after it,
/// and cleared before the next frame draws anything.
#[derive(Debug, Default)]
pub struct FrameRegistry {
    entities: Vec<RenderedEntity>,
}

impl FrameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Releases every entity of the previous frame. Keeps capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.entities.clear();
    }

    #[inline]
    pub fn register(&mut self, entity: RenderedEntity) -> usize {
        self.entities.push(entity);
        self.entities.len() - 1
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&RenderedEntity> {
        self.entities.get(index)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &RenderedEntity> {
        self.entities.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
