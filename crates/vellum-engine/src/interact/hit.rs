use glam::Vec2;

use super::{transform, FrameRegistry, PointerEvent, PointerKind, PointerSample, RawPointer, RenderedEntity};
use crate::atlas::{RasterAlphaCache, TextureId, TextureRegion, TextureRegionCache};
use crate::camera::Camera;
use crate::coords::ScreenViewport;
use crate::error::RenderError;
use crate::scene::DrawKind;

/// Everything a hit test reads besides the sample and the entity.
pub(crate) struct HitContext<'a> {
    pub camera: &'a Camera,
    pub viewport: &'a ScreenViewport,
    pub regions: &'a TextureRegionCache,
}

/// Buffers pointer samples between frames and resolves them against the
/// frame's [`FrameRegistry`].
///
/// Within one frame the pointer is treated as stationary: the first sample
/// that lands on an entity fixes the target for every later sample of that
/// frame.
#[derive(Debug, Default)]
pub struct HitTestEngine {
    pending: Vec<RawPointer>,
    last: Option<RawPointer>,
    raster: RasterAlphaCache,
}

impl HitTestEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers a raw sample until the next [`resolve`](Self::resolve).
    #[inline]
    pub fn push(&mut self, raw: RawPointer) {
        self.pending.push(raw);
    }

    #[inline]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Drops the decoded raster of a texture that is being deleted.
    pub fn invalidate_texture(&mut self, texture: TextureId) -> bool {
        self.raster.invalidate(texture)
    }

    /// Resolves every buffered sample, oldest first.
    ///
    /// With nothing buffered, a pointer that was still held or hovering at the
    /// end of the previous resolve produces one `NoChange` sample at its last
    /// screen position.
    pub fn resolve(
        &mut self,
        registry: &FrameRegistry,
        camera: &Camera,
        viewport: &ScreenViewport,
        regions: &TextureRegionCache,
    ) -> Result<Vec<PointerEvent>, RenderError> {
        let mut samples = std::mem::take(&mut self.pending);

        if samples.is_empty() {
            match self.last {
                Some(last) if last.is_active() => samples.push(RawPointer {
                    kind: PointerKind::NoChange,
                    ..last
                }),
                _ => return Ok(Vec::new()),
            }
        }

        let ctx = HitContext { camera, viewport, regions };
        let mut target: Option<&RenderedEntity> = None;
        let mut events = Vec::with_capacity(samples.len());

        for raw in samples.iter().copied() {
            let sample = transform(raw, camera, viewport);

            if target.is_none() {
                target = self.find_target(&sample, registry, &ctx)?;
            }

            events.push(PointerEvent {
                sample,
                on_projected: target.is_some_and(|e| e.item.projected),
                target: target.map(|e| e.item.id.clone()),
            });
        }

        self.last = samples.last().copied();
        samples.clear();
        self.pending = samples;

        log::trace!(
            "HitTestEngine: resolved {} samples, target {:?}",
            events.len(),
            target.map(|e| e.item.id.as_str())
        );
        Ok(events)
    }

    /// Highest render order wins; on equal order a projected entity beats a
    /// screen-fixed one.
    fn find_target<'r>(
        &mut self,
        sample: &PointerSample,
        registry: &'r FrameRegistry,
        ctx: &HitContext<'_>,
    ) -> Result<Option<&'r RenderedEntity>, RenderError> {
        let mut best: Option<&'r RenderedEntity> = None;

        for entity in registry.iter() {
            if !self.touches_visible_part(sample, entity, ctx)? {
                continue;
            }
            let better = match best {
                None => true,
                Some(b) => {
                    entity.item.render_order > b.item.render_order
                        || (entity.item.render_order == b.item.render_order
                            && entity.item.projected
                            && !b.item.projected)
                }
            };
            if better {
                best = Some(entity);
            }
        }

        Ok(best)
    }

    fn touches_visible_part(
        &mut self,
        sample: &PointerSample,
        entity: &RenderedEntity,
        ctx: &HitContext<'_>,
    ) -> Result<bool, RenderError> {
        let scale = ctx.viewport.screen_to_world_scale();
        let unprojected = sample.unprojected / scale;

        // Outside the rendered box (letterbox bars, stretched edges) nothing is drawn.
        let half = ctx.camera.viewport * 0.5;
        if unprojected.x.abs() > half.x || unprojected.y.abs() > half.y {
            return Ok(false);
        }

        let mut position = if entity.item.projected {
            let cam = ctx.camera.position;
            (sample.projected - cam) * ctx.viewport.window_to_box_ratio() + cam
        } else {
            unprojected
        };

        if entity.item.rotation != 0.0 {
            position = counter_rotate(position, entity.pivot, entity.item.rotation);
        }

        if !entity.rect.contains(position) {
            return Ok(false);
        }

        match &entity.item.kind {
            DrawKind::Text(_) => Ok(true),
            DrawKind::Sprite(_) => {
                let region = entity
                    .region
                    .ok_or_else(|| RenderError::SpriteWithoutRegion { id: entity.item.id.clone() })?;
                let draw_scale = if entity.item.projected { 1.0 } else { entity.zoom };
                let (x, y) = texel(&region, (position - entity.rect.origin) / draw_scale);
                Ok(self.raster.alpha(ctx.regions, region.texture, x, y)? != 0)
            }
        }
    }
}

/// Undoes a clockwise rotation of `degrees` around `pivot`, i.e. rotates the
/// point clockwise by `360 - degrees`.
fn counter_rotate(point: Vec2, pivot: Vec2, degrees: f32) -> Vec2 {
    let clockwise = (360.0 - degrees).to_radians();
    Vec2::from_angle(-clockwise).rotate(point - pivot) + pivot
}

/// Page pixel under `local`, an offset from the region's bottom-left corner
/// in region pixels. Page rows grow downwards, so Y flips.
fn texel(region: &TextureRegion, local: Vec2) -> (i64, i64) {
    let w = region.width as i64;
    let h = region.height as i64;
    let col = (local.x.floor() as i64).clamp(0, (w - 1).max(0));
    let row = (h - 1 - local.y.floor() as i64).clamp(0, (h - 1).max(0));
    (region.x as i64 + col, region.y as i64 + row)
}
