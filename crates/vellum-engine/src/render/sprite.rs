use super::{DrawCtx, SpriteDraw};
use crate::atlas::TextureRegion;
use crate::coords::{Color, Rect};
use crate::interact::RenderedEntity;
use crate::scene::DrawItem;

/// Draws a sprite centred on its position and records it for hit testing.
///
/// Screen-fixed sprites follow the camera zoom: their position and size are
/// scaled by it even though their projection is not.
pub(crate) fn draw(item: DrawItem, region: TextureRegion, ctx: &mut DrawCtx<'_>) {
    let zoom = ctx.camera.zoom;
    let center = item.unit.translate(item.position, ctx.viewport.world);

    let mut rect = Rect::centered(center, region.size());
    if !item.projected {
        rect = rect.scaled(zoom);
    }
    let pivot = rect.center();

    ctx.backend.draw_sprite(&SpriteDraw {
        id: item.id.clone(),
        region,
        rect,
        pivot,
        rotation: item.rotation,
        tint: item.tint.unwrap_or(Color::WHITE),
    });

    ctx.registry.register(RenderedEntity {
        rect,
        pivot,
        zoom,
        item,
        region: Some(region),
    });
}
