use glam::Vec2;

use super::{DrawCtx, TextDraw};
use crate::coords::{Color, Rect};
use crate::interact::RenderedEntity;
use crate::scene::DrawItem;
use crate::text::TextLayout;

/// Draws shaped text centred on its position and records it for hit testing.
///
/// Text rotates around its position. Untinted text is black.
pub(crate) fn draw(item: DrawItem, font: Option<String>, layout: TextLayout, ctx: &mut DrawCtx<'_>) {
    let zoom = ctx.camera.zoom;
    let mut anchor = item.unit.translate(item.position, ctx.viewport.world);
    let mut scale = 1.0;
    if !item.projected {
        anchor *= zoom;
        scale = zoom;
    }

    let rect = Rect::centered(anchor, Vec2::new(layout.width, layout.height) * scale);

    ctx.backend.draw_text(&TextDraw {
        id: item.id.clone(),
        font,
        layout,
        rect,
        pivot: anchor,
        scale,
        rotation: item.rotation,
        tint: item.tint.unwrap_or(Color::BLACK),
    });

    ctx.registry.register(RenderedEntity {
        rect,
        pivot: anchor,
        zoom,
        item,
        region: None,
    });
}
