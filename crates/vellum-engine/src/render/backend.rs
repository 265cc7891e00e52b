use std::cell::RefCell;
use std::rc::Rc;

use glam::{Mat4, Vec2};

use crate::atlas::TextureRegion;
use crate::coords::{Color, Rect};
use crate::text::TextLayout;

/// Projection for one batch.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
    /// `true` for the camera's world projection, `false` for screen-fixed.
    pub projected: bool,
    pub matrix: Mat4,
}

/// A sprite ready for rasterisation.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDraw {
    pub id: String,
    pub region: TextureRegion,
    pub rect: Rect,
    pub pivot: Vec2,
    /// Degrees, clockwise.
    pub rotation: f32,
    pub tint: Color,
}

/// Shaped text ready for rasterisation.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub id: String,
    pub font: Option<String>,
    pub layout: TextLayout,
    pub rect: Rect,
    pub pivot: Vec2,
    /// Factor from layout units to drawn size.
    pub scale: f32,
    /// Degrees, clockwise.
    pub rotation: f32,
    pub tint: Color,
}

/// Receives the frame's draw decisions.
///
/// Between `begin_batch` and `end_batch` every draw uses that batch's
/// projection. Batches never nest.
pub trait RenderBackend {
    fn clear(&mut self, color: Color);
    fn begin_batch(&mut self, projection: &Projection);
    fn end_batch(&mut self);
    fn draw_sprite(&mut self, sprite: &SpriteDraw);
    fn draw_text(&mut self, text: &TextDraw);
}

#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    Clear(Color),
    BeginBatch(Projection),
    EndBatch,
    Sprite(SpriteDraw),
    Text(TextDraw),
}

/// Headless backend that records every call.
///
/// Clones share one log, so a handle kept outside a process sees what the
/// process drew.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    calls: Rc<RefCell<Vec<BackendCall>>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.borrow().clone()
    }

    /// Returns and forgets everything recorded so far.
    pub fn take(&self) -> Vec<BackendCall> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    /// Ids of drawn items in draw order.
    pub fn drawn_ids(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                BackendCall::Sprite(s) => Some(s.id.clone()),
                BackendCall::Text(t) => Some(t.id.clone()),
                _ => None,
            })
            .collect()
    }
}

impl RenderBackend for RecordingBackend {
    fn clear(&mut self, color: Color) {
        self.calls.borrow_mut().push(BackendCall::Clear(color));
    }

    fn begin_batch(&mut self, projection: &Projection) {
        self.calls.borrow_mut().push(BackendCall::BeginBatch(*projection));
    }

    fn end_batch(&mut self) {
        self.calls.borrow_mut().push(BackendCall::EndBatch);
    }

    fn draw_sprite(&mut self, sprite: &SpriteDraw) {
        self.calls.borrow_mut().push(BackendCall::Sprite(sprite.clone()));
    }

    fn draw_text(&mut self, text: &TextDraw) {
        self.calls.borrow_mut().push(BackendCall::Text(text.clone()));
    }
}
