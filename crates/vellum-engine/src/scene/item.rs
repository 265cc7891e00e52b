use glam::Vec2;

use super::PositionUnit;
use crate::coords::Color;

/// Sprite payload: the name of a region in one of the loaded atlases.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteCmd {
    pub texture: String,
}

/// Text payload. `font: None` selects the default font.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: Option<String>,
}

/// The closed set of drawable kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawKind {
    Sprite(SpriteCmd),
    Text(TextCmd),
}

/// One drawable for one frame.
///
/// Items are produced upstream every frame and consumed by the render process
/// in the same frame. `id` names the entity for hit testing and need not be
/// unique; several items may share it (e.g. the states of one widget).
///
/// # Example
/// ```rust,ignore
/// DrawItem::sprite("ok-button", "button_base")
///     .at(0.0, -40.0)
///     .order(2)
///     .screen_fixed()
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub id: String,
    pub position: Vec2,
    pub unit: PositionUnit,
    /// Degrees, clockwise on screen. Drawing and hit testing share this convention.
    pub rotation: f32,
    pub tint: Option<Color>,
    pub render_order: i32,
    /// `true`: world space, moves with the camera. `false`: fixed to the screen.
    pub projected: bool,
    pub kind: DrawKind,
}

impl DrawItem {
    fn with_kind(id: impl Into<String>, kind: DrawKind) -> Self {
        Self {
            id: id.into(),
            position: Vec2::ZERO,
            unit: PositionUnit::Pixels,
            rotation: 0.0,
            tint: None,
            render_order: 0,
            projected: true,
            kind,
        }
    }

    pub fn sprite(id: impl Into<String>, texture: impl Into<String>) -> Self {
        Self::with_kind(id, DrawKind::Sprite(SpriteCmd { texture: texture.into() }))
    }

    pub fn text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_kind(id, DrawKind::Text(TextCmd { text: text.into(), font: None }))
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    pub fn unit(mut self, unit: PositionUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn tint(mut self, color: Color) -> Self {
        self.tint = Some(color);
        self
    }

    pub fn order(mut self, render_order: i32) -> Self {
        self.render_order = render_order;
        self
    }

    pub fn projected(mut self, projected: bool) -> Self {
        self.projected = projected;
        self
    }

    /// Shorthand for `projected(false)`.
    pub fn screen_fixed(self) -> Self {
        self.projected(false)
    }

    /// Selects a registered font. Has no effect on sprites.
    pub fn font(mut self, font: impl Into<String>) -> Self {
        if let DrawKind::Text(cmd) = &mut self.kind {
            cmd.font = Some(font.into());
        }
        self
    }

    #[inline]
    pub fn is_sprite(&self) -> bool {
        matches!(self.kind, DrawKind::Sprite(_))
    }
}
