use glam::Vec2;

/// What happened to the pointer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PointerKind {
    Down,
    Up,
    /// Moved while held.
    Dragged,
    /// Moved while not held.
    Moved,
    /// Synthesized while the pointer is idle so consumers keep seeing it.
    NoChange,
}

/// A pointer sample as delivered by the host, in screen pixels
/// (top-left origin, +Y down).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RawPointer {
    pub screen: Vec2,
    pub kind: PointerKind,
    /// Mouse button for `Down`/`Up`, pointer id for drags and touches.
    pub argument: i32,
    /// Whether a button or finger is held after this sample.
    pub touched: bool,
}

impl RawPointer {
    pub fn new(x: f32, y: f32, kind: PointerKind, argument: i32, touched: bool) -> Self {
        Self { screen: Vec2::new(x, y), kind, argument, touched }
    }

    /// Whether the pointer is still pressed or hovering after this sample.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.touched || self.kind != PointerKind::Up
    }
}

/// A raw sample with both derived coordinate pairs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerSample {
    pub raw: RawPointer,
    /// World space through the camera.
    pub projected: Vec2,
    /// Pixels from the window centre, +Y up.
    pub unprojected: Vec2,
}

/// A resolved pointer sample, emitted downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub sample: PointerSample,
    /// Whether the hit entity was drawn in world space. `false` when nothing was hit.
    pub on_projected: bool,
    /// Id of the hit entity.
    pub target: Option<String>,
}

impl PointerEvent {
    #[inline]
    pub fn kind(&self) -> PointerKind {
        self.sample.raw.kind
    }

    #[inline]
    pub fn touched(&self) -> bool {
        self.sample.raw.touched
    }

    /// Coordinates in the space of the hit entity.
    #[inline]
    pub fn position(&self) -> Vec2 {
        if self.on_projected { self.sample.projected } else { self.sample.unprojected }
    }

    #[inline]
    pub fn targets(&self, id: &str) -> bool {
        self.target.as_deref() == Some(id)
    }
}
