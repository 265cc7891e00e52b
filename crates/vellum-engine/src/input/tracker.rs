use glam::Vec2;

use crate::interact::{PointerKind, RawPointer};

/// Touch lifecycle, independent of the window system.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

/// Turns cursor, button and touch notifications into `RawPointer` samples.
///
/// Tracks the last pointer position (button events carry none) and which
/// button or finger is held, so moves can be told apart from drags.
#[derive(Debug, Default)]
pub struct PointerTracker {
    position: Vec2,
    /// Button index or finger id currently held.
    held: Option<i32>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn is_held(&self) -> bool {
        self.held.is_some()
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) -> RawPointer {
        self.position = Vec2::new(x, y);
        match self.held {
            Some(button) => RawPointer::new(x, y, PointerKind::Dragged, button, true),
            None => RawPointer::new(x, y, PointerKind::Moved, 0, false),
        }
    }

    /// A mouse button changed state at the last known cursor position.
    pub fn mouse_input(&mut self, button: i32, pressed: bool) -> RawPointer {
        let Vec2 { x, y } = self.position;
        if pressed {
            self.held = Some(button);
            return RawPointer::new(x, y, PointerKind::Down, button, true);
        }

        if self.held == Some(button) {
            self.held = None;
        }
        RawPointer::new(x, y, PointerKind::Up, button, self.held.is_some())
    }

    pub fn touch(&mut self, finger: i32, phase: TouchPhase, x: f32, y: f32) -> RawPointer {
        self.position = Vec2::new(x, y);
        match phase {
            TouchPhase::Started => {
                self.held = Some(finger);
                RawPointer::new(x, y, PointerKind::Down, finger, true)
            }
            TouchPhase::Moved => RawPointer::new(x, y, PointerKind::Dragged, finger, true),
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.held == Some(finger) {
                    self.held = None;
                }
                RawPointer::new(x, y, PointerKind::Up, finger, false)
            }
        }
    }

    /// Cursor left the window; a held button stays held.
    pub fn cursor_left(&mut self) {
        log::trace!("PointerTracker: cursor left at {:?}", self.position);
    }

    /// Forgets held buttons, e.g. on focus loss where releases are not delivered.
    pub fn release_all(&mut self) {
        if let Some(button) = self.held.take() {
            log::debug!("PointerTracker: dropping held button {button}");
        }
    }
}
