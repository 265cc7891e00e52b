use ::winit::event::{ElementState, MouseButton, TouchPhase as WinitTouchPhase, WindowEvent};

use crate::input::{PointerTracker, TouchPhase};
use crate::interact::RawPointer;

/// Translates a winit `WindowEvent` into a raw pointer sample.
///
/// Positions stay in physical pixels, the same space as the window size
/// reported by resize events. Returns `None` for events that carry no
/// pointer information.
pub fn translate_window_event(tracker: &mut PointerTracker, event: &WindowEvent) -> Option<RawPointer> {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            Some(tracker.cursor_moved(position.x as f32, position.y as f32))
        }

        WindowEvent::MouseInput { state, button, .. } => {
            let pressed = matches!(state, ElementState::Pressed);
            Some(tracker.mouse_input(map_mouse_button(*button), pressed))
        }

        WindowEvent::Touch(touch) => {
            let phase = match touch.phase {
                WinitTouchPhase::Started => TouchPhase::Started,
                WinitTouchPhase::Moved => TouchPhase::Moved,
                WinitTouchPhase::Ended => TouchPhase::Ended,
                WinitTouchPhase::Cancelled => TouchPhase::Cancelled,
            };
            let (x, y) = (touch.location.x as f32, touch.location.y as f32);
            Some(tracker.touch(finger_id(touch.id), phase, x, y))
        }

        WindowEvent::CursorLeft { .. } => {
            tracker.cursor_left();
            None
        }

        WindowEvent::Focused(false) => {
            tracker.release_all();
            None
        }

        _ => None,
    }
}

/// winit finger ids are `u64`; ids beyond `i32` saturate instead of wrapping.
fn finger_id(id: u64) -> i32 {
    i32::try_from(id).unwrap_or(i32::MAX)
}

fn map_mouse_button(button: MouseButton) -> i32 {
    match button {
        MouseButton::Left => 0,
        MouseButton::Right => 1,
        MouseButton::Middle => 2,
        MouseButton::Back => 3,
        MouseButton::Forward => 4,
        MouseButton::Other(v) => i32::from(v),
    }
}
