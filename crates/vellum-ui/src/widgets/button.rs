use std::fmt;

use anyhow::Result;
use vellum_engine::interact::{PointerEvent, PointerKind};
use vellum_engine::process::{InPort, OutPort, Process};
use vellum_engine::scene::DrawItem;

use crate::event::ButtonClick;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ButtonError {
    /// The base, over and down items must describe the same entity.
    MismatchedStateIds { base: String, over: String, down: String },
}

impl fmt::Display for ButtonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButtonError::MismatchedStateIds { base, over, down } => write!(
                f,
                "button states must share one id (base '{base}', over '{over}', down '{down}')"
            ),
        }
    }
}

impl std::error::Error for ButtonError {}

/// Which of the three looks the button currently shows.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ButtonState {
    Base,
    Over,
    Down,
}

pub struct ButtonPorts {
    pub render: Box<dyn OutPort<DrawItem>>,
    pub clicks: Box<dyn OutPort<ButtonClick>>,
    pub pointer: Box<dyn InPort<PointerEvent>>,
}

/// Where the current press began, relative to this button.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Press {
    Released,
    OnThis,
    Elsewhere,
}

/// A three-state push button driven by resolved pointer events.
///
/// A press that starts off the button disables it until release, so dragging
/// onto it neither highlights nor clicks. A press that starts on the button
/// keeps it down while the pointer wanders off.
pub struct ButtonProcess {
    id: String,
    base: DrawItem,
    over: DrawItem,
    down: DrawItem,

    state: ButtonState,
    press: Press,

    ports: ButtonPorts,
}

impl ButtonProcess {
    pub fn new(base: DrawItem, over: DrawItem, down: DrawItem, ports: ButtonPorts) -> Result<Self, ButtonError> {
        if base.id != over.id || over.id != down.id {
            return Err(ButtonError::MismatchedStateIds {
                base: base.id,
                over: over.id,
                down: down.id,
            });
        }

        Ok(Self {
            id: base.id.clone(),
            base,
            over,
            down,
            state: ButtonState::Base,
            press: Press::Released,
            ports,
        })
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn state(&self) -> ButtonState {
        self.state
    }

    fn track_press(&mut self, event: &PointerEvent) {
        if !event.touched() {
            self.press = Press::Released;
        } else if self.press == Press::Released {
            self.press = if event.targets(&self.id) { Press::OnThis } else { Press::Elsewhere };
        }
    }

    fn handle(&mut self, event: &PointerEvent) {
        self.track_press(event);

        if self.press == Press::Elsewhere {
            self.state = ButtonState::Base;
            return;
        }

        if !event.targets(&self.id) {
            if self.press != Press::OnThis {
                self.state = ButtonState::Base;
            }
            return;
        }

        match event.kind() {
            PointerKind::Down => self.state = ButtonState::Down,
            kind => {
                if kind == PointerKind::Up && self.state == ButtonState::Down {
                    log::debug!("ButtonProcess: '{}' clicked", self.id);
                    self.ports.clicks.offer(ButtonClick { id: self.id.clone() });
                }
                self.state = if event.touched() { ButtonState::Down } else { ButtonState::Over };
            }
        }
    }

    fn current_item(&self) -> &DrawItem {
        match self.state {
            ButtonState::Base => &self.base,
            ButtonState::Over => &self.over,
            ButtonState::Down => &self.down,
        }
    }
}

impl Process for ButtonProcess {
    fn execute(&mut self) -> Result<()> {
        while let Some(event) = self.ports.pointer.poll() {
            self.handle(&event);
        }
        Ok(())
    }

    fn post_iteration(&mut self) -> Result<()> {
        let item = self.current_item().clone();
        self.ports.render.offer(item);
        Ok(())
    }

    fn name(&self) -> &str {
        "button"
    }
}
