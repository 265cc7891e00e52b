//! Vellum UI: widget processes that talk to the render process over channels.
//!
//! A widget offers the `DrawItem` for its current look each frame and reacts
//! to the `PointerEvent`s the render process resolves against it.
//!
//! ```rust,ignore
//! use vellum_engine::process::{channel, Scheduler};
//! use vellum_engine::scene::DrawItem;
//! use vellum_ui::widgets::{ButtonPorts, ButtonProcess};
//!
//! let button = ButtonProcess::new(
//!     DrawItem::sprite("ok", "ok-base"),
//!     DrawItem::sprite("ok", "ok-over"),
//!     DrawItem::sprite("ok", "ok-down"),
//!     ports,
//! )?;
//! scheduler.add(button);
//! ```

pub mod event;
pub mod widgets;

pub use event::ButtonClick;
