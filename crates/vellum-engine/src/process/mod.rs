//! Process and channel primitives.
//!
//! The engine's processes only need three things from a host runtime: a
//! once-per-frame tick with `pre_iteration` / `execute` / `post_iteration`
//! hooks, a way to pull messages ([`InPort`]) and a way to push them
//! ([`OutPort`]). [`Scheduler`] and [`channel`] are a minimal single-threaded
//! runtime providing exactly that.

mod event;
mod ports;
mod scheduler;

pub use event::{AppEvent, CameraChange, CameraStatus};
pub use ports::{channel, InPort, OutPort, Receiver, Sender};
pub use scheduler::{Process, Scheduler};
