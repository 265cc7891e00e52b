//! Vellum engine crate.
//!
//! Frame-oriented 2D presentation core: draw ordering across the projected and
//! screen-fixed spaces, the resize policy state machine, and pointer hit testing
//! against what was actually drawn.

pub mod atlas;
pub mod camera;
pub mod config;
pub mod coords;
pub mod error;
pub mod input;
pub mod interact;
pub mod logging;
pub mod process;
pub mod render;
pub mod scene;
pub mod text;

pub use config::RenderConfig;
pub use error::RenderError;
