//! Draw item model and the per-frame draw queue.
//!
//! Responsibilities:
//! - describe one drawable (sprite or text) independent of any backend
//! - provide deterministic ordering (render order, then space, then arrival)
//! - translate logical positions into world units

mod item;
mod key;
mod position;
mod queue;

pub use item::{DrawItem, DrawKind, SpriteCmd, TextCmd};
pub use key::SortKey;
pub use position::PositionUnit;
pub use queue::DrawQueue;
