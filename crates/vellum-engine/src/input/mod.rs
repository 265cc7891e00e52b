//! Host input.
//!
//! `PointerTracker` is platform-agnostic and produces `RawPointer` samples.
//! Platform code translates window events into tracker calls.

pub mod platform;
mod tracker;

pub use tracker::{PointerTracker, TouchPhase};
