//! gridfall: a falling-block puzzle engine with a terminal front-end.
//!
//! The engine (`core`) is a frame-stepped state machine driven by one
//! `tick` per frame with already-sampled input signals; `input` turns
//! crossterm key events into those signals, `term` draws the engine's
//! read-only output surface, and the binary owns the frame loop.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
