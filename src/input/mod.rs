//! Driver-side keyboard sampling.
//!
//! The engine wants raw per-frame edge/held signals and does its own
//! repeat throttling, so this layer only tracks which keys are down
//! and which went down since the last frame was taken.

mod keyboard;

pub use keyboard::{should_quit, Keyboard};
