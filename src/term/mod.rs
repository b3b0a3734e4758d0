//! Terminal front-end: palette and crossterm-based renderer.
//!
//! Strictly a consumer of the engine's read-only output surface
//! (`grid.boxes()`, the active shape and its projection, the next
//! shape preview, counters and flags). Nothing here feeds back into
//! the simulation.

mod palette;
mod renderer;

pub use palette::{color, Rgb, BACKGROUND, FRAME, WHITE};
pub use renderer::Renderer;
