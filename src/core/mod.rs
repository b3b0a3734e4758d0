//! The simulation engine: playfield grid, active piece, randomizer,
//! and the frame-stepped game state machine.
//!
//! Everything here is pure, single-threaded game logic with no
//! dependency on the terminal or the driver loop.

pub mod game;
pub mod grid;
pub mod randomizer;
pub mod shape;
pub mod tuning;

pub use game::Game;
pub use grid::Grid;
pub use randomizer::{Randomizer, SimpleRng};
pub use shape::Shape;
pub use tuning::Tuning;
