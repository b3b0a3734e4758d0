//! Shared pure data types: piece kinds, board dimensions, and the
//! per-frame input signals the engine consumes.
//!
//! Nothing in this module depends on the terminal layer; the engine and
//! the driver both build on these definitions.

/// Playfield dimensions (visible rows; pieces may stand above row 19
/// while falling in).
pub const GRID_WIDTH: i32 = 10;
pub const GRID_HEIGHT: i32 = 20;

/// Simulated frames per second for the fixed-step driver loop.
pub const FRAMES_PER_SECOND: u64 = 60;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Palette slot for this kind. Index 0 is the frame color, so piece
    /// colors occupy 1..=7.
    pub fn color_index(self) -> u8 {
        match self {
            PieceKind::J => 1,
            PieceKind::I => 2,
            PieceKind::S => 3,
            PieceKind::O => 4,
            PieceKind::L => 5,
            PieceKind::Z => 6,
            PieceKind::T => 7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// One occupied cell as seen by a renderer: position plus palette slot.
/// Read-only; produced by the grid and by shapes, never fed back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBox {
    pub col: i32,
    pub row: i32,
    pub color_index: u8,
}

impl CellBox {
    pub fn new(col: i32, row: i32, color_index: u8) -> Self {
        Self {
            col,
            row,
            color_index,
        }
    }
}

/// Edge-plus-level signal for a key that supports hold-to-repeat.
///
/// `pressed` is true exactly on the frame the key went down; `held` is
/// the raw level, true every frame the key remains down. The engine
/// does its own repeat throttling, so the driver must not debounce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySignal {
    pub pressed: bool,
    pub held: bool,
}

/// All input the engine consumes for one simulated frame.
///
/// Escape, enter, up, and space only matter as down-edges; left, right,
/// and down additionally carry a held level for the repeat throttle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub escape: bool,
    pub enter: bool,
    pub up: bool,
    pub space: bool,
    pub left: KeySignal,
    pub right: KeySignal,
    pub down: KeySignal,
}

impl InputFrame {
    /// A frame with no input at all.
    pub fn idle() -> Self {
        Self::default()
    }
}
