//! Color palette, indexed by the engine's color indices.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb { r, g, b }
}

pub const BACKGROUND: Rgb = rgb(34, 33, 44);
pub const FRAME: Rgb = rgb(59, 58, 67);
pub const WHITE: Rgb = rgb(245, 245, 239);

const BLUE: Rgb = rgb(40, 194, 255);
const GREEN: Rgb = rgb(138, 255, 128);
const PINK: Rgb = rgb(255, 128, 191);
const YELLOW: Rgb = rgb(255, 255, 128);
const PEACH: Rgb = rgb(255, 149, 128);
const CYAN: Rgb = rgb(128, 255, 234);
const VIOLET: Rgb = rgb(149, 128, 255);

/// Slot 0 is the frame color; piece kinds bind to 1..=7.
const COLORS_INDEX: [Rgb; 9] = [
    FRAME, BLUE, CYAN, GREEN, YELLOW, PEACH, PINK, VIOLET, WHITE,
];

/// Look up a palette slot, falling back to the frame color.
pub fn color(index: u8) -> Rgb {
    COLORS_INDEX
        .get(index as usize)
        .copied()
        .unwrap_or(COLORS_INDEX[0])
}
