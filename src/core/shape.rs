//! The active (or previewed) piece: geometry, try-moves, rotation, and
//! the ghost/preview projections.
//!
//! A shape is an anchor plus a fixed offset table indexed by kind and
//! rotation state. The anchor sits at the top-left of the piece's
//! bounding box; offsets extend rightward (+col) and downward (-row),
//! matching the grid's rows-grow-upward orientation.
//!
//! Movement and rotation are "try" operations: a pure collision test
//! against the grid followed by a commit only on success, reported as a
//! bool. A rejected attempt leaves the shape untouched.

use crate::core::grid::Grid;
use crate::types::{CellBox, PieceKind, GRID_HEIGHT};

/// Relative cell offsets for one rotation state.
pub type Offsets = [(i32, i32); 4];

/// Column new pieces spawn at; the top row of the piece starts on the
/// top visible row.
pub const SPAWN_COL: i32 = 3;
pub const SPAWN_ROW: i32 = GRID_HEIGHT - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub kind: PieceKind,
    pub rotation: usize,
    pub col: i32,
    pub row: i32,
}

impl Shape {
    /// A freshly dealt piece at the spawn position.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            col: SPAWN_COL,
            row: SPAWN_ROW,
        }
    }

    pub fn color_index(&self) -> u8 {
        self.kind.color_index()
    }

    fn offsets(kind: PieceKind, rotation: usize) -> Offsets {
        let table: [Offsets; 4] = match kind {
            PieceKind::I => [
                [(0, 0), (1, 0), (2, 0), (3, 0)],
                [(0, 0), (0, -1), (0, -2), (0, -3)],
                [(0, 0), (1, 0), (2, 0), (3, 0)],
                [(0, 0), (0, -1), (0, -2), (0, -3)],
            ],
            PieceKind::O => [[(0, 0), (1, 0), (0, -1), (1, -1)]; 4],
            PieceKind::T => [
                [(1, 0), (0, -1), (1, -1), (2, -1)],
                [(0, 0), (0, -1), (1, -1), (0, -2)],
                [(0, 0), (1, 0), (2, 0), (1, -1)],
                [(1, 0), (0, -1), (1, -1), (1, -2)],
            ],
            PieceKind::S => [
                [(1, 0), (2, 0), (0, -1), (1, -1)],
                [(0, 0), (0, -1), (1, -1), (1, -2)],
                [(1, 0), (2, 0), (0, -1), (1, -1)],
                [(0, 0), (0, -1), (1, -1), (1, -2)],
            ],
            PieceKind::Z => [
                [(0, 0), (1, 0), (1, -1), (2, -1)],
                [(1, 0), (0, -1), (1, -1), (0, -2)],
                [(0, 0), (1, 0), (1, -1), (2, -1)],
                [(1, 0), (0, -1), (1, -1), (0, -2)],
            ],
            PieceKind::J => [
                [(0, 0), (0, -1), (1, -1), (2, -1)],
                [(0, 0), (1, 0), (0, -1), (0, -2)],
                [(0, 0), (1, 0), (2, 0), (2, -1)],
                [(1, 0), (1, -1), (0, -2), (1, -2)],
            ],
            PieceKind::L => [
                [(2, 0), (0, -1), (1, -1), (2, -1)],
                [(0, 0), (0, -1), (0, -2), (1, -2)],
                [(0, 0), (1, 0), (2, 0), (0, -1)],
                [(0, 0), (1, 0), (1, -1), (1, -2)],
            ],
        };
        table[rotation % 4]
    }

    fn cells_at(&self, col: i32, row: i32, rotation: usize) -> [(i32, i32); 4] {
        let offsets = Self::offsets(self.kind, rotation);
        offsets.map(|(dc, dr)| (col + dc, row + dr))
    }

    /// Absolute cells the shape currently occupies.
    pub fn cells(&self) -> [(i32, i32); 4] {
        self.cells_at(self.col, self.row, self.rotation)
    }

    fn fits(&self, grid: &Grid, cells: &[(i32, i32); 4]) -> bool {
        cells.iter().all(|&(col, row)| !grid.occupied(col, row))
    }

    /// Try the next rotation state (wrapping). Rejected on any
    /// collision with walls, floor, or settled cells; no wall kicks.
    pub fn rotate(&mut self, grid: &Grid) -> bool {
        let next = (self.rotation + 1) % 4;
        let cells = self.cells_at(self.col, self.row, next);
        if !self.fits(grid, &cells) {
            return false;
        }
        self.rotation = next;
        true
    }

    fn try_shift(&mut self, grid: &Grid, dc: i32, dr: i32) -> bool {
        let cells = self.cells_at(self.col + dc, self.row + dr, self.rotation);
        if !self.fits(grid, &cells) {
            return false;
        }
        self.col += dc;
        self.row += dr;
        true
    }

    pub fn move_left(&mut self, grid: &Grid) -> bool {
        self.try_shift(grid, -1, 0)
    }

    pub fn move_right(&mut self, grid: &Grid) -> bool {
        self.try_shift(grid, 1, 0)
    }

    pub fn move_down(&mut self, grid: &Grid) -> bool {
        self.try_shift(grid, 0, -1)
    }

    /// Pure test for the gravity step; `descend` commits it.
    pub fn can_descend(&self, grid: &Grid) -> bool {
        let cells = self.cells_at(self.col, self.row - 1, self.rotation);
        self.fits(grid, &cells)
    }

    /// Unconditional one-row descent. Callers must have checked
    /// `can_descend` first.
    pub fn descend(&mut self) {
        self.row -= 1;
    }

    fn drop_distance(&self, grid: &Grid) -> i32 {
        let mut distance = 0;
        loop {
            let cells = self.cells_at(self.col, self.row - distance - 1, self.rotation);
            if !self.fits(grid, &cells) {
                return distance;
            }
            distance += 1;
        }
    }

    /// Teleport to the lowest legal resting position (hard drop).
    /// Always succeeds, even when the drop distance is zero.
    pub fn drop(&mut self, grid: &Grid) -> bool {
        self.row -= self.drop_distance(grid);
        true
    }

    /// The cell layout an instantaneous drop would produce (the ghost
    /// outline), computed without mutating the shape.
    pub fn projection(&self, grid: &Grid) -> Shape {
        Shape {
            row: self.row - self.drop_distance(grid),
            ..*self
        }
    }

    /// Pure translation to an arbitrary anchor, ignoring collision.
    /// Used to draw the next-piece preview outside the playfield.
    pub fn positioned_projection(&self, col: i32, row: i32) -> Shape {
        Shape { col, row, ..*self }
    }

    /// Renderable records for the shape's current cells.
    pub fn boxes(&self) -> impl Iterator<Item = CellBox> + '_ {
        let color = self.color_index();
        self.cells()
            .into_iter()
            .map(move |(col, row)| CellBox::new(col, row, color))
    }
}
