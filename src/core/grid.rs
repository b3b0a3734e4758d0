//! Settled playfield storage and line-clear mechanics.
//!
//! The grid is 10x20 with row 0 at the bottom and rows growing upward.
//! A flat array keeps lookups allocation-free; rows at or above the
//! visible top are open sky so a piece may stand partially above the
//! field while it falls in.

use arrayvec::ArrayVec;

use crate::core::shape::Shape;
use crate::types::{CellBox, PieceKind, GRID_HEIGHT, GRID_WIDTH};

const GRID_SIZE: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;

/// A single grid cell: empty, or settled with a piece kind.
pub type Cell = Option<PieceKind>;

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Row-major from the bottom: index = row * GRID_WIDTH + col.
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    pub fn width(&self) -> i32 {
        GRID_WIDTH
    }

    pub fn height(&self) -> i32 {
        GRID_HEIGHT
    }

    #[inline]
    fn index(col: i32, row: i32) -> Option<usize> {
        if col < 0 || col >= GRID_WIDTH || row < 0 || row >= GRID_HEIGHT {
            return None;
        }
        Some((row * GRID_WIDTH + col) as usize)
    }

    /// Stored cell at a position, or `None` when out of bounds.
    pub fn get(&self, col: i32, row: i32) -> Option<Cell> {
        Self::index(col, row).map(|idx| self.cells[idx])
    }

    /// Store a cell. Returns false when the position is out of bounds.
    pub fn set(&mut self, col: i32, row: i32, cell: Cell) -> bool {
        match Self::index(col, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Collision oracle for shapes. The side walls and the floor count
    /// as occupied; rows above the visible top do not, so pieces can
    /// enter from above.
    pub fn occupied(&self, col: i32, row: i32) -> bool {
        if col < 0 || col >= GRID_WIDTH || row < 0 {
            return true;
        }
        if row >= GRID_HEIGHT {
            return false;
        }
        self.cells[(row * GRID_WIDTH + col) as usize].is_some()
    }

    /// True when the shape cannot legally settle here: some cell is
    /// already occupied or sits outside the walls. Checked immediately
    /// before planting; a hit means game over.
    pub fn cannot_plant(&self, shape: &Shape) -> bool {
        shape.cells().iter().any(|&(col, row)| self.occupied(col, row))
    }

    /// Copy the shape's cells into the grid. Cells above the visible
    /// top are clipped; when that happens the game is about to end.
    pub fn plant(&mut self, shape: &Shape) {
        for &(col, row) in shape.cells().iter() {
            if let Some(idx) = Self::index(col, row) {
                self.cells[idx] = Some(shape.kind);
            }
        }
    }

    fn row_full(&self, row: i32) -> bool {
        let start = (row * GRID_WIDTH) as usize;
        self.cells[start..start + GRID_WIDTH as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Rows completed by a just-planted shape, ascending. Only the rows
    /// the shape touches are scanned; nothing else can have changed.
    pub fn rows_to_clear(&self, shape: &Shape) -> ArrayVec<i32, 4> {
        let mut rows: ArrayVec<i32, 4> = ArrayVec::new();
        for &(_, row) in shape.cells().iter() {
            if row < 0 || row >= GRID_HEIGHT || rows.contains(&row) {
                continue;
            }
            if self.row_full(row) {
                rows.push(row);
            }
        }
        rows.sort_unstable();
        rows
    }

    /// Remove the listed rows (ascending) and shift everything above
    /// each one down. Earlier removals shift later targets, so the
    /// index is compensated by the number of rows already gone.
    pub fn clear_rows(&mut self, rows: &[i32]) {
        for (removed, &row) in rows.iter().enumerate() {
            self.remove_row(row - removed as i32);
        }
    }

    fn remove_row(&mut self, row: i32) {
        if row < 0 || row >= GRID_HEIGHT {
            return;
        }
        let width = GRID_WIDTH as usize;
        for r in row..GRID_HEIGHT - 1 {
            let src = ((r + 1) * GRID_WIDTH) as usize;
            let dst = (r * GRID_WIDTH) as usize;
            self.cells.copy_within(src..src + width, dst);
        }
        let top = ((GRID_HEIGHT - 1) * GRID_WIDTH) as usize;
        for cell in &mut self.cells[top..top + width] {
            *cell = None;
        }
    }

    /// Read-only enumeration of every settled cell, for the renderer.
    pub fn boxes(&self) -> impl Iterator<Item = CellBox> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, cell)| {
            cell.map(|kind| {
                CellBox::new(
                    idx as i32 % GRID_WIDTH,
                    idx as i32 / GRID_WIDTH,
                    kind.color_index(),
                )
            })
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(grid: &mut Grid, row: i32) {
        for col in 0..GRID_WIDTH {
            grid.set(col, row, Some(PieceKind::I));
        }
    }

    #[test]
    fn walls_and_floor_are_occupied_sky_is_open() {
        let grid = Grid::new();
        assert!(grid.occupied(-1, 0));
        assert!(grid.occupied(GRID_WIDTH, 0));
        assert!(grid.occupied(0, -1));
        assert!(!grid.occupied(0, GRID_HEIGHT));
        assert!(!grid.occupied(0, 0));
    }

    #[test]
    fn remove_row_shifts_rows_above_down() {
        let mut grid = Grid::new();
        fill_row(&mut grid, 0);
        grid.set(3, 1, Some(PieceKind::T));
        grid.set(5, 2, Some(PieceKind::L));

        grid.remove_row(0);

        assert_eq!(grid.get(3, 0), Some(Some(PieceKind::T)));
        assert_eq!(grid.get(5, 1), Some(Some(PieceKind::L)));
        assert_eq!(grid.get(5, 2), Some(None));
    }

    #[test]
    fn clear_rows_compensates_for_earlier_removals() {
        let mut grid = Grid::new();
        fill_row(&mut grid, 0);
        fill_row(&mut grid, 2);
        grid.set(4, 1, Some(PieceKind::S));
        grid.set(4, 3, Some(PieceKind::J));

        grid.clear_rows(&[0, 2]);

        // S was above one cleared row, J above two.
        assert_eq!(grid.get(4, 0), Some(Some(PieceKind::S)));
        assert_eq!(grid.get(4, 1), Some(Some(PieceKind::J)));
        assert_eq!(grid.get(4, 2), Some(None));
        assert_eq!(grid.get(4, 3), Some(None));
    }

    #[test]
    fn boxes_report_position_and_color() {
        let mut grid = Grid::new();
        grid.set(2, 5, Some(PieceKind::T));
        let boxes: Vec<CellBox> = grid.boxes().collect();
        assert_eq!(boxes, vec![CellBox::new(2, 5, PieceKind::T.color_index())]);
    }
}
