//! Grid module - the playfield of locked cells
//!
//! The grid is 10 columns by 20 rows, stored as a flat row-major array so it
//! never allocates. Coordinates are `(x, y)` with `x` in 0..10 (left to right)
//! and `y` in 0..20 (top to bottom).

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Row indices removed by one line-clear pass
pub type ClearedRows = ArrayVec<usize, { GRID_HEIGHT as usize }>;

/// The playfield - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    /// Whether `(x, y)` lies on the grid
    pub fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < GRID_WIDTH as i8 && y >= 0 && y < GRID_HEIGHT as i8
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= GRID_HEIGHT as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = GRID_WIDTH as usize;
        let start = y * width;
        &self.cells[start..start + width]
    }

    /// Remove every full row and drop the rows above into the gap.
    ///
    /// Equivalent to deleting each full row and inserting an empty row at the
    /// top; surviving rows keep their relative order. Returns the indices of the
    /// removed rows, bottom to top, as they were before the pass.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = GRID_WIDTH as usize;
        let mut write_y = GRID_HEIGHT as usize;

        for read_y in (0..GRID_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        // Rows left above the last survivor are the inserted empty rows.
        self.cells[..write_y * width].fill(None);

        cleared_rows
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Write color identities (0 = empty, 1..=7 = piece) into a render grid
    pub fn write_color_grid(&self, out: &mut [[u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = self.cells[y * GRID_WIDTH as usize + x].map_or(0, PieceKind::color_id);
            }
        }
    }

    /// Empty the whole grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill row `y` with `kind`, leaving the listed columns empty
    #[cfg(test)]
    pub fn fill_row_except(&mut self, y: i8, kind: PieceKind, holes: &[i8]) {
        for x in 0..GRID_WIDTH as i8 {
            if !holes.contains(&x) {
                self.set(x, y, Some(kind));
            }
        }
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

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(9, 0), Some(9));
        assert_eq!(Grid::index(0, 1), Some(10));
        assert_eq!(Grid::index(9, 19), Some(199));
        assert_eq!(Grid::index(-1, 0), None);
        assert_eq!(Grid::index(10, 0), None);
        assert_eq!(Grid::index(0, 20), None);
    }

    #[test]
    fn test_clear_keeps_order_of_survivors() {
        let mut grid = Grid::new();
        // Row 19 full, row 18 marker, row 17 full, row 16 marker.
        grid.fill_row_except(19, PieceKind::I, &[]);
        grid.set(0, 18, Some(PieceKind::T));
        grid.fill_row_except(17, PieceKind::I, &[]);
        grid.set(1, 16, Some(PieceKind::S));

        let cleared = grid.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);

        assert_eq!(grid.get(0, 19), Some(Some(PieceKind::T)));
        assert_eq!(grid.get(1, 18), Some(Some(PieceKind::S)));
        assert_eq!(grid.filled_count(), 2);
    }

    #[test]
    fn test_clear_without_full_rows_is_noop() {
        let mut grid = Grid::new();
        grid.fill_row_except(19, PieceKind::O, &[4]);
        let before = grid.clone();
        assert!(grid.clear_full_rows().is_empty());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_color_grid() {
        let mut grid = Grid::new();
        grid.set(2, 5, Some(PieceKind::L));
        let mut out = [[0u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
        grid.write_color_grid(&mut out);
        assert_eq!(out[5][2], 7);
        assert_eq!(out.iter().flatten().filter(|&&v| v != 0).count(), 1);
    }
}
