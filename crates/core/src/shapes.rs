//! Shapes module - canonical piece layouts and clockwise rotation
//!
//! Each kind has one canonical boolean matrix. Rotated orientations are derived
//! on demand by reversing the rows and transposing, so the canonical table is
//! never mutated.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Rotation, CELLS_PER_PIECE, MAX_SHAPE_SIDE};

/// Offset of a single occupied cell from the top-left of the bounding box
pub type CellOffset = (i8, i8);

/// Occupied cells of a shape, row-major
pub type ShapeCells = ArrayVec<CellOffset, CELLS_PER_PIECE>;

/// A boolean matrix of at most 4x4 cells.
///
/// Only the top-left `width x height` region is meaningful; everything outside
/// it is always `false`, which keeps derived `PartialEq` exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    width: u8,
    height: u8,
    rows: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl ShapeMatrix {
    /// Build a matrix from rows of 0/1 values.
    const fn from_rows<const W: usize, const H: usize>(src: [[u8; W]; H]) -> Self {
        let mut rows = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        let mut y = 0;
        while y < H {
            let mut x = 0;
            while x < W {
                rows[y][x] = src[y][x] != 0;
                x += 1;
            }
            y += 1;
        }
        Self {
            width: W as u8,
            height: H as u8,
            rows,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at column `x`, row `y` is occupied.
    /// Out-of-range coordinates are empty.
    pub fn is_filled(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height && self.rows[y as usize][x as usize]
    }

    /// One clockwise quarter turn: reverse the rows, then transpose.
    ///
    /// Cell `(x, y)` of the result is cell `(y, h - 1 - x)` of `self`, and the
    /// width and height swap.
    pub fn rotated_cw(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut rows = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (new_y, row) in rows.iter_mut().enumerate().take(w) {
            for (new_x, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.rows[h - 1 - new_x][new_y];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            rows,
        }
    }

    /// `turns` clockwise quarter turns, taken mod 4.
    pub fn rotated(&self, turns: u8) -> Self {
        let mut shape = *self;
        for _ in 0..turns % 4 {
            shape = shape.rotated_cw();
        }
        shape
    }

    /// Offsets of every occupied cell, scanning rows top to bottom.
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_filled(x, y) {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }
}

/// Canonical layouts, indexed by [`PieceKind::index`].
static SHAPES: [ShapeMatrix; PieceKind::COUNT] = [
    // I
    ShapeMatrix::from_rows([[1, 1, 1, 1]]),
    // O
    ShapeMatrix::from_rows([[1, 1], [1, 1]]),
    // T
    ShapeMatrix::from_rows([[0, 1, 0], [1, 1, 1]]),
    // S
    ShapeMatrix::from_rows([[0, 1, 1], [1, 1, 0]]),
    // Z
    ShapeMatrix::from_rows([[1, 1, 0], [0, 1, 1]]),
    // J
    ShapeMatrix::from_rows([[1, 0, 0], [1, 1, 1]]),
    // L
    ShapeMatrix::from_rows([[0, 0, 1], [1, 1, 1]]),
];

/// The unrotated layout for a piece kind
pub fn canonical_shape(kind: PieceKind) -> &'static ShapeMatrix {
    &SHAPES[kind.index()]
}

/// The layout for a piece kind in a given rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> ShapeMatrix {
    canonical_shape(kind).rotated(rotation.quarter_turns())
}
