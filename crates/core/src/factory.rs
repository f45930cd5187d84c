//! Piece factory - uniform random piece generation
//!
//! Every spawn picks one of the seven kinds with equal probability. The
//! generator is seeded so a game can be replayed exactly from its seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::shapes::canonical_shape;
use crate::types::{PieceKind, Rotation, GRID_WIDTH};

/// A piece on (or above) the grid.
///
/// `(x, y)` is the top-left corner of the rotated bounding box. `y` may be
/// negative while the piece is still partly above the visible grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece of `kind` at the spawn position for that kind
    pub fn new(kind: PieceKind) -> Self {
        let (x, y) = spawn_position(kind);
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    /// Color identity written into the grid on lock (1..=7)
    pub fn color_id(&self) -> u8 {
        self.kind.color_id()
    }
}

/// Spawn column and row for a kind: horizontally centered, top row.
pub fn spawn_position(kind: PieceKind) -> (i8, i8) {
    let shape_w = canonical_shape(kind).width() as i8;
    ((GRID_WIDTH as i8) / 2 - shape_w / 2, 0)
}

/// Seeded source of new pieces
#[derive(Debug, Clone)]
pub struct PieceFactory {
    seed: u64,
    rng: StdRng,
}

impl PieceFactory {
    /// Create a factory whose sequence is fully determined by `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The seed this factory was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw the next kind, uniformly over all seven
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..PieceKind::COUNT)]
    }

    /// Spawn a random piece at its spawn position
    pub fn spawn(&mut self) -> Piece {
        Piece::new(self.next_kind())
    }

    /// Spawn a specific kind at its spawn position (does not advance the RNG)
    pub fn spawn_kind(&self, kind: PieceKind) -> Piece {
        Piece::new(kind)
    }
}

impl Default for PieceFactory {
    fn default() -> Self {
        Self::new(1)
    }
}
