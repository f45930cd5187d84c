//! Snapshot module - the read-only view handed to renderers once per frame
//!
//! Snapshots are plain `Copy` data. [`crate::BoardEngine::snapshot_into`]
//! refills one in place, so a frame loop never allocates.

use crate::factory::Piece;
use crate::shapes::{get_shape, ShapeCells};
use crate::types::{PieceKind, Rotation, GRID_HEIGHT, GRID_WIDTH};

/// Copyable view of a piece for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Absolute cells covered by the piece, including any above the grid
    pub fn cells(&self) -> ShapeCells {
        get_shape(self.kind, self.rotation)
            .cells()
            .into_iter()
            .map(|(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
            .collect()
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything a renderer reads once per frame.
///
/// `grid` holds color identities: 0 for empty, 1..=7 for locked blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: [[u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_speed_ms: u32,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            active: None,
            next: PieceKind::I,
            score: 0,
            level: 1,
            lines: 0,
            fall_speed_ms: crate::types::BASE_FALL_MS,
            game_over: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_cells_offset_from_position() {
        let active = ActiveSnapshot::from(Piece::new(PieceKind::O));
        assert_eq!(active.cells().as_slice(), &[(4, 0), (5, 0), (4, 1), (5, 1)]);
    }

    #[test]
    fn test_active_cells_clamp_at_extremes() {
        let active = ActiveSnapshot {
            kind: PieceKind::I,
            rotation: Rotation::North,
            x: i8::MAX,
            y: i8::MIN,
        };
        let cells = active.cells();
        assert_eq!(cells.len(), 4);
        assert!(cells.iter().all(|&(x, y)| x == i8::MAX && y == i8::MIN));
    }
}
