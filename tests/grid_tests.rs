//! Grid tests - bounds, occupancy and line clearing through the public API

use falling_blocks::core::Grid;
use falling_blocks::types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};

fn fill_row(grid: &mut Grid, y: i8, kind: PieceKind) {
    for x in 0..GRID_WIDTH as i8 {
        grid.set(x, y, Some(kind));
    }
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    for y in 0..GRID_HEIGHT as i8 {
        for x in 0..GRID_WIDTH as i8 {
            assert_eq!(grid.get(x, y), Some(None), "cell ({x}, {y})");
        }
    }
    assert_eq!(grid.filled_count(), 0);
}

#[test]
fn test_grid_out_of_bounds() {
    let mut grid = Grid::new();
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(GRID_WIDTH as i8, 0), None);
    assert_eq!(grid.get(0, GRID_HEIGHT as i8), None);

    assert!(!grid.set(-1, 5, Some(PieceKind::T)));
    assert!(!grid.is_occupied(-1, 5));
    assert_eq!(grid.filled_count(), 0);
}

#[test]
fn test_grid_set_and_occupied() {
    let mut grid = Grid::new();
    assert!(grid.set(4, 10, Some(PieceKind::Z)));
    assert!(grid.is_occupied(4, 10));
    assert_eq!(grid.get(4, 10), Some(Some(PieceKind::Z)));

    assert!(grid.set(4, 10, None));
    assert!(!grid.is_occupied(4, 10));
}

#[test]
fn test_row_full_detection() {
    let mut grid = Grid::new();
    for x in 0..GRID_WIDTH as i8 - 1 {
        grid.set(x, 19, Some(PieceKind::J));
    }
    assert!(!grid.is_row_full(19));
    grid.set(GRID_WIDTH as i8 - 1, 19, Some(PieceKind::J));
    assert!(grid.is_row_full(19));
    assert!(!grid.is_row_full(GRID_HEIGHT as usize));
}

#[test]
fn test_clear_single_row_shifts_down() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 19, PieceKind::I);
    grid.set(3, 18, Some(PieceKind::O));

    let cleared = grid.clear_full_rows();
    assert_eq!(cleared.len(), 1);
    assert_eq!(grid.get(3, 19), Some(Some(PieceKind::O)));
    assert_eq!(grid.get(3, 18), Some(None));
    assert_eq!(grid.filled_count(), 1);
}

#[test]
fn test_clear_four_rows() {
    let mut grid = Grid::new();
    for y in 16..20 {
        fill_row(&mut grid, y, PieceKind::I);
    }
    grid.set(0, 15, Some(PieceKind::L));

    let cleared = grid.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 18, 17, 16]);
    assert_eq!(grid.get(0, 19), Some(Some(PieceKind::L)));
    assert_eq!(grid.filled_count(), 1);
}

#[test]
fn test_clear_adjacent_full_rows_rescans_same_index() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 19, PieceKind::S);
    fill_row(&mut grid, 18, PieceKind::Z);
    grid.set(9, 17, Some(PieceKind::T));

    assert_eq!(grid.clear_full_rows().len(), 2);
    assert_eq!(grid.get(9, 19), Some(Some(PieceKind::T)));
    assert!(!grid.is_row_full(19));
}

#[test]
fn test_clear_resets_everything() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 0, PieceKind::T);
    grid.clear();
    assert_eq!(grid, Grid::default());
}
