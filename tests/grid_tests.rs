//! Grid tests - placement bounds, isolation and simultaneous line clearing

use block_puzzle::core::{Blocked, Grid, Shape};
use block_puzzle::types::{ShapeKind, GRID_SIZE};

fn full_row(grid: &mut [[bool; 9]; 9], row: usize) {
    grid[row] = [true; 9];
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    assert_eq!(grid.size(), GRID_SIZE);
    for row in 0..GRID_SIZE as i8 {
        for col in 0..GRID_SIZE as i8 {
            assert!(grid.is_empty(row, col), "cell ({row}, {col}) should be empty");
        }
    }
}

#[test]
fn test_out_of_bounds_is_never_placeable() {
    let grid = Grid::new();
    for kind in ShapeKind::ALL {
        let shape = Shape::of(kind);
        for row in -4..=12i8 {
            for col in -4..=12i8 {
                let inside = shape.cells().iter().all(|&(dy, dx)| {
                    let r = row + dy as i8;
                    let c = col + dx as i8;
                    (0..9).contains(&r) && (0..9).contains(&c)
                });
                assert_eq!(
                    grid.can_place(&shape, row, col),
                    inside,
                    "{} at ({row}, {col})",
                    kind.as_str()
                );
            }
        }
    }
}

#[test]
fn test_extreme_anchors_do_not_overflow() {
    let grid = Grid::new();
    let shape = Shape::of(ShapeKind::BarV4);
    assert!(!grid.can_place(&shape, i8::MAX, 0));
    assert!(!grid.can_place(&shape, i8::MIN, i8::MIN));
    assert_eq!(grid.check_place(&shape, 6, 0), Err(Blocked::OutOfBounds));
}

#[test]
fn test_place_only_touches_shape_cells() {
    let mut rows = [[false; 9]; 9];
    rows[0][0] = true;
    rows[8][8] = true;
    rows[3][5] = true;
    let mut grid = Grid::from_rows(rows);
    let before: Vec<bool> = grid.cells().to_vec();

    let shape = Shape::of(ShapeKind::Tee);
    assert_eq!(grid.place(&shape, 4, 2), Ok(4));

    for row in 0..9i8 {
        for col in 0..9i8 {
            let idx = row as usize * 9 + col as usize;
            let covered = shape
                .cells()
                .iter()
                .any(|&(dy, dx)| 4 + dy as i8 == row && 2 + dx as i8 == col);
            if covered {
                assert!(!before[idx]);
                assert!(grid.is_occupied(row, col));
            } else {
                assert_eq!(grid.cells()[idx], before[idx]);
            }
        }
    }
}

#[test]
fn test_can_place_is_pure() {
    let mut rows = [[false; 9]; 9];
    rows[2][2] = true;
    let grid = Grid::from_rows(rows);
    let before = grid.clone();
    for _ in 0..10 {
        let _ = grid.can_place(&Shape::of(ShapeKind::Square), 1, 1);
        let _ = grid.can_place(&Shape::of(ShapeKind::Square), 5, 5);
    }
    assert_eq!(grid, before);
}

#[test]
fn test_collision_rejects_without_change() {
    let mut rows = [[false; 9]; 9];
    rows[1][1] = true;
    let mut grid = Grid::from_rows(rows);
    let before = grid.clone();

    assert_eq!(grid.place(&Shape::of(ShapeKind::Square), 0, 0), Err(Blocked::Collision));
    assert_eq!(grid, before);
}

#[test]
fn test_row_and_column_clear_together() {
    let mut rows = [[false; 9]; 9];
    full_row(&mut rows, 0);
    for row in rows.iter_mut() {
        row[0] = true;
    }
    rows[5][5] = true;
    let mut grid = Grid::from_rows(rows);

    let cleared = grid.clear_full_lines();
    assert_eq!(cleared.rows.as_slice(), &[0]);
    assert_eq!(cleared.cols.as_slice(), &[0]);
    assert_eq!(cleared.count(), 2);

    for i in 0..9 {
        assert!(grid.is_empty(0, i));
        assert!(grid.is_empty(i, 0));
    }
    assert!(grid.is_occupied(5, 5));
    assert_eq!(grid.occupied_count(), 1);
}

#[test]
fn test_column_full_only_through_a_full_row_still_clears() {
    // Column 4 is full only because row 8 is; both must clear.
    let mut rows = [[false; 9]; 9];
    full_row(&mut rows, 8);
    for row in rows.iter_mut().take(8) {
        row[4] = true;
    }
    let mut grid = Grid::from_rows(rows);

    let cleared = grid.clear_full_lines();
    assert_eq!(cleared.rows.as_slice(), &[8]);
    assert_eq!(cleared.cols.as_slice(), &[4]);
    assert!(grid.cells().iter().all(|&c| !c));
}

#[test]
fn test_multiple_rows_clear() {
    let mut rows = [[false; 9]; 9];
    full_row(&mut rows, 2);
    full_row(&mut rows, 6);
    rows[4][1] = true;
    let mut grid = Grid::from_rows(rows);

    let cleared = grid.clear_full_lines();
    assert_eq!(cleared.rows.as_slice(), &[2, 6]);
    assert!(cleared.cols.is_empty());
    assert_eq!(grid.occupied_count(), 1);
}

#[test]
fn test_nothing_to_clear() {
    let mut rows = [[true; 9]; 9];
    for (i, row) in rows.iter_mut().enumerate() {
        row[(i * 2) % 9] = false;
    }
    let mut grid = Grid::from_rows(rows);
    let before = grid.clone();

    assert!(grid.clear_full_lines().is_empty());
    assert_eq!(grid, before);
}

#[test]
fn test_reset_empties_everything() {
    let mut grid = Grid::from_rows([[true; 9]; 9]);
    grid.reset();
    assert_eq!(grid.occupied_count(), 0);
}
