//! Grid, piece geometry and collision through the facade crate

use tetris_engine::core::collision::shape_collides;
use tetris_engine::core::{collides, drop_distance, resolve_line_clears, Grid, Piece, Shape};
use tetris_engine::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_standard_grid_is_empty() {
    let grid = Grid::standard();
    assert_eq!(grid.rows(), BOARD_HEIGHT);
    assert_eq!(grid.cols(), BOARD_WIDTH);
    assert_eq!(grid.cells().len(), BOARD_HEIGHT * BOARD_WIDTH);
    assert_eq!(grid.filled_count(), 0);
}

#[test]
fn test_out_of_bounds_queries() {
    let grid = Grid::new(6, 5);
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, 5), None);
    assert_eq!(grid.get(6, 0), None);

    // walls and floor are solid, the space above the top is open
    assert!(grid.is_occupied(0, -1));
    assert!(grid.is_occupied(0, 5));
    assert!(grid.is_occupied(6, 2));
    assert!(!grid.is_occupied(-3, 2));
}

#[test]
fn test_set_rejects_out_of_bounds() {
    let mut grid = Grid::new(6, 5);
    assert!(grid.set(5, 4, PieceKind::T));
    assert!(!grid.set(6, 0, PieceKind::T));
    assert!(!grid.set(-1, 0, PieceKind::T));
    assert!(!grid.set(0, 5, PieceKind::T));
    assert_eq!(grid.filled_count(), 1);
}

#[test]
fn test_clear_keeps_upper_rows_in_order() {
    let mut grid = Grid::new(6, 4);
    // row 2: marker, row 3: full, row 4: marker, row 5: full
    grid.set(2, 0, PieceKind::S);
    grid.set(4, 3, PieceKind::Z);
    for col in 0..4 {
        grid.set(3, col, PieceKind::I);
        grid.set(5, col, PieceKind::O);
    }

    let clear = resolve_line_clears(&mut grid);
    assert_eq!(clear.rows, vec![5, 3]);
    assert_eq!(clear.count(), 2);

    assert_eq!(grid.get(5, 3), Some(Some(PieceKind::Z)));
    assert_eq!(grid.get(4, 0), Some(Some(PieceKind::S)));
    assert!(grid.row(0).iter().all(Option::is_none));
    assert!(grid.row(1).iter().all(Option::is_none));
    assert_eq!(grid.filled_count(), 2);
}

#[test]
fn test_no_full_rows_leaves_grid_untouched() {
    let mut grid = Grid::standard();
    grid.set(19, 0, PieceKind::J);
    let before = grid.clone();

    let clear = resolve_line_clears(&mut grid);
    assert!(clear.is_empty());
    assert_eq!(grid, before);
}

#[test]
fn test_every_kind_spawns_on_top_row() {
    let grid = Grid::standard();
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind, grid.cols());
        let top = piece.cells().iter().map(|&(_, row)| row).min().unwrap();
        assert_eq!(top, 0, "{:?}", kind);
        assert_eq!(piece.rotation, Rotation::North);
        assert!(!collides(&piece, &grid, 0, 0));
    }
}

#[test]
fn test_four_rotations_return_to_spawn_shape() {
    for kind in PieceKind::ALL {
        let shape = Shape::of(kind);
        let turned = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
        assert_eq!(turned, shape, "{:?}", kind);
        assert_eq!(shape.minos().len(), 4);
    }
}

#[test]
fn test_collision_against_walls_floor_and_cells() {
    let mut grid = Grid::standard();
    let piece = Piece::spawn(PieceKind::O, grid.cols());

    assert!(!collides(&piece, &grid, -4, 0));
    assert!(collides(&piece, &grid, -5, 0));
    assert!(!collides(&piece, &grid, 4, 0));
    assert!(collides(&piece, &grid, 5, 0));
    assert!(!collides(&piece, &grid, 0, 18));
    assert!(collides(&piece, &grid, 0, 19));

    grid.set(10, 4, PieceKind::L);
    assert!(collides(&piece, &grid, 0, 9));
    assert!(shape_collides(&piece.shape, piece.x, 9, &grid));
    assert_eq!(drop_distance(&piece, &grid), 8);
}

#[test]
fn test_cells_above_top_do_not_collide() {
    let grid = Grid::standard();
    let piece = Piece::spawn(PieceKind::I, grid.cols()).shifted(0, -2);
    assert!(!collides(&piece, &grid, 0, 0));
}
