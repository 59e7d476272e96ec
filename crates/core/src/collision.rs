//! Collision checks - the single source of truth for placement legality
//!
//! A placement collides when any occupied cell lands left of column 0, right
//! of the last column, at or below the bottom row, or on an occupied visible
//! cell. Cells above the top row never collide.

use crate::grid::Grid;
use crate::piece::{Piece, Shape};

/// Whether `piece` shifted by `(dx, dy)` would collide with `grid`
pub fn collides(piece: &Piece, grid: &Grid, dx: i32, dy: i32) -> bool {
    shape_collides(&piece.shape, piece.x + dx, piece.y + dy, grid)
}

/// Whether `shape` anchored at `(x, y)` would collide with `grid`
pub fn shape_collides(shape: &Shape, x: i32, y: i32, grid: &Grid) -> bool {
    shape
        .minos()
        .iter()
        .any(|&(mx, my)| grid.is_occupied(y + my, x + mx))
}

/// Rows `piece` can fall before it rests
pub fn drop_distance(piece: &Piece, grid: &Grid) -> u32 {
    let mut distance = 0;
    while !collides(piece, grid, 0, distance as i32 + 1) {
        distance += 1;
    }
    distance
}
