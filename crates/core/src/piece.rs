//! Piece module - tetromino shape matrices and the active piece
//!
//! A shape is a square boolean matrix (2x2 for O, 4x4 for I, 3x3 for the rest)
//! in row-major order. Rotating clockwise transposes the matrix and reverses
//! each row, so the piece turns around the matrix centre.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::{PieceKind, Rotation};

/// Largest shape matrix side
pub const MAX_SHAPE_SIZE: usize = 4;

/// Occupied `(x, y)` offsets of a shape, or absolute `(col, row)` of a piece
pub type Minos = ArrayVec<(i32, i32), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: usize,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Canonical spawn-orientation shape of a kind
    pub fn of(kind: PieceKind) -> Self {
        let matrix = kind.matrix();
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in matrix.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Self {
            size: matrix.len(),
            cells,
        }
    }

    /// Side length of the matrix
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && self.cells[y][x]
    }

    /// Clockwise quarter turn: transpose, then reverse each row
    pub fn rotated_cw(&self) -> Self {
        let n = self.size;
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in cells.iter_mut().enumerate().take(n) {
            for (x, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.cells[n - 1 - x][y];
            }
        }
        Self { size: n, cells }
    }

    /// Occupied offsets as `(x, y)`, row by row
    pub fn minos(&self) -> Minos {
        let mut out = Minos::new();
        for y in 0..self.size {
            for x in 0..self.size {
                if self.cells[y][x] {
                    out.push((x as i32, y as i32));
                }
            }
        }
        out
    }

    /// First matrix row holding an occupied cell
    pub fn top_row(&self) -> usize {
        (0..self.size)
            .find(|&y| self.cells[y][..self.size].iter().any(|&c| c))
            .unwrap_or(0)
    }

    /// Matrix as nested rows, for snapshots
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.size)
            .map(|y| self.cells[y][..self.size].to_vec())
            .collect()
    }
}

/// The falling (or preview) piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub rotation: Rotation,
    /// Column of the shape matrix's left edge
    pub x: i32,
    /// Row of the shape matrix's top edge (negative while above the grid)
    pub y: i32,
}

impl Piece {
    /// Create a piece at the spawn anchor: centred horizontally, top occupied
    /// row on grid row 0.
    pub fn spawn(kind: PieceKind, cols: usize) -> Self {
        let shape = Shape::of(kind);
        let x = (cols.saturating_sub(shape.size()) / 2) as i32;
        let y = -(shape.top_row() as i32);
        Self {
            kind,
            shape,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    /// Absolute `(col, row)` of each occupied cell
    pub fn cells(&self) -> Minos {
        self.shape
            .minos()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Same piece shifted by `(dx, dy)`
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Candidate for the next clockwise orientation at the current anchor
    pub fn rotated_cw(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }
}

/// Read-only view of a piece for hosts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceView {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
    pub shape: Vec<Vec<bool>>,
}

impl From<&Piece> for PieceView {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            shape: value.shape.to_rows(),
        }
    }
}
