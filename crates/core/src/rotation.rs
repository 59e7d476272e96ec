//! Rotation system - clockwise rotation with wall/floor kicks
//!
//! Each clockwise transition `from -> from+1` has five ordered trial offsets
//! `(dx, dy)` (row + is downward). The first offset at which the rotated shape
//! fits is committed together with the new orientation; if none fits the
//! rotation is rejected and the piece is left untouched.
//!
//! The long (I) piece has its own table, every other rotating piece shares one.
//! The square piece never rotates.

use serde::{Deserialize, Serialize};

use crate::collision::collides;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::types::{PieceKind, Rotation};

/// One trial offset `(dx, dy)`
pub type Kick = (i32, i32);

/// Trials per transition
pub const KICKS_PER_TRANSITION: usize = 5;

/// Kick trials for the four clockwise transitions, indexed by the FROM orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KickTable([[Kick; KICKS_PER_TRANSITION]; 4]);

impl KickTable {
    pub const fn new(offsets: [[Kick; KICKS_PER_TRANSITION]; 4]) -> Self {
        Self(offsets)
    }

    /// Trials for `from -> to`; `None` unless `to` is one clockwise step from `from`
    pub fn kicks(&self, from: Rotation, to: Rotation) -> Option<&[Kick; KICKS_PER_TRANSITION]> {
        if from.rotate_cw() != to {
            return None;
        }
        Some(&self.0[from.index()])
    }
}

/// Shared table for J, L, S, T, Z
pub const STANDARD_KICKS: KickTable = KickTable::new([
    // 0->1
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 1->2
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 2->3
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 3->0
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
]);

/// Table for the long (I) piece
pub const LONG_KICKS: KickTable = KickTable::new([
    // 0->1
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // 1->2
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // 2->3
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // 3->0
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
]);

/// The pair of kick tables a game rotates with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KickTables {
    pub standard: KickTable,
    pub long: KickTable,
}

impl KickTables {
    /// Table used by `kind`; `None` for the square piece
    pub fn for_kind(&self, kind: PieceKind) -> Option<&KickTable> {
        if !kind.rotates() {
            return None;
        }
        match kind {
            PieceKind::I => Some(&self.long),
            _ => Some(&self.standard),
        }
    }
}

impl Default for KickTables {
    fn default() -> Self {
        Self {
            standard: STANDARD_KICKS,
            long: LONG_KICKS,
        }
    }
}

/// Try to rotate `piece` clockwise.
///
/// Returns the rotated, kicked piece, or `None` when the piece does not rotate
/// or every trial offset collides.
pub fn try_rotate(piece: &Piece, grid: &Grid, tables: &KickTables) -> Option<Piece> {
    let table = tables.for_kind(piece.kind)?;
    let candidate = piece.rotated_cw();
    let kicks = table.kicks(piece.rotation, candidate.rotation)?;

    kicks
        .iter()
        .find(|&&(dx, dy)| !collides(&candidate, grid, dx, dy))
        .map(|&(dx, dy)| candidate.shifted(dx, dy))
}
