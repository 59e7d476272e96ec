use serde::{Deserialize, Serialize};

use crate::piece::PieceView;
use crate::types::{Cell, GameStatus};

/// Read-only copy of everything a renderer or UI needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub rows: usize,
    pub cols: usize,
    /// Row-major cells, `rows * cols` long
    pub grid: Vec<Cell>,
    pub active: Option<PieceView>,
    pub preview: Option<PieceView>,
    /// Anchor row the active piece would rest at
    pub ghost_y: Option<i32>,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub combo: u32,
    pub drop_interval_ms: u32,
    pub seed: u64,
    /// Rows removed by the most recent lock, visible for one frame
    pub cleared_rows: Vec<usize>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.status = GameStatus::Loading;
        self.rows = 0;
        self.cols = 0;
        self.grid.clear();
        self.active = None;
        self.preview = None;
        self.ghost_y = None;
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.combo = 0;
        self.drop_interval_ms = 0;
        self.seed = 0;
        self.cleared_rows.clear();
    }

    /// Cell at `(row, col)`, `None` when empty or out of bounds
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.grid[row * self.cols + col]
    }

    pub fn playable(&self) -> bool {
        self.status.is_playable()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            status: GameStatus::Loading,
            rows: 0,
            cols: 0,
            grid: Vec::new(),
            active: None,
            preview: None,
            ghost_y: None,
            score: 0,
            lines: 0,
            level: 1,
            combo: 0,
            drop_interval_ms: 0,
            seed: 0,
            cleared_rows: Vec::new(),
        };
        s.clear();
        s
    }
}
