//! Scoring module - line clear, drop and combo scoring plus level progression
//!
//! Rules:
//! - A lock clearing `n` lines scores `LINE_SCORES[n] * level * min(combo, 5)`,
//!   using the level in force when the piece locked.
//! - `combo` grows by one when the clear follows the previous clear within the
//!   combo window (wall-clock), otherwise it restarts at 1. Locks that clear
//!   nothing leave score and combo alone.
//! - Soft drop: 1 point per row. Hard drop: `2 * distance * level`.
//! - `level = lines / 10 + 1`, never decreasing.

use serde::{Deserialize, Serialize};

use crate::types::{
    HARD_DROP_POINTS_PER_ROW, LINES_PER_LEVEL, LINE_SCORES, MAX_COMBO_MULTIPLIER,
    SOFT_DROP_POINTS,
};

/// Points for clearing `lines` rows at `level` with the given combo counter
pub fn line_clear_score(lines: usize, level: u32, combo: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines]
        .saturating_mul(level)
        .saturating_mul(combo.clamp(1, MAX_COMBO_MULTIPLIER))
}

/// Points for one successful soft drop row
pub fn soft_drop_score() -> u32 {
    SOFT_DROP_POINTS
}

/// Points for a hard drop of `distance` rows at `level`
pub fn hard_drop_score(distance: u32, level: u32) -> u32 {
    HARD_DROP_POINTS_PER_ROW
        .saturating_mul(distance)
        .saturating_mul(level)
}

/// Level reached after clearing `total_lines` lines (starts at 1)
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// What one clearing lock did to the progress counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearOutcome {
    pub points: u32,
    pub combo: u32,
    /// New level, if this clear raised it
    pub level_up: Option<u32>,
}

/// Score, lines, level and combo of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub combo: u32,
    /// Wall-clock time of the previous clearing lock
    #[serde(skip)]
    last_clear_at_ms: Option<u64>,
}

impl Progress {
    pub fn new() -> Self {
        Self {
            score: 0,
            lines: 0,
            level: 1,
            combo: 0,
            last_clear_at_ms: None,
        }
    }

    /// Record a lock that cleared `lines` rows at time `now_ms`.
    ///
    /// A lock that clears nothing scores nothing and breaks the combo chain.
    pub fn record_clear(&mut self, lines: usize, now_ms: u64, window_ms: u64) -> ClearOutcome {
        if lines == 0 {
            self.combo = 0;
            self.last_clear_at_ms = None;
            return ClearOutcome::default();
        }

        let chained = self
            .last_clear_at_ms
            .is_some_and(|prev| now_ms.saturating_sub(prev) <= window_ms);
        self.combo = if chained {
            self.combo.saturating_add(1)
        } else {
            1
        };
        self.last_clear_at_ms = Some(now_ms);

        let points = line_clear_score(lines, self.level, self.combo);
        self.add_points(points);

        self.lines = self.lines.saturating_add(lines as u32);
        let level = level_for_lines(self.lines).max(self.level);
        let level_up = (level > self.level).then_some(level);
        self.level = level;

        ClearOutcome {
            points,
            combo: self.combo,
            level_up,
        }
    }

    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}
