//! Engine configuration injected by the host
//!
//! Every field has a compatibility default, so a partial JSON document (or
//! none at all) yields the standard 10x20 game.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::piece::MAX_SHAPE_SIZE;
use crate::rotation::KickTables;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, COMBO_WINDOW_MS, MAX_FRAME_MS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must be at least {min}x{min}, got {rows} rows x {cols} columns")]
    GridTooSmall { rows: usize, cols: usize, min: usize },
    #[error("grid of {rows} rows x {cols} columns exceeds the coordinate range")]
    GridTooLarge { rows: usize, cols: usize },
    #[error("combo window must be greater than zero")]
    ZeroComboWindow,
    #[error("frame clamp must be greater than zero")]
    ZeroFrameClamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
    /// Max wall-clock gap between two clears that still chains a combo
    pub combo_window_ms: u64,
    /// Upper bound on one frame's elapsed time
    pub max_frame_ms: u32,
    /// Piece generator seed; random when absent
    pub seed: Option<u64>,
    pub kicks: KickTables,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < MAX_SHAPE_SIZE || self.cols < MAX_SHAPE_SIZE {
            return Err(ConfigError::GridTooSmall {
                rows: self.rows,
                cols: self.cols,
                min: MAX_SHAPE_SIZE,
            });
        }
        if self.rows > i16::MAX as usize || self.cols > i16::MAX as usize {
            return Err(ConfigError::GridTooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.combo_window_ms == 0 {
            return Err(ConfigError::ZeroComboWindow);
        }
        if self.max_frame_ms == 0 {
            return Err(ConfigError::ZeroFrameClamp);
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_HEIGHT,
            cols: BOARD_WIDTH,
            combo_window_ms: COMBO_WINDOW_MS,
            max_frame_ms: MAX_FRAME_MS,
            seed: None,
            kicks: KickTables::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = EngineConfig::default();
        assert_eq!((config.rows, config.cols), (20, 10));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_tiny_grid() {
        let config = EngineConfig {
            cols: 3,
            ..EngineConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::GridTooSmall {
                rows: 20,
                cols: 3,
                min: 4
            })
        );
    }

    #[test]
    fn test_rejects_zero_timings() {
        let config = EngineConfig {
            combo_window_ms: 0,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroComboWindow));

        let config = EngineConfig {
            max_frame_ms: 0,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroFrameClamp));
    }

    #[test]
    fn test_error_message() {
        let err = ConfigError::GridTooSmall {
            rows: 2,
            cols: 2,
            min: 4,
        };
        assert_eq!(
            err.to_string(),
            "grid must be at least 4x4, got 2 rows x 2 columns"
        );
    }
}
