//! Discrete signals for renderer/sound layers
//!
//! Events queue up inside the game and are handed out once by
//! [`Game::drain_events`](crate::game::Game::drain_events). Hosts that only
//! read snapshots may ignore them: the queue keeps the newest
//! [`MAX_PENDING_EVENTS`] and drops older ones.

use serde::{Deserialize, Serialize};

use crate::types::PieceKind;

/// Undrained events kept before the oldest are discarded
pub const MAX_PENDING_EVENTS: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    /// A piece merged into the grid
    Locked { kind: PieceKind },
    /// Rows removed by the last lock (original indices, bottom to top)
    #[serde(rename_all = "camelCase")]
    LinesCleared {
        rows: Vec<usize>,
        points: u32,
        combo: u32,
    },
    LevelUp { level: u32 },
    GameOver { score: u32 },
}
