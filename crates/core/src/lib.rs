//! Core engine - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on rendering, input devices, networking, or storage:
//!
//! - **Deterministic**: the same seed and command/frame sequence replays the same game
//!   (combo timing additionally depends on the injected [`TimeSource`])
//! - **Testable**: every rule lives in a small module with its own unit tests
//! - **Host-driven**: single-threaded, every command runs to completion; the host
//!   calls [`Game::tick`] once per frame
//!
//! # Module Structure
//!
//! - [`grid`]: rows x cols occupancy matrix and row removal
//! - [`piece`]: shape matrices, clockwise rotation, the active piece
//! - [`collision`]: placement legality, drop distance
//! - [`rotation`]: kick tables and kicked rotation
//! - [`line_clear`]: full-row detection and compaction
//! - [`scoring`]: line/drop scoring, combo window, level progression
//! - [`clock`]: gravity interval and accumulator, wall-clock sources
//! - [`rng`]: uniform piece generation
//! - [`config`]: injected configuration and its validation
//! - [`event`]: one-shot signals for renderer and sound layers
//! - [`game`]: the controller and its state machine
//! - [`snapshot`]: read-only per-frame view
//!
//! # Example
//!
//! ```
//! use tetris_engine_core::Game;
//! use tetris_engine_core::types::{GameCommand, GameStatus};
//!
//! let mut game = Game::new(12345);
//! game.finish_loading();
//! game.apply(GameCommand::Start);
//! assert_eq!(game.status(), GameStatus::Running);
//!
//! game.apply(GameCommand::MoveRight);
//! game.apply(GameCommand::Rotate);
//! game.apply(GameCommand::HardDrop);
//! assert!(game.score() > 0); // hard drops score by distance
//!
//! game.tick(16);
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.grid.len(), 200);
//! ```

pub mod clock;
pub mod collision;
pub mod config;
pub mod event;
pub mod game;
pub mod grid;
pub mod line_clear;
pub mod piece;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod snapshot;

pub use tetris_engine_types as types;

// Re-export commonly used types for convenience
pub use clock::{drop_interval_ms, GravityClock, ManualClock, SystemClock, TimeSource};
pub use collision::{collides, drop_distance};
pub use config::{ConfigError, EngineConfig};
pub use event::{GameEvent, MAX_PENDING_EVENTS};
pub use game::Game;
pub use grid::Grid;
pub use line_clear::{resolve_line_clears, LineClear};
pub use piece::{Piece, PieceView, Shape};
pub use rng::PieceGenerator;
pub use rotation::{try_rotate, KickTable, KickTables};
pub use scoring::{hard_drop_score, level_for_lines, line_clear_score, Progress};
pub use snapshot::GameSnapshot;
