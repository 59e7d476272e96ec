//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used by the engine and by any host
//! that reads engine state. Everything here is plain data: no game rules, no I/O.
//!
//! # Board Dimensions
//!
//! The compatibility playfield is 10 columns by 20 rows:
//!
//! - **Columns**: indexed 0-9, left to right
//! - **Rows**: indexed 0-19, top to bottom (row + is downward)
//!
//! Hosts may configure other sizes; these constants are only the defaults.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 100 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 50 | Gravity interval floor |
//! | `COMBO_WINDOW_MS` | 3000 | Max real time between chained clears |
//! | `MAX_FRAME_MS` | 100 | Per-frame elapsed time clamp |
//!
//! # Examples
//!
//! ```
//! use tetris_engine_types::{GameCommand, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(PieceKind::from_str("t"), Some(piece));
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(GameCommand::from_str("hardDrop"), Some(GameCommand::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval reduction per level above 1
pub const DROP_STEP_MS: u32 = 100;

/// Gravity never gets faster than this
pub const DROP_INTERVAL_MIN_MS: u32 = 50;

/// Two clears at most this far apart (wall-clock) extend a combo chain
pub const COMBO_WINDOW_MS: u64 = 3000;

/// Upper bound applied to a single frame's elapsed time
pub const MAX_FRAME_MS: u32 = 100;

/// Nominal host frame period (~60 FPS)
pub const FRAME_MS: u32 = 16;

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Combo multiplier cap
pub const MAX_COMBO_MULTIPLIER: u32 = 5;

/// Line clear base scores indexed by lines cleared (0-4)
///
/// Multiplied by the level and by `min(combo, MAX_COMBO_MULTIPLIER)`.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points per successful soft drop row
pub const SOFT_DROP_POINTS: u32 = 1;

/// Hard drop points per row fallen (before the level multiplier)
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

/// Canonical spawn matrices, row-major, 1 = occupied.
const I_MATRIX: &[&[u8]] = &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]];
const O_MATRIX: &[&[u8]] = &[&[1, 1], &[1, 1]];
const T_MATRIX: &[&[u8]] = &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]];
const S_MATRIX: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]];
const Z_MATRIX: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]];
const J_MATRIX: &[&[u8]] = &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]];
const L_MATRIX: &[&[u8]] = &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]];

impl PieceKind {
    /// All kinds in tag order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    ///
    /// ```
    /// use tetris_engine_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_str(), "i");
    /// assert_eq!(PieceKind::O.as_str(), "o");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Position in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Inverse of [`PieceKind::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Display color (hex RGB) for renderers
    pub fn color(&self) -> &'static str {
        match self {
            PieceKind::I => "#00f0f0",
            PieceKind::O => "#f0f000",
            PieceKind::T => "#a000f0",
            PieceKind::S => "#00f000",
            PieceKind::Z => "#f00000",
            PieceKind::J => "#0000f0",
            PieceKind::L => "#f0a000",
        }
    }

    /// Canonical spawn-orientation matrix (square, row-major, 1 = occupied)
    pub fn matrix(&self) -> &'static [&'static [u8]] {
        match self {
            PieceKind::I => I_MATRIX,
            PieceKind::O => O_MATRIX,
            PieceKind::T => T_MATRIX,
            PieceKind::S => S_MATRIX,
            PieceKind::Z => Z_MATRIX,
            PieceKind::J => J_MATRIX,
            PieceKind::L => L_MATRIX,
        }
    }

    /// The square piece keeps one orientation
    pub fn rotates(&self) -> bool {
        !matches!(self, PieceKind::O)
    }
}

/// Orientation index of a piece
///
/// - **North**: Spawn orientation (index 0)
/// - **East**: Rotated 90° clockwise (index 1)
/// - **South**: Rotated 180° (index 2)
/// - **West**: Rotated 270° clockwise (index 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use tetris_engine_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Orientation index in `[0, 4)`
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Rotation::North),
            1 => Some(Rotation::East),
            2 => Some(Rotation::South),
            3 => Some(Rotation::West),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Lifecycle state of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    /// Host is still preparing; no commands accepted
    Loading,
    /// Waiting for `start`
    Ready,
    Running,
    Paused,
    /// Terminal until `restart`
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Loading => "loading",
            GameStatus::Ready => "ready",
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "gameOver",
        }
    }

    /// Gameplay commands and gravity only act while running
    pub fn is_playable(&self) -> bool {
        matches!(self, GameStatus::Running)
    }
}

/// Commands a host can deliver to the engine
///
/// Translating raw keyboard/touch events into these is the host's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameCommand {
    Start,
    TogglePause,
    Restart,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one row down (scored)
    SoftDrop,
    /// Drop piece to its resting row and lock it (scored by distance)
    HardDrop,
    /// Rotate piece 90° clockwise
    Rotate,
}

impl GameCommand {
    /// Parse command from string (case-insensitive)
    ///
    /// ```
    /// use tetris_engine_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("moveLeft"), Some(GameCommand::MoveLeft));
    /// assert_eq!(GameCommand::from_str("togglepause"), Some(GameCommand::TogglePause));
    /// assert_eq!(GameCommand::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameCommand::Start),
            "togglepause" | "pause" => Some(GameCommand::TogglePause),
            "restart" => Some(GameCommand::Restart),
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "softdrop" => Some(GameCommand::SoftDrop),
            "harddrop" => Some(GameCommand::HardDrop),
            "rotate" => Some(GameCommand::Rotate),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::Start => "start",
            GameCommand::TogglePause => "togglePause",
            GameCommand::Restart => "restart",
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::SoftDrop => "softDrop",
            GameCommand::HardDrop => "hardDrop",
            GameCommand::Rotate => "rotate",
        }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;
