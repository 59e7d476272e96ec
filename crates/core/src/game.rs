//! Game module - the controller that owns a session
//!
//! Ties together the grid, the active and preview pieces, collision, rotation,
//! line clears, scoring and gravity. Hosts drive it with commands and
//! [`Game::tick`], and observe it through accessors, [`Game::snapshot`] and
//! [`Game::drain_events`]. Nothing outside the game mutates its state.
//!
//! Lifecycle: `Loading -> Ready -> Running <-> Paused`, `Running -> GameOver`
//! when a freshly spawned piece collides, and `restart` back through `Ready`
//! into `Running`.

use std::collections::VecDeque;

use log::{debug, info, trace};

use crate::clock::{drop_interval_ms, GravityClock, SystemClock, TimeSource};
use crate::collision::{collides, drop_distance};
use crate::config::{ConfigError, EngineConfig};
use crate::event::{GameEvent, MAX_PENDING_EVENTS};
use crate::grid::Grid;
use crate::line_clear::resolve_line_clears;
use crate::piece::{Piece, PieceView};
use crate::rng::PieceGenerator;
use crate::rotation::try_rotate;
use crate::scoring::{hard_drop_score, soft_drop_score, Progress};
use crate::snapshot::GameSnapshot;
use crate::types::{GameCommand, GameStatus};

#[derive(Debug, Clone)]
pub struct Game<C: TimeSource = SystemClock> {
    config: EngineConfig,
    grid: Grid,
    active: Option<Piece>,
    preview: Option<Piece>,
    generator: PieceGenerator,
    progress: Progress,
    gravity: GravityClock,
    status: GameStatus,
    /// Rows removed by the latest lock (kept for one rendered frame)
    cleared_rows: Vec<usize>,
    /// Set once a tick has passed since `cleared_rows` was filled
    cleared_rows_stale: bool,
    /// Newest `MAX_PENDING_EVENTS` undrained events
    events: VecDeque<GameEvent>,
    clock: C,
}

impl Game<SystemClock> {
    /// Standard 10x20 game with the given seed, timed by the system clock
    pub fn new(seed: u64) -> Self {
        Self::build(EngineConfig::default().with_seed(seed), SystemClock::new())
    }
}

impl Default for Game<SystemClock> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<C: TimeSource> Game<C> {
    /// Create a game from a host-supplied configuration and time source
    pub fn with_config(config: EngineConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, clock))
    }

    fn build(config: EngineConfig, clock: C) -> Self {
        let generator = match config.seed {
            Some(seed) => PieceGenerator::new(seed),
            None => PieceGenerator::from_entropy(),
        };
        Self {
            grid: Grid::new(config.rows, config.cols),
            active: None,
            preview: None,
            generator,
            progress: Progress::new(),
            gravity: GravityClock::new(config.max_frame_ms),
            status: GameStatus::Loading,
            cleared_rows: Vec::new(),
            cleared_rows_stale: false,
            events: VecDeque::new(),
            clock,
            config,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn preview(&self) -> Option<&Piece> {
        self.preview.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.progress.score
    }

    pub fn lines(&self) -> u32 {
        self.progress.lines
    }

    pub fn level(&self) -> u32 {
        self.progress.level
    }

    pub fn combo(&self) -> u32 {
        self.progress.combo
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }

    /// Rows cleared by the most recent lock; empty once a frame has passed
    pub fn last_cleared_rows(&self) -> &[usize] {
        &self.cleared_rows
    }

    /// Current gravity interval, derived from the level
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.progress.level)
    }

    /// Anchor row the active piece would rest at
    pub fn ghost_y(&self) -> Option<i32> {
        let active = self.active.as_ref()?;
        Some(active.y + drop_distance(active, &self.grid) as i32)
    }

    /// Hand out every event queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    /// Host finished its own loading; the game can now be started
    pub fn finish_loading(&mut self) {
        if self.status == GameStatus::Loading {
            self.status = GameStatus::Ready;
        }
    }

    /// Start a session from `Ready`
    pub fn start(&mut self) -> bool {
        if self.status != GameStatus::Ready {
            return false;
        }
        self.reset_session();
        self.status = GameStatus::Running;
        info!(
            "game started: {}x{} grid, seed {}",
            self.config.cols,
            self.config.rows,
            self.generator.seed()
        );

        self.preview = Some(self.next_piece());
        self.spawn_piece();
        true
    }

    /// Pause a running game, or resume a paused one
    pub fn toggle_pause(&mut self) -> bool {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            _ => return false,
        };
        debug!("status -> {}", self.status.as_str());
        true
    }

    /// Throw the current session away and start a fresh one
    pub fn restart(&mut self) -> bool {
        match self.status {
            GameStatus::Running | GameStatus::Paused | GameStatus::GameOver => {
                info!("restart requested at score {}", self.progress.score);
                self.status = GameStatus::Ready;
                self.start()
            }
            GameStatus::Ready => self.start(),
            GameStatus::Loading => false,
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    /// Move down one row for a point; a piece that cannot descend locks instead
    pub fn soft_drop(&mut self) -> bool {
        if !self.status.is_playable() || self.active.is_none() {
            return false;
        }
        if self.step_down() {
            self.progress.add_points(soft_drop_score());
        }
        true
    }

    /// Drop to the resting row, score `2 * distance * level`, and lock
    pub fn hard_drop(&mut self) -> bool {
        if !self.status.is_playable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let distance = drop_distance(&active, &self.grid);
        self.active = Some(active.shifted(0, distance as i32));
        self.progress
            .add_points(hard_drop_score(distance, self.progress.level));
        self.lock_piece();
        true
    }

    /// Rotate clockwise with wall kicks; rejected rotations leave the piece as is
    pub fn rotate(&mut self) -> bool {
        if !self.status.is_playable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match try_rotate(&active, &self.grid, &self.config.kicks) {
            Some(rotated) => {
                self.active = Some(rotated);
                true
            }
            None => {
                trace!(
                    "rotation of {:?} from {} rejected",
                    active.kind,
                    active.rotation.as_str()
                );
                false
            }
        }
    }

    /// Apply one host command
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::Start => self.start(),
            GameCommand::TogglePause => self.toggle_pause(),
            GameCommand::Restart => self.restart(),
            GameCommand::MoveLeft => self.move_left(),
            GameCommand::MoveRight => self.move_right(),
            GameCommand::SoftDrop => self.soft_drop(),
            GameCommand::HardDrop => self.hard_drop(),
            GameCommand::Rotate => self.rotate(),
        }
    }

    /// Advance the game by one host frame.
    ///
    /// Returns true when gravity moved or locked the active piece.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.cleared_rows_stale {
            self.cleared_rows.clear();
        }
        let stepped = self.apply_gravity(elapsed_ms);
        // whatever is in `cleared_rows` now gets rendered this frame only
        self.cleared_rows_stale = true;
        stepped
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.status = self.status;
        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        self.grid.write_cells_into(&mut out.grid);
        out.active = self.active.as_ref().map(PieceView::from);
        out.preview = self.preview.as_ref().map(PieceView::from);
        out.ghost_y = self.ghost_y();
        out.score = self.progress.score;
        out.lines = self.progress.lines;
        out.level = self.progress.level;
        out.combo = self.progress.combo;
        out.drop_interval_ms = self.drop_interval_ms();
        out.seed = self.generator.seed();
        out.cleared_rows.clear();
        out.cleared_rows.extend_from_slice(&self.cleared_rows);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn reset_session(&mut self) {
        self.grid.clear();
        self.active = None;
        self.preview = None;
        self.progress = Progress::new();
        self.gravity.reset();
        self.cleared_rows.clear();
        self.cleared_rows_stale = false;
    }

    fn next_piece(&mut self) -> Piece {
        Piece::spawn(self.generator.draw(), self.grid.cols())
    }

    /// Promote the preview to active and draw a new preview.
    /// A spawn that collides ends the game.
    fn spawn_piece(&mut self) {
        let piece = match self.preview.take() {
            Some(piece) => piece,
            None => self.next_piece(),
        };
        self.preview = Some(self.next_piece());

        if collides(&piece, &self.grid, 0, 0) {
            self.active = None;
            self.status = GameStatus::GameOver;
            info!(
                "game over: {:?} cannot spawn, final score {}",
                piece.kind, self.progress.score
            );
            self.push_event(GameEvent::GameOver {
                score: self.progress.score,
            });
            return;
        }
        self.active = Some(piece);
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    fn apply_gravity(&mut self, elapsed_ms: u32) -> bool {
        if !self.status.is_playable() || self.active.is_none() {
            return false;
        }
        let interval = self.drop_interval_ms();
        if !self.gravity.advance(elapsed_ms, interval) {
            return false;
        }
        self.step_down();
        true
    }

    fn try_shift(&mut self, dx: i32) -> bool {
        if !self.status.is_playable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        if collides(&active, &self.grid, dx, 0) {
            return false;
        }
        self.active = Some(active.shifted(dx, 0));
        true
    }

    /// One row down, or lock when blocked. Returns true if the piece moved.
    fn step_down(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if collides(&active, &self.grid, 0, 1) {
            self.lock_piece();
            return false;
        }
        self.active = Some(active.shifted(0, 1));
        true
    }

    /// Merge the active piece into the grid, resolve clears and scoring, spawn the next piece
    fn lock_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        for (col, row) in piece.cells() {
            // cells still above the top row have nowhere to go
            if row >= 0 {
                self.grid.set(row, col, piece.kind);
            }
        }
        debug!("locked {:?} at ({}, {})", piece.kind, piece.x, piece.y);
        self.push_event(GameEvent::Locked { kind: piece.kind });

        let clear = resolve_line_clears(&mut self.grid);
        self.cleared_rows.clear();
        self.cleared_rows_stale = false;
        let outcome = self.progress.record_clear(
            clear.count(),
            self.clock.now_ms(),
            self.config.combo_window_ms,
        );
        if !clear.is_empty() {
            debug!(
                "cleared rows {:?}: +{} (combo {})",
                clear.rows, outcome.points, outcome.combo
            );
            self.cleared_rows.extend_from_slice(&clear.rows);
            self.push_event(GameEvent::LinesCleared {
                rows: clear.rows,
                points: outcome.points,
                combo: outcome.combo,
            });
            if let Some(level) = outcome.level_up {
                info!("level up: {}", level);
                self.gravity.reset();
                self.push_event(GameEvent::LevelUp { level });
            }
        }

        self.spawn_piece();
    }
}

/// Scenario setup hooks for tests and replays. Not part of the host surface.
#[cfg(any(test, feature = "test-support"))]
impl<C: TimeSource> Game<C> {
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Replace the active and preview pieces with fresh spawns of the given kinds
    pub fn set_pieces(&mut self, active: crate::types::PieceKind, preview: crate::types::PieceKind) {
        self.active = Some(Piece::spawn(active, self.grid.cols()));
        self.preview = Some(Piece::spawn(preview, self.grid.cols()));
    }
}
