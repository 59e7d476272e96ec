//! Gravity timing and the wall-clock source for combo windows
//!
//! The host calls [`GravityClock::advance`] once per frame with the elapsed
//! milliseconds. Each frame is clamped to `max_frame_ms` so a long stall
//! (backgrounded window, debugger) cannot turn into a burst of catch-up drops.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::types::{BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS};

/// Milliseconds between automatic one-row descents at `level`
pub fn drop_interval_ms(level: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(reduction)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Accumulates frame time and reports when a gravity step is due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityClock {
    accumulated_ms: u32,
    max_frame_ms: u32,
}

impl GravityClock {
    pub fn new(max_frame_ms: u32) -> Self {
        Self {
            accumulated_ms: 0,
            max_frame_ms,
        }
    }

    /// Add one frame. Returns true when accumulated time exceeds `interval_ms`,
    /// in which case the accumulator restarts from zero.
    pub fn advance(&mut self, elapsed_ms: u32, interval_ms: u32) -> bool {
        let elapsed = elapsed_ms.min(self.max_frame_ms);
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed);
        if self.accumulated_ms > interval_ms {
            self.accumulated_ms = 0;
            return true;
        }
        false
    }

    pub fn accumulated_ms(&self) -> u32 {
        self.accumulated_ms
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }
}

/// Wall-clock milliseconds, used to time combo windows
pub trait TimeSource {
    fn now_ms(&self) -> u64;
}

/// Monotonic real time measured from construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Host-driven time. Clones share the same counter, so a host (or a test) can
/// keep one handle and advance the time the engine sees.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now_ms: Arc::new(AtomicU64::new(start_ms)),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now_ms.fetch_add(ms, Ordering::Relaxed);
    }

    pub fn set(&self, ms: u64) {
        self.now_ms.store(ms, Ordering::Relaxed);
    }
}

impl TimeSource for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.load(Ordering::Relaxed)
    }
}
