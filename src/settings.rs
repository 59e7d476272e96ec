//! Host settings loaded from the environment
//!
//! `TETRIS_CONFIG` names a JSON file holding a (possibly partial)
//! [`EngineConfig`]; the individual `TETRIS_*` variables then override
//! single fields. Values that fail to parse are reported, not ignored.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use crate::core::EngineConfig;
use crate::types::FRAME_MS;

/// Frames the headless runner plays when `TETRIS_FRAMES` is unset
pub const DEFAULT_FRAMES: u32 = 3_600;

/// Knobs that only concern the host loop, not the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostSettings {
    pub frames: u32,
    pub frame_ms: u32,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            frame_ms: FRAME_MS,
        }
    }
}

impl HostSettings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = Self::default();
        if let Some(frames) = parse_var(&lookup, "TETRIS_FRAMES")? {
            settings.frames = frames;
        }
        if let Some(frame_ms) = parse_var(&lookup, "TETRIS_FRAME_MS")? {
            if frame_ms == 0 {
                return Err(anyhow!("TETRIS_FRAME_MS must be greater than zero"));
            }
            settings.frame_ms = frame_ms;
        }
        Ok(settings)
    }
}

/// Load the engine configuration from the process environment.
pub fn load() -> Result<EngineConfig> {
    load_from(|key| std::env::var(key).ok())
}

/// Same as [`load`] but with an injectable variable lookup.
pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<EngineConfig> {
    let mut config = match lookup("TETRIS_CONFIG").map(|s| s.trim().to_string()) {
        Some(path) if !path.is_empty() => read_config_file(Path::new(&path))?,
        _ => EngineConfig::default(),
    };

    if let Some(rows) = parse_var(&lookup, "TETRIS_ROWS")? {
        config.rows = rows;
    }
    if let Some(cols) = parse_var(&lookup, "TETRIS_COLS")? {
        config.cols = cols;
    }
    if let Some(seed) = parse_var(&lookup, "TETRIS_SEED")? {
        config.seed = Some(seed);
    }
    if let Some(window) = parse_var(&lookup, "TETRIS_COMBO_WINDOW_MS")? {
        config.combo_window_ms = window;
    }
    if let Some(clamp) = parse_var(&lookup, "TETRIS_MAX_FRAME_MS")? {
        config.max_frame_ms = clamp;
    }

    config.validate().context("invalid engine configuration")?;
    Ok(config)
}

pub fn read_config_file(path: &Path) -> Result<EngineConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>()
        .map(Some)
        .with_context(|| format!("{key}: cannot parse {raw:?}"))
}
