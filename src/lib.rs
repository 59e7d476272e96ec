//! Falling-block puzzle engine (workspace facade crate).
//!
//! The engine lives in dedicated crates under `crates/`; this package re-exports them as
//! `tetris_engine::{core, types}` and adds the host-side [`settings`] loader.

pub use tetris_engine_core as core;
pub use tetris_engine_types as types;

pub mod settings;
