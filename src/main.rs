//! Headless engine runner (default binary).
//!
//! Drives the engine on a fixed frame cadence with a scripted command
//! stream and prints every event, then the final snapshot, as JSON lines.
//! Time is simulated: the combo window runs on a manual clock advanced by
//! one frame per tick, so a seed replays the same game.

use std::io::Write;

use anyhow::{Context, Result};
use log::info;

use tetris_engine::core::{Game, ManualClock};
use tetris_engine::settings::{self, HostSettings};
use tetris_engine::types::{GameCommand, GameStatus};

/// Frames between two scripted commands
const COMMAND_EVERY: u32 = 6;

const SCRIPT: [GameCommand; 8] = [
    GameCommand::Rotate,
    GameCommand::MoveLeft,
    GameCommand::MoveLeft,
    GameCommand::SoftDrop,
    GameCommand::MoveRight,
    GameCommand::Rotate,
    GameCommand::SoftDrop,
    GameCommand::HardDrop,
];

fn main() -> Result<()> {
    env_logger::init();

    let config = settings::load()?;
    let host = HostSettings::from_env()?;
    let clock = ManualClock::new(0);

    let mut game = Game::with_config(config, clock.clone())
        .context("failed to build game from configuration")?;
    game.finish_loading();
    game.start();
    info!(
        "running {} frames at {} ms, seed {}",
        host.frames,
        host.frame_ms,
        game.seed()
    );

    let mut stdout = std::io::stdout().lock();
    let mut step = 0usize;
    for frame in 0..host.frames {
        if frame % COMMAND_EVERY == 0 {
            game.apply(SCRIPT[step % SCRIPT.len()]);
            step += 1;
        }

        clock.advance(u64::from(host.frame_ms));
        game.tick(host.frame_ms);

        for event in game.drain_events() {
            emit(&mut stdout, &event)?;
        }
        if game.status() == GameStatus::GameOver {
            info!("game over after {} frames", frame + 1);
            break;
        }
    }

    emit(&mut stdout, &game.snapshot())
}

fn emit(out: &mut impl Write, value: &impl serde::Serialize) -> Result<()> {
    serde_json::to_writer(&mut *out, value).context("failed to encode output line")?;
    writeln!(out).context("failed to write output line")?;
    Ok(())
}
