//! Property tests: invariants that must hold for any seed and command stream.
//!
//! - the active piece never overlaps filled cells or leaves the side walls/floor
//! - the grid keeps its dimensions
//! - level always equals `lines / 10 + 1` and score/lines never decrease
//! - a hard drop scores exactly `2 * distance * level` before any clear
//! - long clearing runs cross level boundaries with the right multipliers

use proptest::prelude::*;
use tetris_engine::core::{
    collides, drop_distance, drop_interval_ms, EngineConfig, Game, GameEvent, ManualClock,
    TimeSource,
};
use tetris_engine::types::{GameCommand, GameStatus, PieceKind, COMBO_WINDOW_MS};

const COMMANDS: [GameCommand; 6] = [
    GameCommand::MoveLeft,
    GameCommand::MoveRight,
    GameCommand::SoftDrop,
    GameCommand::HardDrop,
    GameCommand::Rotate,
    GameCommand::TogglePause,
];

fn running(seed: u64, rows: usize, cols: usize) -> (Game<ManualClock>, ManualClock) {
    let clock = ManualClock::new(0);
    let config = EngineConfig {
        rows,
        cols,
        ..EngineConfig::default()
    }
    .with_seed(seed);
    let mut game = Game::with_config(config, clock.clone()).unwrap();
    game.finish_loading();
    game.start();
    (game, clock)
}

proptest! {
    #[test]
    fn random_play_keeps_invariants(
        seed in any::<u64>(),
        rows in 8usize..24,
        cols in 4usize..14,
        script in prop::collection::vec((0usize..COMMANDS.len(), 0u32..250), 1..300),
    ) {
        let (mut game, clock) = running(seed, rows, cols);

        for (command, elapsed) in script {
            let before_score = game.score();
            let before_lines = game.lines();

            game.apply(COMMANDS[command]);
            clock.advance(u64::from(elapsed));
            game.tick(elapsed);

            prop_assert_eq!(game.grid().rows(), rows);
            prop_assert_eq!(game.grid().cols(), cols);
            prop_assert_eq!(game.grid().cells().len(), rows * cols);
            prop_assert!(game.score() >= before_score);
            prop_assert!(game.lines() >= before_lines);
            prop_assert_eq!(game.level(), game.lines() / 10 + 1);

            match game.status() {
                GameStatus::Running | GameStatus::Paused => {
                    let active = game.active().unwrap();
                    prop_assert!(!collides(active, game.grid(), 0, 0));
                    for (col, row) in active.cells() {
                        prop_assert!(col >= 0 && (col as usize) < cols);
                        prop_assert!(row < rows as i32);
                    }
                }
                GameStatus::GameOver => {
                    prop_assert!(game.active().is_none());
                    break;
                }
                other => prop_assert!(false, "unexpected status {:?}", other),
            }
        }
    }

    #[test]
    fn hard_drop_scores_distance_times_level(seed in any::<u64>(), shifts in -5i32..5) {
        let (mut game, _clock) = running(seed, 20, 10);
        for _ in 0..shifts.abs() {
            if shifts < 0 { game.move_left(); } else { game.move_right(); }
        }

        let active = *game.active().unwrap();
        let distance = drop_distance(&active, game.grid());
        prop_assert!(game.hard_drop());

        // nothing can clear on an otherwise empty grid
        prop_assert_eq!(game.lines(), 0);
        prop_assert_eq!(game.score(), 2 * distance * game.level());
        prop_assert_eq!(game.grid().filled_count(), 4);
    }

    #[test]
    fn same_seed_replays_identically(
        seed in any::<u64>(),
        script in prop::collection::vec(0usize..COMMANDS.len(), 1..120),
    ) {
        let (mut a, _) = running(seed, 20, 10);
        let (mut b, _) = running(seed, 20, 10);
        for command in script {
            a.apply(COMMANDS[command]);
            b.apply(COMMANDS[command]);
            a.tick(16);
            b.tick(16);
        }
        prop_assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn clearing_runs_cross_level_boundaries(
        seed in any::<u64>(),
        // (gap before the clear in ms, whether an empty lock precedes it)
        steps in prop::collection::vec((0u64..6_000, any::<bool>()), 10..45),
    ) {
        let (mut game, clock) = running(seed, 20, 10);
        let mut expected_score = 0u32;
        let mut expected_combo = 0u32;
        let mut last_clear_at: Option<u64> = None;
        let mut level_ups = 0u32;

        for (gap, empty_lock) in steps {
            if empty_lock {
                // O lands on the empty grid without completing a row
                game.set_pieces(PieceKind::O, PieceKind::O);
                let distance = drop_distance(game.active().unwrap(), game.grid());
                game.hard_drop();
                expected_score += 2 * distance * game.level();
                expected_combo = 0;
                last_clear_at = None;
                game.grid_mut().clear();
            }

            clock.advance(gap);
            let now = clock.now_ms();
            game.set_pieces(PieceKind::I, PieceKind::O);
            for col in (0..3).chain(7..10) {
                game.grid_mut().set(19, col, PieceKind::Z);
            }
            let level = game.level();
            game.hard_drop();

            expected_combo = match last_clear_at {
                Some(prev) if now - prev <= COMBO_WINDOW_MS => expected_combo + 1,
                _ => 1,
            };
            last_clear_at = Some(now);
            expected_score += 2 * 19 * level + 100 * level * expected_combo.min(5);
            level_ups += game
                .drain_events()
                .iter()
                .filter(|e| matches!(e, GameEvent::LevelUp { .. }))
                .count() as u32;

            prop_assert_eq!(game.status(), GameStatus::Running);
            prop_assert_eq!(game.grid().filled_count(), 0);
            prop_assert_eq!(game.combo(), expected_combo);
            prop_assert_eq!(game.score(), expected_score);
            prop_assert_eq!(game.level(), game.lines() / 10 + 1);
            prop_assert_eq!(game.drop_interval_ms(), drop_interval_ms(game.level()));
            prop_assert_eq!(level_ups, game.level() - 1);
        }
        prop_assert!(game.lines() >= 10);
    }
}
