use game_core::headless::{DrawCommand, RecordingSurface};
use game_core::*;

fn surfaces(config: &Config) -> (RecordingSurface, RecordingSurface) {
    (
        RecordingSurface::new(config.board_width, config.board_height)
            .with_scale(2.0)
            .with_origin(Vec2::new(8.0, 8.0)),
        RecordingSurface::new(config.scoreboard_width, config.scoreboard_height),
    )
}

#[test]
fn test_fifty_hits_finish_the_game() {
    let config = Config::new();
    let (board, scoreboard) = surfaces(&config);
    let clicks = board.click_source();
    let engine = launch(board, scoreboard, config, GameRng::new(2024));
    assert_eq!(engine.borrow().phase(), Phase::Running);

    // One successful click per tick
    for round in 1..=50 {
        assert_eq!(engine.borrow_mut().tick(), Phase::Running, "round {round}");
        let target = engine.borrow().state().current_target.expect("armed");
        assert!(clicks.click_client(target + Vec2::new(8.0, 8.0)));
        assert_eq!(engine.borrow().state().hits, round);
    }

    // The threshold is evaluated on the following tick
    assert_eq!(engine.borrow_mut().tick(), Phase::Finished);
    let state = *engine.borrow().state();
    assert_eq!(state.hits, 50);
    assert_eq!(state.seconds_played, 51);

    let texts = engine.borrow().scoreboard().texts().join("\n");
    assert!(texts.ends_with(
        "Congrats!  You made 50 hits in 51 seconds!\nSeconds elapsed:  51  Score:  50"
    ));

    // Nothing changes once finished
    let center = engine.borrow().grid().cell_center(5, 5);
    clicks.click(center);
    engine.borrow_mut().tick();
    assert_eq!(*engine.borrow().state(), state);
    assert_eq!(engine.borrow().phase(), Phase::Finished);
}

#[test]
fn test_misses_never_score() {
    let config = Config::new();
    let (board, scoreboard) = surfaces(&config);
    let clicks = board.click_source();
    let engine = launch(board, scoreboard, config, GameRng::new(99));

    for _ in 0..20 {
        engine.borrow_mut().tick();
        let target = engine.borrow().state().current_target.expect("armed");
        // Between two cells, out of reach of any target
        clicks.click(target + Vec2::new(25.0, 25.0));
    }
    assert_eq!(engine.borrow().state().hits, 0);
    assert_eq!(engine.borrow().state().seconds_played, 20);
    assert_eq!(engine.borrow().phase(), Phase::Running);
}

#[test]
fn test_untranslated_client_click_misses() {
    let config = Config::new();
    let (board, scoreboard) = surfaces(&config);
    let clicks = board.click_source();
    let engine = launch(board, scoreboard, config, GameRng::new(5));

    engine.borrow_mut().tick();
    let target = engine.borrow().state().current_target.expect("armed");
    // Host positions are shifted by the (8, 8) origin before the hit test
    clicks.click_client(target - Vec2::new(8.0, 8.0));
    clicks.click_client(target + Vec2::new(8.0 + 16.0, 8.0));
    assert_eq!(engine.borrow().state().hits, 0);
}

#[test]
fn test_same_seed_same_targets() {
    let run = |seed| {
        let config = Config::new();
        let (board, scoreboard) = surfaces(&config);
        let engine = launch(board, scoreboard, config, GameRng::new(seed));
        let targets: Vec<Vec2> = (0..30)
            .map(|_| {
                engine.borrow_mut().tick();
                engine.borrow().state().current_target.expect("armed")
            })
            .collect();
        targets
    };
    assert_eq!(run(11), run(11));
}

#[test]
fn test_targets_may_repeat() {
    let config = Config::new();
    let (board, scoreboard) = surfaces(&config);
    let engine = launch(board, scoreboard, config, GameRng::new(3));
    let mut previous = None;
    let mut repeated = false;
    // 81 cells, so 2000 ticks repeat consecutively with near certainty
    for _ in 0..2000 {
        engine.borrow_mut().tick();
        let target = engine.borrow().state().current_target;
        repeated |= target == previous;
        previous = target;
    }
    assert!(repeated, "Previous target is not excluded");
}

#[test]
fn test_scoreboard_text_is_centered() {
    let config = Config::new();
    let (board, scoreboard) = surfaces(&config);
    let engine = launch(board, scoreboard, config, GameRng::default());
    let engine = engine.borrow();
    for cmd in engine.scoreboard().commands() {
        if let DrawCommand::Text { text, origin, font_size, .. } = cmd {
            let metrics = RecordingSurface::measure_text(text, *font_size);
            let center_x = origin.x + metrics.width / 2.0;
            assert!((center_x - 250.0).abs() < 1e-9, "{text} centered at {center_x}");
        }
    }
}
