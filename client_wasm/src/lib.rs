//! Browser host for Blink Hit
//!
//! Mounts a board and a scoreboard canvas, starts the round engine and
//! drives it from a one-second interval. All game rules live in
//! `game_core`; this crate only supplies the canvas surface, the timer and
//! console logging.
//!
//! Note: only compiled for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod logger;
mod surface;
mod ticker;

pub use surface::CanvasSurface;
pub use ticker::Ticker;

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Config, GameRng, Phase};
use wasm_bindgen::prelude::*;

thread_local! {
    // Running game's timer; the engine lives inside its callback
    static TICKER: RefCell<Option<Rc<RefCell<Ticker>>>> = const { RefCell::new(None) };
}

/// Build both surfaces and start the game. Calling it again is a no-op.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    if TICKER.with(|t| t.borrow().is_some()) {
        log::warn!("game already started");
        return Ok(());
    }

    let config = Config::new();
    let board = CanvasSurface::mount(config.board_width, config.board_height)?;
    let scoreboard = CanvasSurface::mount(config.scoreboard_width, config.scoreboard_height)?;

    let seed = js_sys::Date::now() as u64;
    let tick_ms = config.tick_ms;
    let engine = game_core::launch(board, scoreboard, config, GameRng::new(seed));

    let ticker = Rc::new(RefCell::new(Ticker::new()));
    let weak_ticker = Rc::downgrade(&ticker);
    ticker.borrow_mut().start(tick_ms, move || {
        if engine.borrow_mut().tick() == Phase::Finished {
            if let Some(ticker) = weak_ticker.upgrade() {
                ticker.borrow_mut().stop();
            }
        }
    })?;

    TICKER.with(|t| *t.borrow_mut() = Some(ticker));
    Ok(())
}
