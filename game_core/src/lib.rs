pub mod color;
pub mod config;
pub mod engine;
pub mod grid;
pub mod headless;
pub mod hit;
pub mod palette;
pub mod params;
pub mod resources;
pub mod surface;

pub use color::*;
pub use config::*;
pub use engine::*;
pub use grid::*;
pub use palette::*;
pub use params::*;
pub use resources::*;
pub use surface::*;

/// 2D point/vector in logical coordinates
pub use glam::DVec2 as Vec2;

use std::cell::RefCell;
use std::rc::Rc;

/// Build a started engine over the given surfaces, with clicks wired in
///
/// The caller drives [`RoundEngine::tick`] from its own fixed-interval
/// timer and stops the timer once it returns [`Phase::Finished`].
pub fn launch<S: Surface + 'static>(
    board: S,
    scoreboard: S,
    config: Config,
    rng: GameRng,
) -> Rc<RefCell<RoundEngine<S>>> {
    let engine = Rc::new(RefCell::new(RoundEngine::new(board, scoreboard, config, rng)));
    attach_click_handler(&engine);
    engine.borrow_mut().start();
    engine
}
