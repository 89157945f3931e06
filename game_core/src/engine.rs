//! Round engine
//!
//! Drives the game from a fixed-interval ticker and a click source. Both
//! are delivered on one thread, so the engine is shared as
//! `Rc<RefCell<RoundEngine<_>>>` and never locked.

use std::cell::RefCell;
use std::rc::Rc;

use crate::hit::is_hit;
use crate::surface::{FillMode, RectPosition, Surface, TextStyle};
use crate::{Config, GameRng, Palette, RoundState, TargetGrid, Vec2};

/// Engine lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Finished,
}

/// Events that move the engine between phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    Start,
    Win,
}

impl Phase {
    /// Next phase for an event, if the transition is valid
    pub fn next(self, event: PhaseEvent) -> Option<Phase> {
        match (self, event) {
            (Phase::Idle, PhaseEvent::Start) => Some(Phase::Running),
            (Phase::Running, PhaseEvent::Win) => Some(Phase::Finished),
            // Finished is terminal
            _ => None,
        }
    }
}

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Hit,
    Miss,
    /// No armed target (not running, or before the first tick)
    Ignored,
}

/// Round/score state machine over a board and a scoreboard surface
pub struct RoundEngine<S: Surface> {
    board: S,
    scoreboard: S,
    config: Config,
    palette: Palette,
    grid: TargetGrid,
    rng: GameRng,
    state: RoundState,
    phase: Phase,
}

impl<S: Surface> RoundEngine<S> {
    pub fn new(board: S, scoreboard: S, config: Config, rng: GameRng) -> Self {
        let grid = config.grid();
        Self {
            board,
            scoreboard,
            config,
            palette: Palette::default(),
            grid,
            rng,
            state: RoundState::new(),
            phase: Phase::Idle,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> TargetGrid {
        self.grid
    }

    pub fn board(&self) -> &S {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut S {
        &mut self.board
    }

    pub fn scoreboard(&self) -> &S {
        &self.scoreboard
    }

    pub fn scoreboard_mut(&mut self) -> &mut S {
        &mut self.scoreboard
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    fn transition(&mut self, event: PhaseEvent) -> bool {
        match self.phase.next(event) {
            Some(next) => {
                self.phase = next;
                true
            }
            None => false,
        }
    }

    /// Draw the initial board and scoreboard and enter `Running`.
    /// Returns false if the engine was already started.
    pub fn start(&mut self) -> bool {
        if !self.transition(PhaseEvent::Start) {
            log::warn!("start ignored in phase {:?}", self.phase);
            return false;
        }
        self.draw_board();
        self.draw_decoys();
        self.draw_scoreboard();
        log::info!(
            "round engine started: {}x{} targets, {} hits to win",
            self.grid.cols(),
            self.grid.rows(),
            self.config.win_hits
        );
        true
    }

    /// Advance one round. A no-op outside `Running`.
    pub fn tick(&mut self) -> Phase {
        if !self.is_running() {
            return self.phase;
        }

        self.draw_decoys();
        let target = self.grid.random_cell(&mut self.rng);
        match target {
            Some(pos) => self.draw_target(pos),
            None => log::warn!("board has no addressable cells"),
        }
        self.state.increment_seconds();
        self.state.current_target = target;
        self.draw_scoreboard();

        if let Some(pos) = target {
            log::debug!(
                "tick {}: target at ({}, {})",
                self.state.seconds_played,
                pos.x,
                pos.y
            );
        }

        if self.state.has_won(self.config.win_hits) {
            self.finish();
        }
        self.phase
    }

    /// Test a click against the target armed at the latest tick
    pub fn handle_click(&mut self, pos: Vec2) -> ClickOutcome {
        if !self.is_running() {
            return ClickOutcome::Ignored;
        }
        let Some(target) = self.state.current_target else {
            return ClickOutcome::Ignored;
        };
        if !is_hit(pos, target, self.config.hit_radius) {
            return ClickOutcome::Miss;
        }

        self.state.increment_hits();
        self.draw_hit_mark(target);
        log::debug!("hit {} at ({}, {})", self.state.hits, pos.x, pos.y);
        ClickOutcome::Hit
    }

    fn finish(&mut self) {
        if !self.transition(PhaseEvent::Win) {
            return;
        }
        self.state.current_target = None;
        self.draw_summary();
        log::info!(
            "finished: {} hits in {} seconds",
            self.state.hits,
            self.state.seconds_played
        );
    }

    // --- Drawing ---

    /// Background plus a checkerboard of squares, offset one cell on odd rows
    fn draw_board(&mut self) {
        let cell = self.config.cell_size;
        let (width, height) = (self.board.width(), self.board.height());
        self.board.clear(&self.palette.background);

        let rows = (height / cell).ceil() as u32;
        for row in 0..rows {
            let y = f64::from(row) * cell;
            let shift = cell * f64::from(row % 2);
            let mut x = 0.0;
            while x < width {
                self.board.draw_rect(
                    Vec2::new(x + shift, y),
                    cell,
                    cell,
                    &self.palette.squares,
                    RectPosition::Origin,
                );
                x += cell * 2.0;
            }
        }
    }

    fn draw_decoys(&mut self) {
        for center in self.grid.centers() {
            self.board.draw_circle(
                center,
                self.config.target_radius,
                &self.palette.decoy_ring,
                FillMode::Fill,
            );
            self.board.draw_circle(
                center,
                self.config.center_dot_radius,
                &self.palette.decoy_dot,
                FillMode::Fill,
            );
        }
    }

    fn draw_target(&mut self, pos: Vec2) {
        self.board.draw_circle(
            pos,
            self.config.target_radius,
            &self.palette.target,
            FillMode::Fill,
        );
        self.board.draw_circle(
            pos,
            self.config.center_dot_radius,
            &self.palette.center_dot,
            FillMode::Fill,
        );
    }

    fn draw_hit_mark(&mut self, pos: Vec2) {
        self.board.draw_circle(
            pos,
            self.config.hit_mark_radius,
            &self.palette.hit_mark,
            FillMode::Fill,
        );
        self.board.draw_circle(
            pos,
            self.config.center_dot_radius,
            &self.palette.center_dot,
            FillMode::Fill,
        );
    }

    fn draw_scoreboard(&mut self) {
        let mid_x = self.scoreboard.width() / 2.0;
        let text = &self.palette.text;
        self.scoreboard.clear(&self.palette.squares);
        self.scoreboard.draw_text(
            "Click on the random blue circle...",
            text,
            Vec2::new(mid_x, 20.0),
            TextStyle::centered(30.0),
        );
        self.scoreboard.draw_text(
            &format!("How fast can you get {} hits?", self.config.win_hits),
            text,
            Vec2::new(mid_x, 50.0),
            TextStyle::centered(20.0),
        );
        self.scoreboard.draw_text(
            &self.state.stats_line(),
            text,
            Vec2::new(mid_x, 80.0),
            TextStyle::centered(20.0),
        );
    }

    fn draw_summary(&mut self) {
        let mid_x = self.scoreboard.width() / 2.0;
        let text = &self.palette.text;
        self.scoreboard.clear(&self.palette.squares);
        self.scoreboard.draw_text(
            &format!(
                "Congrats!  You made {} hits in {} seconds!",
                self.state.hits, self.state.seconds_played
            ),
            text,
            Vec2::new(mid_x, 15.0),
            TextStyle::centered(25.0),
        );
        self.scoreboard.draw_text(
            &self.state.stats_line(),
            text,
            Vec2::new(mid_x, 45.0),
            TextStyle::centered(20.0),
        );
    }
}

/// Route the board's clicks into the engine
///
/// Installs the single click handler once; it reads whatever target is
/// armed when the click arrives. Holds only a weak reference, so dropping
/// the engine silences the handler.
pub fn attach_click_handler<S: Surface + 'static>(engine: &Rc<RefCell<RoundEngine<S>>>) {
    let weak = Rc::downgrade(engine);
    engine
        .borrow_mut()
        .board_mut()
        .set_click_handler(Box::new(move |pos| {
            if let Some(engine) = weak.upgrade() {
                engine.borrow_mut().handle_click(pos);
            }
        }));
}
