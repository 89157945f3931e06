use crate::{Params, TargetGrid};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub board_width: f64,
    pub board_height: f64,
    pub scoreboard_width: f64,
    pub scoreboard_height: f64,
    pub cell_size: f64,
    pub target_radius: f64,
    pub center_dot_radius: f64,
    pub hit_mark_radius: f64,
    pub hit_radius: f64,
    pub win_hits: u32,
    pub tick_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_width: Params::BOARD_WIDTH,
            board_height: Params::BOARD_HEIGHT,
            scoreboard_width: Params::SCOREBOARD_WIDTH,
            scoreboard_height: Params::SCOREBOARD_HEIGHT,
            cell_size: Params::CELL_SIZE,
            target_radius: Params::TARGET_RADIUS,
            center_dot_radius: Params::CENTER_DOT_RADIUS,
            hit_mark_radius: Params::HIT_MARK_RADIUS,
            hit_radius: Params::HIT_RADIUS,
            win_hits: Params::WIN_HITS,
            tick_ms: Params::TICK_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the number of hits needed to finish
    pub fn with_win_hits(mut self, win_hits: u32) -> Self {
        self.win_hits = win_hits;
        self
    }

    /// Addressable target cells for the configured board
    pub fn grid(&self) -> TargetGrid {
        TargetGrid::for_board(self.board_width, self.board_height, self.cell_size)
    }
}
