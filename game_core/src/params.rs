/// Game tuning parameters for Blink Hit
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Board
    pub const BOARD_WIDTH: f64 = 500.0;
    pub const BOARD_HEIGHT: f64 = 500.0;
    pub const CELL_SIZE: f64 = 50.0;

    // Scoreboard
    pub const SCOREBOARD_WIDTH: f64 = 500.0;
    pub const SCOREBOARD_HEIGHT: f64 = 100.0;

    // Circles
    pub const TARGET_RADIUS: f64 = 15.0;
    pub const CENTER_DOT_RADIUS: f64 = 5.0;
    pub const HIT_MARK_RADIUS: f64 = 12.0;
    pub const HIT_RADIUS: f64 = 15.0; // Same as the drawn target

    // Rounds
    pub const WIN_HITS: u32 = 50;
    pub const TICK_MS: u32 = 1000; // One "second played" per tick
}
