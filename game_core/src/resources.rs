use crate::Vec2;

/// Score and round tracking for one game
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoundState {
    pub hits: u32,
    pub seconds_played: u32, // Unbounded; one per tick
    pub current_target: Option<Vec2>,
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_hits(&mut self) {
        self.hits += 1;
    }

    pub fn increment_seconds(&mut self) {
        self.seconds_played += 1;
    }

    pub fn has_won(&self, win_hits: u32) -> bool {
        self.hits >= win_hits
    }

    /// Scoreboard line shared by the running and final views
    pub fn stats_line(&self) -> String {
        format!(
            "Seconds elapsed:  {}  Score:  {}",
            self.seconds_played, self.hits
        )
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}
