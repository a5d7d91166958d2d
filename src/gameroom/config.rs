use std::time::Duration;

/// Game parameters. Defaults mirror the classic ruleset: 81 cards,
/// 12 positions, one-minute rounds with a 10 second warning.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seated players; the first `humans` of them take external input,
    /// the rest are driven by synthetic keypress bots.
    pub players: usize,
    pub humans: usize,
    pub table_size: usize,
    pub deck_size: usize,
    /// Round length; a valid set resets the countdown to this.
    pub turn_timeout: Duration,
    /// Remaining time at which the countdown display turns urgent.
    pub warning_time: Duration,
    /// Input freeze after a point verdict.
    pub point_freeze: Duration,
    /// Input freeze after a penalty verdict.
    pub penalty_freeze: Duration,
    /// Pace of synthetic keypresses.
    pub bot_interval: Duration,
    /// Fixed shuffle seed for reproducible games; None draws from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 2,
            humans: 0,
            table_size: 12,
            deck_size: 81,
            turn_timeout: Duration::from_secs(60),
            warning_time: Duration::from_secs(10),
            point_freeze: Duration::from_secs(1),
            penalty_freeze: Duration::from_secs(3),
            bot_interval: Duration::from_millis(100),
            seed: None,
        }
    }
}
