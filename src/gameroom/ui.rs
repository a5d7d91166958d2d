use colored::Colorize;
use std::time::Duration;

/// Write-only display surface. The engine publishes countdown, score,
/// freeze and winner state here and never reads anything back, so an
/// implementation can render however it likes without touching game
/// state. Rendering of an actual screen is out of scope; this trait is
/// the seam.
pub trait Ui: Send + Sync {
    fn set_countdown(&self, remaining: Duration, warn: bool);
    fn set_score(&self, player: usize, score: u32);
    fn set_freeze(&self, player: usize, remaining: Duration);
    fn announce_winners(&self, players: &[usize]);
}

/// Renders through the log facade; the default for headless runs.
#[derive(Debug, Default)]
pub struct LogUi;

impl Ui for LogUi {
    fn set_countdown(&self, remaining: Duration, warn: bool) {
        match warn {
            true => log::info!("countdown {:>3}s !", remaining.as_secs()),
            false => log::debug!("countdown {:>3}s", remaining.as_secs()),
        }
    }
    fn set_score(&self, player: usize, score: u32) {
        log::info!("P{} score {}", player, score);
    }
    fn set_freeze(&self, player: usize, remaining: Duration) {
        log::debug!("P{} frozen for {}s", player, remaining.as_secs());
    }
    fn announce_winners(&self, players: &[usize]) {
        let ids = players
            .iter()
            .map(|p| format!("P{}", p))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{} {}", "WINNERS".bold().green(), ids);
    }
}
