use super::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Synthetic keypress generator for computer players. Offers a uniform
/// random position at a steady pace; the handle's gate drops offers while
/// the player is frozen or between rounds. Joined by its agent before the
/// agent itself reports termination.
pub struct Bot;

impl Bot {
    pub fn spawn(handle: PlayerHandle, stop: CancellationToken, config: &Config) -> JoinHandle<()> {
        let slots = config.table_size;
        let interval = config.bot_interval;
        tokio::spawn(async move {
            log::debug!("bot for P{} starting", handle.id());
            let mut rng = SmallRng::from_os_rng();
            loop {
                tokio::select! {
                    _ = stop.cancelled() => break,
                    _ = tokio::time::sleep(interval) => handle.select(rng.random_range(0..slots)),
                }
            }
            log::debug!("bot for P{} terminated", handle.id());
        })
    }
}
