use clap::Parser;
use setroom::gameroom::Config;
use setroom::gameroom::Dealer;
use setroom::gameroom::LogUi;
use std::sync::Arc;
use std::time::Duration;

/// Concurrent dealer/player engine for the card game Set.
///
/// Human seats take input through the library's PlayerHandle; this binary
/// wires no keyboard, so an all-human room just idles until ctrl-c.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of seated players.
    #[arg(long, default_value_t = 2)]
    players: usize,
    /// How many of them are human; the rest get keypress bots.
    #[arg(long, default_value_t = 0)]
    humans: usize,
    /// Round length in seconds.
    #[arg(long, default_value_t = 60)]
    timeout: u64,
    /// Fixed shuffle seed for reproducible games.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    anyhow::ensure!(args.players >= 1, "need at least one player");
    anyhow::ensure!(args.players <= 32, "at most 32 players");
    anyhow::ensure!(args.humans <= args.players, "more humans than players");
    let config = Config {
        players: args.players,
        humans: args.humans,
        turn_timeout: Duration::from_secs(args.timeout),
        seed: args.seed,
        ..Config::default()
    };
    let dealer = Dealer::new(config, Arc::new(LogUi));
    let shutdown = dealer.shutdown();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("ctrl-c, shutting down");
            shutdown.cancel();
        }
    });
    dealer.run().await;
    Ok(())
}
