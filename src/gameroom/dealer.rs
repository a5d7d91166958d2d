use super::*;
use crate::cards::Deck;
use crate::cards::judge;
use crate::table::Table;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Central coordinator for a live game of Set.
/// Owns the deck and the countdown, seats the players, and is the single
/// serializing verifier of their claims.
///
/// Key responsibilities:
/// - Round lifecycle: shuffle, deal, countdown, sweep, repeat
/// - Drain claims FIFO and verify each against the live board
/// - Reset the countdown on every valid set, never on a penalty
/// - Deterministic shutdown: stop and join seats in reverse order, then
///   read scores and announce winners
///
/// The round loop selects over {termination, display tick, claim arrival},
/// so a claim wakes it immediately no matter when it lands. There is no
/// idle flag to re-arm and therefore no missed-wake window.
pub struct Dealer {
    config: Config,
    deck: Deck,
    table: Arc<Table>,
    ui: Arc<dyn Ui>,
    claims: Channel<Claim>,
    seats: Vec<Seat>,
    shutdown: CancellationToken,
    deadline: Instant,
}

/// One seated player from the dealer's side: its input handle, its stop
/// token and the join that yields its final score.
struct Seat {
    handle: PlayerHandle,
    stop: CancellationToken,
    task: JoinHandle<u32>,
}

impl Dealer {
    const TICK: Duration = Duration::from_secs(1);

    pub fn new(config: Config, ui: Arc<dyn Ui>) -> Self {
        assert!(config.players <= 32, "token mask holds at most 32 players");
        assert!(config.humans <= config.players);
        let mut dealer = Self {
            deck: Deck::new(config.deck_size),
            table: Arc::new(Table::new(config.table_size)),
            claims: Channel::default(),
            seats: Vec::new(),
            shutdown: CancellationToken::new(),
            deadline: Instant::now() + config.turn_timeout,
            config,
            ui,
        };
        for id in 0..dealer.config.players {
            dealer.sit(id < dealer.config.humans);
        }
        dealer
    }

    /// Seat one player, spawning its task (and its bot, for computer
    /// players) immediately. Input stays gated off until a round starts.
    fn sit(&mut self, human: bool) {
        let id = self.seats.len();
        let stop = self.shutdown.child_token();
        let (handle, task) = Agent::spawn(
            id,
            human,
            &self.config,
            self.table.clone(),
            self.ui.clone(),
            self.claims.tx(),
            stop.clone(),
        );
        self.seats.push(Seat { handle, stop, task });
    }

    pub fn table(&self) -> Arc<Table> {
        self.table.clone()
    }

    /// Input handle for a seated player; this is where keyboards plug in.
    pub fn handle(&self, id: usize) -> PlayerHandle {
        self.seats[id].handle.clone()
    }

    /// Cancelling this token requests termination of the whole room.
    pub fn shutdown(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Main loop: rounds until termination is requested or the remaining
    /// deck cannot yield another set, then shutdown and winners.
    pub async fn run(mut self) -> Vec<usize> {
        log::info!("dealer starting with {} players", self.seats.len());
        while !self.should_finish() {
            self.shuffle();
            self.restock();
            self.enable(true);
            self.round().await;
            self.sweep();
        }
        let scores = self.retire().await;
        log::info!("dealer terminated");
        self.winners(&scores)
    }

    /// The check runs between rounds, when the sweep has returned every
    /// card to the deck, so scanning the deck is the global "no set
    /// possible anywhere" condition.
    fn should_finish(&self) -> bool {
        self.shutdown.is_cancelled() || judge::find_any_set(self.deck.cards(), 1).is_empty()
    }

    fn shuffle(&mut self) {
        match self.config.seed {
            Some(seed) => self.deck.shuffle(&mut SmallRng::seed_from_u64(seed)),
            None => self.deck.shuffle(&mut rand::rng()),
        }
    }

    /// Deal from the deck into every open position, while the deck lasts.
    fn restock(&mut self) {
        for slot in 0..self.table.size() {
            if self.table.can_place_card(slot) {
                match self.deck.draw() {
                    Some(card) => self.table.place_card(card, slot),
                    None => break,
                }
            }
        }
    }

    fn enable(&self, on: bool) {
        for seat in &self.seats {
            seat.handle.set_can_act(on);
        }
    }

    /// One countdown's worth of play. Idle waiting happens in bounded
    /// one-second ticks that republish the remaining time; a claim or a
    /// termination request interrupts the tick immediately.
    async fn round(&mut self) {
        self.reset_countdown();
        loop {
            let now = Instant::now();
            if self.shutdown.is_cancelled() || now >= self.deadline {
                break;
            }
            let tick = self.deadline.min(now + Self::TICK);
            tokio::select! {
                _ = self.shutdown.cancelled() => break,
                _ = tokio::time::sleep_until(tick) => self.publish_countdown(),
                claim = self.claims.rx().recv() => {
                    if let Some(claim) = claim {
                        self.verify(claim);
                        while let Ok(claim) = self.claims.rx().try_recv() {
                            self.verify(claim);
                        }
                        self.publish_countdown();
                    }
                }
            }
        }
    }

    /// Verify one claim. Slots translate to cards here, at dequeue time:
    /// the dealer is the only remover of cards, so this is the one
    /// consistent snapshot. A slot emptied since the claim was made can
    /// no longer name a set, so such a claim is judged invalid.
    fn verify(&mut self, claim: Claim) {
        let cards = claim.slots.map(|slot| self.table.card_at(slot));
        let valid = match cards {
            [Some(a), Some(b), Some(c)] => judge::is_valid_set(a, b, c),
            _ => false,
        };
        log::info!(
            "P{} claim {:?} -> {}",
            claim.player,
            claim.slots,
            if valid { "point" } else { "penalty" }
        );
        if valid {
            for slot in claim.slots {
                let _ = self.table.remove_card(slot);
                for seat in &self.seats {
                    seat.handle.deliver(Event::Revoke(slot));
                }
            }
            self.seats[claim.player].handle.deliver(Event::Point);
            self.restock();
            self.reset_countdown();
        } else {
            self.seats[claim.player].handle.deliver(Event::Penalty);
        }
    }

    fn reset_countdown(&mut self) {
        self.deadline = Instant::now() + self.config.turn_timeout;
        self.ui.set_countdown(self.config.turn_timeout, false);
    }

    fn publish_countdown(&self) {
        let remaining = self.deadline.saturating_duration_since(Instant::now());
        self.ui
            .set_countdown(remaining, remaining <= self.config.warning_time);
    }

    /// Return every card to the deck, reset the players for the next
    /// round, and drop claims that will never be judged (their players
    /// are re-enabled by the next round's gate).
    fn sweep(&mut self) {
        for slot in 0..self.table.size() {
            if let Some(card) = self.table.remove_card(slot) {
                self.deck.put_back(card);
            }
        }
        for seat in &self.seats {
            seat.handle.set_can_act(false);
            seat.handle.deliver(Event::NewRound);
        }
        while self.claims.rx().try_recv().is_ok() {}
    }

    /// Stop and join every seat in reverse seating order; each agent joins
    /// its own bot before its task resolves, so by the time the scores
    /// come out of the joins no player thread of control is running.
    async fn retire(&mut self) -> Vec<u32> {
        self.shutdown.cancel();
        for seat in self.seats.iter().rev() {
            seat.stop.cancel();
        }
        let mut scores = vec![0; self.seats.len()];
        for seat in self.seats.drain(..).rev() {
            let id = seat.handle.id();
            scores[id] = seat.task.await.unwrap_or_else(|e| {
                log::warn!("P{} task failed: {}", id, e);
                0
            });
        }
        scores
    }

    /// Every player tied at the top score shares the win.
    fn winners(&self, scores: &[u32]) -> Vec<usize> {
        let best = scores.iter().copied().max().unwrap_or(0);
        let winners = scores
            .iter()
            .enumerate()
            .filter(|(_, score)| **score == best)
            .map(|(id, _)| id)
            .collect::<Vec<_>>();
        log::info!("winners {:?} with {} point(s)", winners, best);
        self.ui.announce_winners(&winners);
        winners
    }
}
