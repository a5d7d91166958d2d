use super::*;
use crate::table::Table;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Cloneable front of a seated player: the inbox sender plus the gate
/// deciding whether keypresses are accepted at all. This is the input
/// surface: keyboards, bots and tests all go through `select`.
#[derive(Debug, Clone)]
pub struct PlayerHandle {
    id: usize,
    tx: UnboundedSender<Event>,
    can_act: Arc<AtomicBool>,
}

impl PlayerHandle {
    pub fn id(&self) -> usize {
        self.id
    }

    /// Offer a position. Dropped while the player may not act (frozen,
    /// awaiting a verdict, or between rounds). Never blocks.
    pub fn select(&self, slot: usize) {
        if self.can_act.load(Ordering::Acquire) {
            self.deliver(Event::Select(slot));
        }
    }

    /// Verdicts and round control bypass the gate.
    pub(crate) fn deliver(&self, event: Event) {
        self.tx
            .send(event)
            .unwrap_or_else(|e| log::warn!("P{} inbox closed: {:?}", self.id, e));
    }

    pub(crate) fn set_can_act(&self, on: bool) {
        self.can_act.store(on, Ordering::Release);
    }
}

/// Task half of a seated player. Owns the inbox receiver, the in-progress
/// selection and the score; the score leaves only through the join, after
/// the task (and its bot) have fully exited.
pub struct Agent {
    id: usize,
    config: Config,
    table: Arc<Table>,
    ui: Arc<dyn Ui>,
    rx: UnboundedReceiver<Event>,
    claims: UnboundedSender<Claim>,
    can_act: Arc<AtomicBool>,
    stop: CancellationToken,
    selection: Vec<usize>,
    score: u32,
    bot: Option<JoinHandle<()>>,
}

impl Agent {
    /// Seat a player: spawn its task (plus a keypress bot for computer
    /// players) and return the input handle and the join yielding the
    /// final score.
    pub fn spawn(
        id: usize,
        human: bool,
        config: &Config,
        table: Arc<Table>,
        ui: Arc<dyn Ui>,
        claims: UnboundedSender<Claim>,
        stop: CancellationToken,
    ) -> (PlayerHandle, JoinHandle<u32>) {
        let (tx, rx) = unbounded_channel();
        let handle = PlayerHandle {
            id,
            tx,
            can_act: Arc::new(AtomicBool::new(false)),
        };
        let bot = match human {
            true => None,
            false => Some(Bot::spawn(handle.clone(), stop.clone(), config)),
        };
        let agent = Agent {
            id,
            config: config.clone(),
            table,
            ui,
            rx,
            claims,
            can_act: handle.can_act.clone(),
            stop,
            selection: Vec::with_capacity(3),
            score: 0,
            bot,
        };
        (handle, tokio::spawn(agent.run()))
    }

    async fn run(mut self) -> u32 {
        log::debug!("P{} starting", self.id);
        loop {
            tokio::select! {
                _ = self.stop.cancelled() => break,
                event = self.rx.recv() => match event {
                    Some(event) => self.process(event).await,
                    None => break,
                },
            }
        }
        if let Some(bot) = self.bot.take() {
            let _ = bot.await;
        }
        log::debug!("P{} terminated with score {}", self.id, self.score);
        self.score
    }

    async fn process(&mut self, event: Event) {
        match event {
            Event::Select(slot) => self.select(slot),
            Event::Point => self.point().await,
            Event::Penalty => self.penalty().await,
            Event::Revoke(slot) => self.selection.retain(|&s| s != slot),
            Event::NewRound => self.reset(),
        }
    }

    /// Toggle off if our token already sits there; otherwise claim the
    /// position if it still shows a card and we hold fewer than three
    /// tokens. The card check happens again under the slot lock, since
    /// the dealer may have emptied the position after this event was
    /// queued; in that case the select is silently a no-op.
    fn select(&mut self, slot: usize) {
        if self.table.remove_token(self.id, slot) {
            self.selection.retain(|&s| s != slot);
        } else if self.selection.len() < 3 && self.table.place_token(self.id, slot) {
            self.selection.push(slot);
            if self.selection.len() == 3 {
                self.submit();
            }
        }
    }

    /// Third token placed: freeze our own input, discard whatever
    /// keypresses are still queued (stale), snapshot the selection into a
    /// claim and hand it to the dealer. The selection clears here so
    /// nothing local can mutate it while the verdict is pending.
    fn submit(&mut self) {
        self.can_act.store(false, Ordering::Release);
        self.drain();
        let slots = [self.selection[0], self.selection[1], self.selection[2]];
        self.selection.clear();
        log::info!("P{} claims {:?}", self.id, slots);
        self.claims
            .send(Claim {
                player: self.id,
                slots,
            })
            .unwrap_or_else(|e| log::warn!("P{} claim queue closed: {:?}", self.id, e));
    }

    async fn point(&mut self) {
        self.selection.clear();
        self.drain();
        self.freeze(self.config.point_freeze).await;
        self.score += 1;
        self.ui.set_score(self.id, self.score);
        self.can_act.store(true, Ordering::Release);
    }

    async fn penalty(&mut self) {
        self.selection.clear();
        self.drain();
        self.freeze(self.config.penalty_freeze).await;
        self.can_act.store(true, Ordering::Release);
    }

    fn reset(&mut self) {
        self.selection.clear();
        self.drain();
    }

    fn drain(&mut self) {
        while self.rx.try_recv().is_ok() {}
    }

    /// Blocks only this player's loop, never a shared lock. Publishes the
    /// remaining freeze time once a second; termination cuts it short.
    async fn freeze(&mut self, duration: Duration) {
        let mut remaining = duration;
        loop {
            self.ui.set_freeze(self.id, remaining);
            if remaining.is_zero() {
                return;
            }
            let step = remaining.min(Duration::from_secs(1));
            tokio::select! {
                _ = self.stop.cancelled() => return,
                _ = tokio::time::sleep(step) => remaining -= step,
            }
        }
    }
}
