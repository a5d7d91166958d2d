/// Coupled sender/receiver pair for the claim queue.
/// The dealer keeps the receiving half; every seated player gets a clone
/// of the sender. Enqueueing never blocks.
#[derive(Debug)]
pub struct Channel<T> {
    tx: tokio::sync::mpsc::UnboundedSender<T>,
    rx: tokio::sync::mpsc::UnboundedReceiver<T>,
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        Self { tx, rx }
    }
}

impl<T> Channel<T> {
    pub fn tx(&self) -> tokio::sync::mpsc::UnboundedSender<T> {
        self.tx.clone()
    }

    pub fn rx(&mut self) -> &mut tokio::sync::mpsc::UnboundedReceiver<T> {
        &mut self.rx
    }
}
