use crate::cards::Card;

/// One board position: at most one card, plus a bitmask of player
/// tokens (bit i set iff player i holds a token here).
#[derive(Debug, Default, Clone, Copy)]
pub struct Slot {
    pub card: Option<Card>,
    pub tokens: u32,
}
