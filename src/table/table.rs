use super::slot::Slot;
use crate::cards::Card;
use std::sync::Mutex;
use std::sync::MutexGuard;

/// Shared board. Each position carries its own lock, so a card removal by
/// the dealer and a token placement by a player serialize per slot and
/// never block the rest of the table.
///
/// Cards can disappear between a caller's read and its next write; the
/// mutating operations re-check under the slot lock.
#[derive(Debug)]
pub struct Table {
    slots: Vec<Mutex<Slot>>,
}

impl Table {
    pub fn new(size: usize) -> Self {
        Self {
            slots: (0..size).map(|_| Mutex::new(Slot::default())).collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn can_place_card(&self, slot: usize) -> bool {
        self.slot(slot).card.is_none()
    }

    pub fn place_card(&self, card: Card, slot: usize) {
        self.slot(slot).card = Some(card);
    }

    /// Take the card off a position. Any tokens there die with it: a
    /// marker on an empty slot claims nothing.
    pub fn remove_card(&self, slot: usize) -> Option<Card> {
        let mut guard = self.slot(slot);
        guard.tokens = 0;
        guard.card.take()
    }

    /// Place a token, unless the card vanished since the caller looked.
    /// A false return means the slot is empty and nothing happened.
    pub fn place_token(&self, player: usize, slot: usize) -> bool {
        let mut guard = self.slot(slot);
        match guard.card {
            Some(_) => {
                guard.tokens |= 1 << player;
                true
            }
            None => false,
        }
    }

    /// Remove a token; reports whether it was there.
    pub fn remove_token(&self, player: usize, slot: usize) -> bool {
        let mut guard = self.slot(slot);
        let bit = 1u32 << player;
        let existed = guard.tokens & bit != 0;
        guard.tokens &= !bit;
        existed
    }

    pub fn has_token(&self, player: usize, slot: usize) -> bool {
        self.slot(slot).tokens & (1 << player) != 0
    }

    pub fn card_at(&self, slot: usize) -> Option<Card> {
        self.slot(slot).card
    }

    pub fn count_cards(&self) -> usize {
        (0..self.size())
            .filter(|slot| self.card_at(*slot).is_some())
            .count()
    }

    fn slot(&self, slot: usize) -> MutexGuard<'_, Slot> {
        self.slots[slot].lock().expect("slot lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_place_and_remove() {
        let table = Table::new(3);
        assert!(table.can_place_card(0));
        table.place_card(Card::from(7u8), 0);
        assert!(!table.can_place_card(0));
        assert_eq!(table.card_at(0), Some(Card::from(7u8)));
        assert_eq!(table.count_cards(), 1);
        assert_eq!(table.remove_card(0), Some(Card::from(7u8)));
        assert_eq!(table.count_cards(), 0);
    }

    #[test]
    fn tokens_require_a_card() {
        let table = Table::new(3);
        assert!(!table.place_token(0, 1));
        table.place_card(Card::from(0u8), 1);
        assert!(table.place_token(0, 1));
        assert!(table.has_token(0, 1));
        assert!(!table.has_token(1, 1));
    }

    #[test]
    fn remove_token_reports_existence() {
        let table = Table::new(1);
        table.place_card(Card::from(0u8), 0);
        assert!(!table.remove_token(2, 0));
        assert!(table.place_token(2, 0));
        assert!(table.remove_token(2, 0));
        assert!(!table.remove_token(2, 0));
    }

    #[test]
    fn removing_a_card_clears_every_token() {
        let table = Table::new(1);
        table.place_card(Card::from(0u8), 0);
        assert!(table.place_token(0, 0));
        assert!(table.place_token(1, 0));
        table.remove_card(0);
        assert!(!table.has_token(0, 0));
        assert!(!table.has_token(1, 0));
    }

    #[test]
    fn tokens_are_independent_per_player() {
        let table = Table::new(2);
        table.place_card(Card::from(0u8), 0);
        assert!(table.place_token(0, 0));
        assert!(table.place_token(1, 0));
        assert!(table.remove_token(0, 0));
        assert!(table.has_token(1, 0));
    }
}
