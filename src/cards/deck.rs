use super::card::Card;
use rand::Rng;
use rand::seq::SliceRandom;

/// Ordered pile of cards not currently on the table. Owned exclusively by
/// the dealer: it shrinks as cards are dealt and grows when the table is
/// swept between rounds, so deck ∪ table is always the full universe.
#[derive(Debug, Clone, Default)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// every identifier in 0..size exactly once
    pub fn new(size: usize) -> Self {
        Self((0..size as u8).map(Card::from).collect())
    }

    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    /// Deal the next card, if any. Drawing from the tail of a shuffled
    /// pile is the same distribution as dealing from the head.
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }

    /// Return a swept card to the pile.
    pub fn put_back(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn remaining(&self) -> usize {
        self.0.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_deck_holds_every_card_once() {
        let deck = Deck::new(81);
        assert_eq!(deck.remaining(), 81);
        let mut seen = [false; 81];
        for card in deck.cards() {
            let n = u8::from(*card) as usize;
            assert!(!seen[n]);
            seen[n] = true;
        }
    }

    #[test]
    fn shuffle_preserves_the_multiset() {
        let mut deck = Deck::new(81);
        deck.shuffle(&mut rand::rng());
        let mut cards = deck.cards().to_vec();
        cards.sort();
        assert_eq!(cards, Deck::new(81).cards());
    }

    #[test]
    fn draw_and_put_back_conserve_cards() {
        let mut deck = Deck::new(12);
        let card = deck.draw().unwrap();
        assert_eq!(deck.remaining(), 11);
        deck.put_back(card);
        assert_eq!(deck.remaining(), 12);
    }
}
