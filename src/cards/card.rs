/// One of the 81 Set cards.
///
/// The identifier reads as four base-3 digits, one per feature
/// (count, shape, shading, color).
/// 47
/// [2, 0, 2, 1]
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub const FEATURES: usize = 4;
    pub const UNIVERSE: usize = 81;

    pub fn feature(&self, i: usize) -> u8 {
        (self.0 / 3u8.pow(i as u32)) % 3
    }

    pub fn features(&self) -> [u8; Self::FEATURES] {
        [
            self.feature(0),
            self.feature(1),
            self.feature(2),
            self.feature(3),
        ]
    }
}

/// u8 isomorphism
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!((n as usize) < Self::UNIVERSE, "invalid card u8: {}", n);
        Self(n)
    }
}
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let [a, b, c, d] = self.features();
        write!(f, "{}{}{}{}", a, b, c, d)
    }
}

use std::fmt::{Display, Formatter, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_are_base_3_digits() {
        let card = Card::from(47u8);
        assert_eq!(card.features(), [2, 0, 2, 1]);
        assert_eq!(u8::from(card), 2 + 0 * 3 + 2 * 9 + 1 * 27);
    }

    #[test]
    fn u8_isomorphism() {
        for n in 0..Card::UNIVERSE as u8 {
            assert_eq!(u8::from(Card::from(n)), n);
        }
    }

    #[test]
    #[should_panic]
    fn universe_is_bounded() {
        let _ = Card::from(81u8);
    }
}
