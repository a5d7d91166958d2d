use super::card::Card;

/// The Set rule: a triple is valid iff every feature is all-equal or
/// all-distinct across the three cards. In base 3 both cases are exactly
/// "the digits sum to 0 mod 3".
pub fn is_valid_set(a: Card, b: Card, c: Card) -> bool {
    (0..Card::FEATURES).all(|i| (a.feature(i) + b.feature(i) + c.feature(i)) % 3 == 0)
}

/// Search `cards` for valid triples, stopping after `limit` finds.
/// The dealer probes with limit == 1 to decide whether the remaining
/// deck can still produce a set at all.
pub fn find_any_set(cards: &[Card], limit: usize) -> Vec<[Card; 3]> {
    let mut found = Vec::new();
    for i in 0..cards.len() {
        for j in i + 1..cards.len() {
            for k in j + 1..cards.len() {
                if is_valid_set(cards[i], cards[j], cards[k]) {
                    found.push([cards[i], cards[j], cards[k]]);
                    if found.len() >= limit {
                        return found;
                    }
                }
            }
        }
    }
    found
}
