/// Immutable snapshot of a player's three marked positions, handed to the
/// dealer for verification. At most one is pending per player: the agent
/// freezes its own input the moment it submits.
///
/// Positions, not cards: the dealer translates to cards at dequeue time,
/// since only the dealer sees a consistent view of card removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claim {
    pub player: usize,
    pub slots: [usize; 3],
}
