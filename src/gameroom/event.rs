/// Everything that can land in a player's inbox. Keypresses and verdicts
/// share the queue but never a representation, so handling is exhaustive
/// and a verdict can never be mistaken for a chosen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A position chosen by the player's input surface (key or bot).
    Select(usize),
    /// Verdict: the submitted triple was a set.
    Point,
    /// Verdict: the submitted triple was not a set.
    Penalty,
    /// The dealer removed this position's card; drop any selection on it.
    Revoke(usize),
    /// Round boundary: clear selection and queued input unconditionally.
    NewRound,
}
