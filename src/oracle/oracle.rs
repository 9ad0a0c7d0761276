use crate::cards::Card;

/// 5-card hand ranking capability.
///
/// The equity solvers never rank hands themselves; they are generic over an
/// `Oracle` and only ever hand it exactly five distinct cards. Implementors
/// must return a total order where higher is stronger, equal values split
/// the pot, and categories follow the standard ladder (high card, pair, two
/// pair, trips, straight, flush, full house, quads, straight flush) with
/// kicker tie-breaks.
pub trait Oracle: Send + Sync {
    type Strength: Ord + Copy + Send + std::fmt::Debug;
    fn rank5(&self, cards: [Card; 5]) -> Self::Strength;
}
