use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use crate::error::Error;

/// The cards still live after some have been dealt.
///
/// Wraps a [`Hand`] of remaining cards. Solvers enumerate or sample from it;
/// the range filter builds villain combos out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A fresh 52-card deck.
    pub fn new() -> Self {
        Self(Hand::full())
    }
    /// All 52 cards minus `used`.
    pub fn remaining(used: Hand) -> Self {
        Self(used.complement())
    }
    /// All 52 cards minus every part, which must be pairwise disjoint.
    ///
    /// Overlap means the same card was dealt twice (hero, villain, board),
    /// which is never silently resolved.
    pub fn excluding(parts: &[Hand]) -> Result<Self, Error> {
        let mut used = Hand::empty();
        for part in parts {
            if let Some(card) = used.intersection(part).next() {
                return Err(Error::DuplicateCard(card));
            }
            used = used.union(part);
        }
        Ok(Self::remaining(used))
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// Remaining cards in encoding order.
    pub fn cards(&self) -> Vec<Card> {
        Vec::from(self.0)
    }
    /// Every unordered two-card combo that can still be dealt.
    pub fn holes(&self) -> impl Iterator<Item = Hole> + '_ {
        let cards = self.cards();
        let n = cards.len();
        (0..n)
            .flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
            .map(move |(i, j)| (cards[i], cards[j]))
            .filter_map(|pair| Hole::try_from(pair).ok())
    }
    /// Number of unordered two-card combos, C(size, 2).
    pub fn n_holes(&self) -> usize {
        let n = self.size();
        n * n.saturating_sub(1) / 2
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        Card::parse(s).unwrap().into_iter().collect()
    }

    #[test]
    fn remaining_after_two() {
        let deck = Deck::remaining(hand("AsKd"));
        assert_eq!(deck.size(), 50);
        assert!(!deck.contains(&Card::try_from("As").unwrap()));
        assert!(!deck.contains(&Card::try_from("Kd").unwrap()));
        assert!(deck.contains(&Card::try_from("Ah").unwrap()));
    }

    #[test]
    fn excluding_disjoint_parts() {
        let deck = Deck::excluding(&[hand("AsAh"), hand("KsKd"), hand("2c7d9h")]).unwrap();
        assert_eq!(deck.size(), 45);
        assert_eq!(deck.n_holes(), 990);
        assert_eq!(deck.holes().count(), 990);
    }

    #[test]
    fn excluding_overlap_fails() {
        let result = Deck::excluding(&[hand("AsAh"), hand("AsKd")]);
        assert_eq!(result, Err(Error::DuplicateCard(Card::try_from("As").unwrap())));
    }

    #[test]
    fn full_deck_combos() {
        assert_eq!(Deck::new().holes().count(), 1326);
    }
}
