use super::card::Card;
use super::hand::Hand;
use super::street::Street;
use crate::error::Error;

/// The community cards, in the order they were dealt.
///
/// Construction guarantees 0, 3, 4 or 5 distinct cards, so every board maps
/// to exactly one [`Street`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn empty() -> Self {
        Self(Vec::with_capacity(5))
    }
    pub fn street(&self) -> Street {
        Street::try_from(self.0.len()).expect("board size checked at construction")
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Cards still to come before showdown.
    pub fn pending(&self) -> usize {
        self.street().n_pending()
    }
    /// Same cards in encoding order. Deal order never matters to equity.
    pub fn sorted(&self) -> Vec<Card> {
        let mut cards = self.0.clone();
        cards.sort();
        cards
    }
}

impl From<&Board> for Hand {
    fn from(board: &Board) -> Self {
        board.0.iter().copied().collect()
    }
}

impl TryFrom<Vec<Card>> for Board {
    type Error = Error;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Street::try_from(cards.len())?;
        let mut seen = Hand::empty();
        for card in cards.iter() {
            if seen.contains(card) {
                return Err(Error::DuplicateCard(*card));
            }
            seen.insert(*card);
        }
        Ok(Self(cards))
    }
}

/// str isomorphism, e.g. "2c7d9h" or "2c 7d 9h"
impl TryFrom<&str> for Board {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
