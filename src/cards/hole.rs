use super::card::Card;
use super::hand::Hand;
use crate::error::Error;

/// A player's two private cards.
///
/// Stored as a two-card [`Hand`], so the order the cards were dealt in is
/// not part of its identity: `AsKd` and `KdAs` are the same hole.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    /// The higher card by encoding order (rank, then suit).
    pub fn hi(&self) -> Card {
        self.cards().1
    }
    /// The lower card by encoding order (rank, then suit).
    pub fn lo(&self) -> Card {
        self.cards().0
    }
    /// Both cards, lower first.
    pub fn cards(&self) -> (Card, Card) {
        let mut cards = self.0;
        match (cards.next(), cards.next()) {
            (Some(lo), Some(hi)) => (lo, hi),
            _ => unreachable!("hole always holds two cards"),
        }
    }
    pub fn is_pair(&self) -> bool {
        self.lo().rank() == self.hi().rank()
    }
    pub fn is_suited(&self) -> bool {
        self.lo().suit() == self.hi().suit()
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.hi(), self.lo())
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}
impl TryFrom<Hand> for Hole {
    type Error = Error;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            2 => Ok(Self(hand)),
            _ => Err(Error::InvalidHole(hand.to_string())),
        }
    }
}

impl TryFrom<(Card, Card)> for Hole {
    type Error = Error;
    fn try_from((a, b): (Card, Card)) -> Result<Self, Self::Error> {
        match a == b {
            true => Err(Error::DuplicateCard(a)),
            false => Ok(Self(Hand::add(Hand::from(a), Hand::from(b)))),
        }
    }
}

/// str isomorphism, e.g. "AsKd"
impl TryFrom<&str> for Hole {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match Card::parse(s)?.as_slice() {
            [a, b] => Self::try_from((*a, *b)),
            _ => Err(Error::InvalidHole(s.to_string())),
        }
    }
}

impl serde::Serialize for Hole {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
