use super::rank::Rank;
use super::suit::Suit;
use crate::error::Error;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields a natural ordering where cards are sorted
/// first by rank, then by suit within each rank.
///
/// # Representations
///
/// - `u8`: Compact index `0..52` for array indexing and serialization
/// - `u64`: Single-bit representation for set membership in [`Hand`]
///
/// # Parsing
///
/// Cards can be parsed from two-character strings like `"As"` (ace of spades)
/// or `"Tc"` (ten of clubs). Use [`Card::parse`] for multiple cards.
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// All 52 cards in encoding order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..52u8).map(Self)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl TryFrom<u8> for Card {
    type Error = Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0..52 => Ok(Self(n)),
            _ => Err(Error::InvalidCard(n.to_string())),
        }
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match (s.get(0..1), s.get(1..2), s.len()) {
            (Some(rank), Some(suit), 2) => {
                let rank = Rank::try_from(rank).map_err(|_| Error::InvalidCard(s.to_string()))?;
                let suit = Suit::try_from(suit).map_err(|_| Error::InvalidCard(s.to_string()))?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(Error::InvalidCard(s.to_string())),
        }
    }
}
impl Card {
    /// Parses a string of concatenated card notations into a vector of cards.
    ///
    /// Whitespace is ignored. Each card is two characters: rank then suit.
    /// Returns an error if any card fails to parse.
    pub fn parse(s: &str) -> Result<Vec<Self>, Error> {
        s.replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
}

impl serde::Serialize for Card {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        for card in Card::all() {
            assert!(card == Card::from((card.rank(), card.suit())));
        }
    }

    #[test]
    fn bijective_u8() {
        for card in Card::all() {
            assert_eq!(Ok(card), Card::try_from(u8::from(card)));
        }
    }

    #[test]
    fn bijective_str() {
        for card in Card::all() {
            assert_eq!(Ok(card), Card::try_from(card.to_string().as_str()));
        }
    }

    #[test]
    fn ten_of_spades() {
        let card = Card::try_from("Ts").unwrap();
        assert_eq!(u8::from(card), 35);
        assert_eq!(card.rank(), Rank::Ten);
        assert_eq!(card.suit(), Suit::Spade);
    }

    #[test]
    fn parse_concatenated() {
        let cards = Card::parse("AsKd 2c").unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[1].to_string(), "Kd");
    }

    #[test]
    fn invalid_tokens() {
        assert!(matches!(Card::try_from("Xs"), Err(Error::InvalidCard(_))));
        assert!(matches!(Card::try_from("Ax"), Err(Error::InvalidCard(_))));
        assert!(matches!(Card::try_from("A"), Err(Error::InvalidCard(_))));
        assert!(matches!(Card::try_from("Ass"), Err(Error::InvalidCard(_))));
        assert!(matches!(Card::parse("Invalid"), Err(Error::InvalidCard(_))));
        assert!(Card::try_from(52u8).is_err());
    }
}
