use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// Hand represents an unordered set of Cards.
///
/// Stored as a u64 but only the 52 LSBs are used; each bit is one card.
/// Set union, intersection and complement are single instructions, which is
/// what the deck arithmetic and the range filter lean on.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn full() -> Self {
        Self(Self::mask())
    }

    /// Union of two disjoint sets.
    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0 | other.0)
    }
    pub fn intersection(&self, other: &Self) -> Self {
        Self(self.0 & other.0)
    }
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    /// Cards of one suit.
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }
    /// Most cards held in any single suit.
    pub fn suited(&self) -> usize {
        Suit::all()
            .iter()
            .map(|suit| self.of(suit).size())
            .max()
            .unwrap_or(0)
    }
    /// Highest rank present, if any.
    pub fn top(&self) -> Option<Rank> {
        match u16::from(*self) {
            0 => None,
            ranks => Some(Rank::from(ranks)),
        }
    }
    pub fn insert(&mut self, card: Card) {
        self.0 |= u64::from(card);
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }

    const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        match self.0 {
            0 => None,
            bits => {
                let card = Card::try_from(bits.trailing_zeros() as u8).ok()?;
                self.remove(card);
                Some(card)
            }
        }
    }
}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
/// [2c, Ts, Jc, Js]
/// xxxxxxxxxxxx 0000000000001010100000000000000000000000000000000001
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.collect()
    }
}
impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self(
            cards
                .into_iter()
                .map(u64::from)
                .fold(0u64, |a, b| a | b),
        )
    }
}

/// one-way conversion to u16 Rank masks
/// zero-allocation, zero iteration. just shredding bits
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = u64::from(h);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        let mut y = u64::default();
        y |= (x >> 00) & 0x0001;
        y |= (x >> 03) & 0x0002;
        y |= (x >> 06) & 0x0004;
        y |= (x >> 09) & 0x0008;
        y |= (x >> 12) & 0x0010;
        y |= (x >> 15) & 0x0020;
        y |= (x >> 18) & 0x0040;
        y |= (x >> 21) & 0x0080;
        y |= (x >> 24) & 0x0100;
        y |= (x >> 27) & 0x0200;
        y |= (x >> 30) & 0x0400;
        y |= (x >> 33) & 0x0800;
        y |= (x >> 36) & 0x1000;
        y as u16
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
