use crate::cards::Rank;

/// A poker hand's category, with the ranks that define it.
///
/// Variant order is category order, so the derived `Ord` is the standard
/// hand-category ordering. Remaining tie-breaks live in [`Kickers`].
///
/// [`Kickers`]: super::kicks::Kickers
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kickers
    ThreeOAK(Rank),        // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kickers
    StraightFlush(Rank),   // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) | Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::FourOAK(_) | Ranking::TwoPair(_, _) => 1,
            Ranking::Straight(_) | Ranking::FullHouse(_, _) | Ranking::StraightFlush(_) => 0,
        }
    }
    /// Rank bits that are not kickers.
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) | Ranking::FullHouse(hi, lo) => u16::from(hi) | u16::from(lo),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::ThreeOAK(hi)
            | Ranking::Flush(hi)
            | Ranking::FourOAK(hi) => u16::from(hi),
            Ranking::Straight(_) | Ranking::StraightFlush(_) => u16::MAX,
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::FullHouse(r1, r2) => write!(f, "FullHouse     {}{}", r1, r2),
            Ranking::TwoPair(r1, r2) => write!(f, "TwoPair       {}{}", r1, r2),
            Ranking::HighCard(r) => write!(f, "HighCard      {} ", r),
            Ranking::OnePair(r) => write!(f, "OnePair       {} ", r),
            Ranking::ThreeOAK(r) => write!(f, "ThreeOfAKind  {} ", r),
            Ranking::Straight(r) => write!(f, "Straight      {} ", r),
            Ranking::FourOAK(r) => write!(f, "FourOfAKind   {} ", r),
            Ranking::Flush(r) => write!(f, "Flush         {} ", r),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {} ", r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_order() {
        let ladder = [
            Ranking::HighCard(Rank::Ace),
            Ranking::OnePair(Rank::Two),
            Ranking::TwoPair(Rank::Three, Rank::Two),
            Ranking::ThreeOAK(Rank::Two),
            Ranking::Straight(Rank::Five),
            Ranking::Flush(Rank::Seven),
            Ranking::FullHouse(Rank::Two, Rank::Three),
            Ranking::FourOAK(Rank::Two),
            Ranking::StraightFlush(Rank::Five),
        ];
        assert!(ladder.windows(2).all(|w| w[0] < w[1]));
    }
}
