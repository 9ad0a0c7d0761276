use super::kicks::Kickers;
use super::oracle::Oracle;
use super::ranking::Ranking;
use super::strength::Strength;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Rank;

const WHEEL: u16 = 0b_1000000001111;

/// Bitwise 5-card evaluator, the default [`Oracle`].
///
/// Using the compact [`Hand`] representation, we search for the highest
/// [`Ranking`] with a handful of mask operations and popcounts. No lookup
/// tables, no allocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Oracle for Evaluator {
    type Strength = Strength;
    fn rank5(&self, cards: [Card; 5]) -> Strength {
        let hand = cards.into_iter().collect::<Hand>();
        debug_assert!(hand.size() == 5, "rank5 takes five distinct cards");
        Five(hand).strength()
    }
}

/// Five distinct cards under evaluation.
struct Five(Hand);

impl Five {
    fn strength(&self) -> Strength {
        let ranking = self.find_ranking();
        let kickers = Kickers::from(self.ranks() & !ranking.mask());
        debug_assert!(u16::from(kickers).count_ones() as usize == ranking.n_kickers());
        Strength::from((ranking, kickers))
    }

    fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or_else(|| Ranking::HighCard(Rank::from(self.ranks())))
    }

    fn find_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).map(Ranking::OnePair)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4, None).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).and_then(|hi| {
            self.find_rank_of_n_oak(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).and_then(|triple| {
            self.find_rank_of_n_oak(2, Some(triple))
                .map(|paired| Ranking::FullHouse(triple, paired))
        })
    }
    fn find_flush(&self) -> Option<Ranking> {
        match self.0.suited() {
            5 => Some(Ranking::Flush(Rank::from(self.ranks()))),
            _ => None,
        }
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight().map(Ranking::Straight)
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        match self.0.suited() {
            5 => self.find_rank_of_straight().map(Ranking::StraightFlush),
            _ => None,
        }
    }

    fn find_rank_of_straight(&self) -> Option<Rank> {
        let ranks = self.ranks();
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == ranks {
            Some(Rank::Five)
        } else {
            None
        }
    }
    /// Highest rank held at least `n` times, other than `skip`.
    fn find_rank_of_n_oak(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|rank| Some(*rank) != skip)
            .find(|rank| self.count(rank) >= n)
    }
    fn count(&self, rank: &Rank) -> usize {
        (u64::from(self.0) & (0xFu64 << (u8::from(*rank) * 4))).count_ones() as usize
    }
    fn ranks(&self) -> u16 {
        u16::from(self.0)
    }
}
