use super::oracle::Oracle;
use crate::cards::Card;
use crate::cards::Hole;
use std::cmp::Ordering;

/// Settles a heads-up showdown on a complete board through an [`Oracle`].
///
/// Each player's hand is the best 5 of their 7 cards, found by ranking all
/// 21 five-card subsets. The oracle only ever sees five cards at a time.
pub struct Showdown<'a, O: Oracle> {
    oracle: &'a O,
}

impl<'a, O: Oracle> Showdown<'a, O> {
    pub fn new(oracle: &'a O) -> Self {
        Self { oracle }
    }
    /// Hero's result against villain: Greater wins, Equal splits.
    pub fn settle(&self, hero: &Hole, villain: &Hole, board: &[Card; 5]) -> Ordering {
        self.best(hero, board).cmp(&self.best(villain, board))
    }
    /// Strongest 5-card hand from hole + board.
    pub fn best(&self, hole: &Hole, board: &[Card; 5]) -> O::Strength {
        let (a, b) = hole.cards();
        let seven = [a, b, board[0], board[1], board[2], board[3], board[4]];
        (0..7)
            .flat_map(|i| (i + 1..7).map(move |j| (i, j)))
            .map(|(i, j)| Self::without(&seven, i, j))
            .map(|five| self.oracle.rank5(five))
            .max()
            .expect("21 subsets of 7")
    }
    fn without(seven: &[Card; 7], i: usize, j: usize) -> [Card; 5] {
        let mut five = [seven[0]; 5];
        let mut n = 0;
        for (k, card) in seven.iter().enumerate() {
            if k != i && k != j {
                five[n] = *card;
                n += 1;
            }
        }
        five
    }
}
