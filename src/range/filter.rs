use super::archetype::Archetype;
use super::classify;
use super::table::Inclusion;
use super::table::profile;
use crate::RANGE_FLOOR;
use crate::cards::Board;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Rank;
use crate::error::Error;

const WHEEL_DRAW: u16 = 0b_1000000000111;

/// The villain combos an archetype plausibly holds in a given spot.
///
/// Never contains hero's or the board's cards. Never smaller than
/// [`RANGE_FLOOR`] of every live combo, unless the deck itself is exhausted.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    archetype: Archetype,
    combos: Vec<Hole>,
    floored: bool,
}

impl Range {
    /// Filters every live combo through the archetype's profile for the
    /// board's street, then applies the safety floor.
    pub fn new(archetype: Archetype, hero: &Hole, board: &Board) -> Result<Self, Error> {
        let deck = Deck::excluding(&[Hand::from(*hero), Hand::from(board)])?;
        let universe = deck.holes().collect::<Vec<Hole>>();
        let profile = profile(archetype, board.street());
        let public = Hand::from(board);
        let filtered = universe
            .iter()
            .filter(|hole| classify::strength(hole) >= profile.threshold)
            .filter(|hole| Self::includes(profile.inclusion, hole, &public))
            .copied()
            .collect::<Vec<Hole>>();
        let range = if (filtered.len() as f64) < RANGE_FLOOR * universe.len() as f64 {
            Self {
                archetype,
                combos: Self::strongest(universe),
                floored: true,
            }
        } else {
            Self {
                archetype,
                combos: filtered,
                floored: false,
            }
        };
        log::debug!(
            "{} range on {} ({}): {} combos{}",
            archetype,
            board.street(),
            board,
            range.len(),
            if range.floored { ", floored" } else { "" }
        );
        Ok(range)
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }
    pub fn combos(&self) -> &[Hole] {
        &self.combos
    }
    pub fn len(&self) -> usize {
        self.combos.len()
    }
    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }
    /// Whether the filter was too narrow and the strength floor took over.
    pub fn is_floored(&self) -> bool {
        self.floored
    }

    /// Top share of combos by preflop strength, ties in deck order.
    fn strongest(mut universe: Vec<Hole>) -> Vec<Hole> {
        let n = (RANGE_FLOOR * universe.len() as f64).ceil() as usize;
        universe.sort_by(|a, b| classify::strength(b).total_cmp(&classify::strength(a)));
        universe.truncate(n);
        universe
    }

    fn includes(inclusion: Inclusion, hole: &Hole, board: &Hand) -> bool {
        match inclusion {
            Inclusion::Everything | Inclusion::Threshold => true,
            Inclusion::Made => Self::made(hole, board),
            Inclusion::Drawing => Self::made(hole, board) || Self::drawing(hole, board),
            Inclusion::Overcards(min) => {
                Self::made(hole, board)
                    || Self::drawing(hole, board)
                    || Self::overcard(hole, board, min)
            }
        }
    }
    /// Pocket pair, or pairs the board.
    fn made(hole: &Hole, board: &Hand) -> bool {
        hole.is_pair() || u16::from(Hand::from(*hole)) & u16::from(*board) != 0
    }
    /// Four to a flush, four to an open-ended straight, or A-2-3-4.
    fn drawing(hole: &Hole, board: &Hand) -> bool {
        let cards = Hand::add(Hand::from(*hole), *board);
        let ranks = u16::from(cards);
        let mut window = ranks;
        window &= ranks << 1;
        window &= ranks << 2;
        window &= ranks << 3;
        cards.suited() >= 4 || window != 0 || ranks & WHEEL_DRAW == WHEEL_DRAW
    }
    /// Hole's top rank beats the board's and is at least `min`.
    fn overcard(hole: &Hole, board: &Hand, min: Rank) -> bool {
        let top = hole.hi().rank();
        top >= min && board.top().is_some_and(|board| top > board)
    }
}
