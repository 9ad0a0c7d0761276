use super::tally::Tally;
use crate::Percent;
use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::error::Error;
use crate::oracle::Oracle;
use crate::oracle::Showdown;
use rayon::prelude::*;

/// Enumerates every completion of the board and settles each one.
///
/// Only postflop boards qualify: the river is a single comparison, the turn
/// has 44 completions and the flop 990. Preflop would need C(48, 5) and is
/// refused with [`Error::InvalidBoardSize`].
pub fn exact<O: Oracle>(
    oracle: &O,
    hero: &Hole,
    villain: &Hole,
    board: &Board,
) -> Result<Tally, Error> {
    let deck = Deck::excluding(&[Hand::from(*hero), Hand::from(*villain), Hand::from(board)])?;
    let showdown = Showdown::new(oracle);
    Ok(runouts(board, &deck)?
        .iter()
        .map(|five| showdown.settle(hero, villain, five))
        .map(Tally::from)
        .sum())
}

/// Mean exact equity across a villain range, each combo weighted equally.
pub fn exact_range<O: Oracle>(
    oracle: &O,
    hero: &Hole,
    range: &[Hole],
    board: &Board,
) -> Result<Percent, Error> {
    if range.is_empty() {
        return Err(Error::EmptyRange);
    }
    let equities = range
        .par_iter()
        .map(|villain| exact(oracle, hero, villain, board))
        .map(|tally| tally.and_then(|t| t.percent().ok_or(Error::NoTrials)))
        .collect::<Result<Vec<Percent>, Error>>()?;
    Ok(equities.iter().sum::<Percent>() / equities.len() as Percent)
}

/// Every full five-card board extending `board` with cards from `deck`.
fn runouts(board: &Board, deck: &Deck) -> Result<Vec<[Card; 5]>, Error> {
    let known = board.cards();
    let live = deck.cards();
    match board.pending() {
        0 => Ok(vec![complete(known, &[])]),
        1 => Ok(live.iter().map(|c| complete(known, &[*c])).collect()),
        2 => Ok(deck
            .holes()
            .map(|hole| hole.cards())
            .map(|(a, b)| complete(known, &[a, b]))
            .collect()),
        _ => Err(Error::InvalidBoardSize(board.len())),
    }
}

/// Known board cards followed by freshly dealt ones, five in all.
pub(super) fn complete(known: &[Card], extra: &[Card]) -> [Card; 5] {
    debug_assert!(known.len() + extra.len() == 5);
    std::array::from_fn(|i| match i < known.len() {
        true => known[i],
        false => extra[i - known.len()],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::Evaluator;

    fn hole(s: &str) -> Hole {
        Hole::try_from(s).unwrap()
    }
    fn board(s: &str) -> Board {
        Board::try_from(s).unwrap()
    }

    #[test]
    fn river_is_one_comparison() {
        let tally = exact(&Evaluator, &hole("AsAh"), &hole("KsKh"), &board("2c7d9hTc3s")).unwrap();
        assert_eq!(tally.total(), 1);
        assert_eq!(tally.percent(), Some(100.0));
    }

    #[test]
    fn turn_enumerates_44() {
        let tally = exact(&Evaluator, &hole("AsAh"), &hole("KsKh"), &board("2s7s9hTc")).unwrap();
        assert_eq!(tally.total(), 44);
        assert_eq!(tally.percent(), Some(42.0 / 44.0 * 100.0));
    }

    #[test]
    fn flop_enumerates_990() {
        let tally = exact(&Evaluator, &hole("8s8h"), &hole("AsKc"), &board("2c7d9h")).unwrap();
        assert_eq!(tally.total(), 990);
        assert_eq!(tally.wins() * 2 + tally.ties(), 753 * 2);
    }

    #[test]
    fn refuses_preflop() {
        let result = exact(&Evaluator, &hole("AsAh"), &hole("KsKh"), &Board::empty());
        assert_eq!(result, Err(Error::InvalidBoardSize(0)));
    }

    #[test]
    fn refuses_shared_cards() {
        let result = exact(&Evaluator, &hole("AsAh"), &hole("AsKh"), &board("2c7d9h"));
        assert!(matches!(result, Err(Error::DuplicateCard(_))));
        let result = exact(&Evaluator, &hole("AsAh"), &hole("KsKh"), &board("2c7dKs"));
        assert!(matches!(result, Err(Error::DuplicateCard(_))));
    }

    #[test]
    fn range_of_one_matches_single() {
        let hero = hole("8s8h");
        let board = board("2c7d9h");
        let single = exact(&Evaluator, &hero, &hole("AsKc"), &board)
            .unwrap()
            .percent()
            .unwrap();
        let range = exact_range(&Evaluator, &hero, &[hole("AsKc")], &board).unwrap();
        assert_eq!(single, range);
    }

    #[test]
    fn empty_range_rejected() {
        let result = exact_range(&Evaluator, &hole("AsAh"), &[], &board("2c7d9h"));
        assert_eq!(result, Err(Error::EmptyRange));
    }
}
