use super::exact::exact;
use super::exact::exact_range;
use super::method::Method;
use super::montecarlo::Villain;
use super::montecarlo::simulate;
use super::query::Mode;
use super::query::Opponent;
use super::query::Query;
use super::result::EquityResult;
use super::seed;
use super::tally::Tally;
use crate::DEGENERATE_EQUITY;
use crate::Iterations;
use crate::Percent;
use crate::cards::Street;
use crate::error::Error;
use crate::oracle::Oracle;
use crate::range::Range;

/// Answers one query with no caching.
///
/// Enumerates when asked to (or left to decide) on a postflop board, and
/// samples otherwise. `iterations` and `salt` apply only when the query
/// does not bring its own budget or seed.
pub fn solve<O: Oracle>(
    oracle: &O,
    query: &Query,
    iterations: Iterations,
    salt: &str,
) -> Result<EquityResult, Error> {
    query.validate()?;
    let hero = query.hero();
    let board = query.board();
    let n = query.iterations().unwrap_or(iterations);
    let seed = query
        .seed()
        .unwrap_or_else(|| seed::derive(query.identifier(), salt));
    let enumerate = match (query.mode(), board.street()) {
        (Mode::Simulate, _) => false,
        (_, Street::Pref) => false,
        (Mode::Auto | Mode::Exact, _) => true,
    };
    match *query.opponent() {
        Opponent::Hand(villain) => match enumerate {
            true => {
                let equity = percent(exact(oracle, hero, &villain, board)?)?;
                Ok(EquityResult::new(equity, Method::Exact))
            }
            false => {
                let tally = simulate(oracle, hero, Villain::Fixed(villain), board, n, seed)?;
                Ok(EquityResult::new(percent(tally)?, Method::Simulated(n)))
            }
        },
        Opponent::Range(archetype) => {
            let range = Range::new(archetype, hero, board)?;
            if range.is_empty() {
                log::warn!("{} range is empty for {}, reporting even equity", archetype, query);
                return Ok(EquityResult::new(
                    DEGENERATE_EQUITY,
                    Method::RangeDegenerate(archetype),
                ));
            }
            match enumerate {
                true => {
                    let equity = exact_range(oracle, hero, range.combos(), board)?;
                    Ok(EquityResult::new(equity, Method::RangeExact(archetype)))
                }
                false => {
                    let villain = Villain::Range(range.combos());
                    let tally = simulate(oracle, hero, villain, board, n, seed)?;
                    let method = Method::RangeSimulated(archetype, n);
                    Ok(EquityResult::new(percent(tally)?, method))
                }
            }
        }
    }
}

fn percent(tally: Tally) -> Result<Percent, Error> {
    tally.percent().ok_or(Error::NoTrials)
}
