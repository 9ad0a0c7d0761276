use super::exact::complete;
use super::tally::Tally;
use crate::Iterations;
use crate::SAMPLING_CHUNK;
use crate::Seed;
use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::error::Error;
use crate::oracle::Oracle;
use crate::oracle::Showdown;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

/// Who hero is up against in a simulation.
#[derive(Debug, Clone, Copy)]
pub enum Villain<'a> {
    /// A known hand, held fixed across trials.
    Fixed(Hole),
    /// A fresh combo drawn uniformly from the range every trial.
    Range(&'a [Hole]),
}

/// Seeded Monte Carlo estimate of hero's showdown equity.
///
/// Trials are split into chunks of [`SAMPLING_CHUNK`]; chunk `k` draws from
/// stream `k` of a ChaCha8 generator keyed by `seed`. Tallies are integers
/// and chunk boundaries never move, so the result is a pure function of
/// `(seed, iterations, inputs)` no matter how rayon schedules the work.
///
/// A trial whose villain collides with hero or the board, or whose deck
/// can't complete the board, is skipped and not counted.
pub fn simulate<O: Oracle>(
    oracle: &O,
    hero: &Hole,
    villain: Villain,
    board: &Board,
    iterations: Iterations,
    seed: Seed,
) -> Result<Tally, Error> {
    if iterations == 0 {
        return Err(Error::NoTrials);
    }
    let base = match villain {
        Villain::Fixed(villain) => {
            Deck::excluding(&[Hand::from(*hero), Hand::from(villain), Hand::from(board)])?
        }
        Villain::Range(combos) if combos.is_empty() => return Err(Error::EmptyRange),
        Villain::Range(_) => Deck::excluding(&[Hand::from(*hero), Hand::from(board)])?,
    };
    let dead = Hand::add(Hand::from(*hero), Hand::from(board));
    let sampler = Sampler {
        showdown: Showdown::new(oracle),
        hero,
        villain,
        board,
        dead,
        live: base.cards(),
    };
    let chunks = iterations.div_ceil(SAMPLING_CHUNK);
    let tally = (0..chunks)
        .into_par_iter()
        .map(|k| {
            let n = SAMPLING_CHUNK.min(iterations - k * SAMPLING_CHUNK);
            sampler.chunk(seed, k as u64, n)
        })
        .reduce(Tally::default, |a, b| a + b);
    log::trace!("{} trials run of {} requested", tally.total(), iterations);
    match tally.is_empty() {
        true => Err(Error::NoTrials),
        false => Ok(tally),
    }
}

struct Sampler<'a, O: Oracle> {
    showdown: Showdown<'a, O>,
    hero: &'a Hole,
    villain: Villain<'a>,
    board: &'a Board,
    dead: Hand,
    live: Vec<Card>,
}

impl<'a, O: Oracle> Sampler<'a, O> {
    fn chunk(&self, seed: Seed, stream: u64, trials: usize) -> Tally {
        let ref mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(stream);
        let mut deck = Vec::with_capacity(self.live.len());
        (0..trials)
            .filter_map(|_| self.trial(rng, &mut deck))
            .map(Tally::from)
            .sum()
    }

    fn trial(&self, rng: &mut ChaCha8Rng, deck: &mut Vec<Card>) -> Option<std::cmp::Ordering> {
        let villain = match self.villain {
            Villain::Fixed(hole) => hole,
            Villain::Range(combos) => combos[rng.random_range(0..combos.len() as u32) as usize],
        };
        let blocked = Hand::from(villain);
        if blocked.intersection(&self.dead).size() > 0 {
            return None;
        }
        let need = self.board.pending();
        deck.clear();
        deck.extend(self.live.iter().filter(|c| !blocked.contains(c)));
        if deck.len() < need {
            return None;
        }
        for i in 0..need {
            let j = rng.random_range(i as u32..deck.len() as u32) as usize;
            deck.swap(i, j);
        }
        let five = complete(self.board.cards(), &deck[..need]);
        Some(self.showdown.settle(self.hero, &villain, &five))
    }
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
    fn counts_every_trial() {
        let villain = Villain::Fixed(hole("KsKd"));
        let tally = simulate(&Evaluator, &hole("AsAh"), villain, &Board::empty(), 10_000, 1).unwrap();
        assert_eq!(tally.total(), 10_000);
    }

    #[test]
    fn same_seed_same_answer() {
        let villain = Villain::Fixed(hole("KsKd"));
        let a = simulate(&Evaluator, &hole("AsAh"), villain, &Board::empty(), 9_000, 42).unwrap();
        let b = simulate(&Evaluator, &hole("AsAh"), villain, &Board::empty(), 9_000, 42).unwrap();
        let c = simulate(&Evaluator, &hole("AsAh"), villain, &Board::empty(), 9_000, 43).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn river_needs_no_sampling() {
        let villain = Villain::Fixed(hole("KsKh"));
        let tally = simulate(&Evaluator, &hole("AsAh"), villain, &board("2c7d9hTc3s"), 100, 7).unwrap();
        assert_eq!(tally.percent(), Some(100.0));
    }

    #[test]
    fn range_draws_vary() {
        let range = [hole("KsKh"), hole("2c3d")];
        let villain = Villain::Range(&range);
        let tally = simulate(&Evaluator, &hole("AsAh"), villain, &Board::empty(), 5_000, 3).unwrap();
        let equity = tally.percent().unwrap();
        assert!(equity > 80.0 && equity < 90.0);
    }

    #[test]
    fn colliding_combos_are_skipped() {
        let range = [hole("AsKh"), hole("KsKh")];
        let villain = Villain::Range(&range);
        let tally = simulate(&Evaluator, &hole("AsAh"), villain, &Board::empty(), 2_000, 5).unwrap();
        assert!(tally.total() < 2_000);
        assert!(tally.total() > 0);
    }

    #[test]
    fn rejections() {
        let hero = hole("AsAh");
        let fixed = Villain::Fixed(hole("KsKh"));
        assert_eq!(
            simulate(&Evaluator, &hero, fixed, &Board::empty(), 0, 1),
            Err(Error::NoTrials)
        );
        assert_eq!(
            simulate(&Evaluator, &hero, Villain::Range(&[]), &Board::empty(), 10, 1),
            Err(Error::EmptyRange)
        );
        let blocked = [hole("AsKd")];
        assert_eq!(
            simulate(&Evaluator, &hero, Villain::Range(&blocked), &Board::empty(), 10, 1),
            Err(Error::NoTrials)
        );
    }
}
