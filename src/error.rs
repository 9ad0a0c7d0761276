use crate::cards::Card;

/// Input and invariant violations surfaced by the engine.
///
/// None of these are retryable: the same input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A token that is not one of the 52 cards.
    InvalidCard(String),
    /// Hole cards that are not exactly two distinct cards.
    InvalidHole(String),
    /// The same card was dealt to more than one of hero, villain, board.
    DuplicateCard(Card),
    /// Board length outside {0, 3, 4, 5}, or a runout the exact solver refuses.
    InvalidBoardSize(usize),
    /// Monte Carlo asked to sample villain from an empty range.
    EmptyRange,
    /// Monte Carlo finished without a single completed trial.
    NoTrials,
    /// A blocking worker died before handing back its result.
    Worker(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCard(s) => write!(f, "invalid card: {:?}", s),
            Self::InvalidHole(s) => write!(f, "invalid hole cards: {}", s),
            Self::DuplicateCard(c) => write!(f, "duplicate card: {}", c),
            Self::InvalidBoardSize(n) => write!(f, "invalid board size: {}", n),
            Self::EmptyRange => write!(f, "cannot sample from an empty range"),
            Self::NoTrials => write!(f, "no monte carlo trials completed"),
            Self::Worker(s) => write!(f, "worker failed: {}", s),
        }
    }
}

impl std::error::Error for Error {}
