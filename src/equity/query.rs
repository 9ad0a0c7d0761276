use crate::Iterations;
use crate::Seed;
use crate::cards::Board;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::error::Error;
use crate::range::Archetype;

/// Seed material used when a query names no question.
pub const DEFAULT_IDENTIFIER: &str = "default";

/// Who hero faces: a known hand or an archetype's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opponent {
    Hand(Hole),
    Range(Archetype),
}

impl std::fmt::Display for Opponent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Hand(hole) => write!(f, "{}", hole),
            Self::Range(archetype) => write!(f, "{}", archetype),
        }
    }
}

/// An archetype name, else two cards.
impl TryFrom<&str> for Opponent {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.parse::<Archetype>() {
            Ok(archetype) => Ok(Self::Range(archetype)),
            Err(_) => Hole::try_from(s).map(Self::Hand),
        }
    }
}

/// Which solver the caller wants.
///
/// `Auto` enumerates postflop and samples preflop. `Exact` is a request,
/// not a guarantee: preflop it still samples. `Simulate` samples on every
/// street.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Auto,
    Exact,
    Simulate,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Exact => write!(f, "exact"),
            Self::Simulate => write!(f, "simulate"),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "exact" => Ok(Self::Exact),
            "simulate" | "mc" => Ok(Self::Simulate),
            other => Err(format!("unknown mode: {}", other)),
        }
    }
}

/// One equity question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    hero: Hole,
    opponent: Opponent,
    board: Board,
    mode: Mode,
    iterations: Option<Iterations>,
    identifier: String,
    seed: Option<Seed>,
}

impl Query {
    pub fn new(hero: Hole, opponent: Opponent, board: Board) -> Self {
        Self {
            hero,
            opponent,
            board,
            mode: Mode::default(),
            iterations: None,
            identifier: DEFAULT_IDENTIFIER.to_string(),
            seed: None,
        }
    }
    /// Builds a query from text: hero cards, opponent cards or archetype
    /// name, and zero, three, four or five board cards.
    pub fn parse(hero: &str, opponent: &str, board: &str) -> Result<Self, Error> {
        let query = Self::new(
            Hole::try_from(hero)?,
            Opponent::try_from(opponent)?,
            Board::try_from(board)?,
        );
        query.validate()?;
        Ok(query)
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
    pub fn with_iterations(mut self, iterations: Iterations) -> Self {
        self.iterations = Some(iterations);
        self
    }
    /// Question id the sampler seed is derived from.
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }
    /// Bypasses seed derivation entirely.
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = Some(seed);
        self
    }

    /// No card may be held by more than one of hero, villain and board.
    pub fn validate(&self) -> Result<(), Error> {
        let mut parts = vec![Hand::from(self.hero), Hand::from(&self.board)];
        if let Opponent::Hand(villain) = self.opponent {
            parts.push(Hand::from(villain));
        }
        Deck::excluding(&parts).map(|_| ())
    }

    pub fn hero(&self) -> &Hole {
        &self.hero
    }
    pub fn opponent(&self) -> &Opponent {
        &self.opponent
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn iterations(&self) -> Option<Iterations> {
        self.iterations
    }
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
    pub fn seed(&self) -> Option<Seed> {
        self.seed
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} vs {} on [{}] ({})", self.hero, self.opponent, self.board, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_parses_both_forms() {
        assert_eq!(Opponent::try_from("tight"), Ok(Opponent::Range(Archetype::Tight)));
        assert_eq!(
            Opponent::try_from("KsKd"),
            Ok(Opponent::Hand(Hole::try_from("KdKs").unwrap()))
        );
        assert!(Opponent::try_from("Kz").is_err());
    }

    #[test]
    fn shared_cards_rejected() {
        assert!(matches!(
            Query::parse("AsAh", "AsKd", ""),
            Err(Error::DuplicateCard(_))
        ));
        assert!(matches!(
            Query::parse("AsAh", "KsKd", "2c7dAh"),
            Err(Error::DuplicateCard(_))
        ));
        assert!(matches!(
            Query::parse("AsAh", "tight", "2cAs7d"),
            Err(Error::DuplicateCard(_))
        ));
    }

    #[test]
    fn bad_inputs_rejected() {
        assert!(matches!(Query::parse("AsXx", "KsKd", ""), Err(Error::InvalidCard(_))));
        assert!(matches!(Query::parse("As", "KsKd", ""), Err(Error::InvalidHole(_))));
        assert_eq!(Query::parse("AsAh", "KsKd", "2c7d"), Err(Error::InvalidBoardSize(2)));
    }

    #[test]
    fn builder_defaults() {
        let query = Query::parse("AsAh", "KsKd", "").unwrap();
        assert_eq!(query.mode(), Mode::Auto);
        assert_eq!(query.iterations(), None);
        assert_eq!(query.identifier(), DEFAULT_IDENTIFIER);
        let query = query.with_mode(Mode::Simulate).with_iterations(10).with_identifier("q7").with_seed(1);
        assert_eq!(query.mode(), Mode::Simulate);
        assert_eq!(query.iterations(), Some(10));
        assert_eq!(query.identifier(), "q7");
        assert_eq!(query.seed(), Some(1));
    }
}
