use crate::error::Error;

/// Betting round, identified by how many board cards are showing.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    /// Board cards visible on this street.
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
    /// Board cards still to come before showdown.
    pub const fn n_pending(&self) -> usize {
        5 - self.n_observed()
    }
    /// Short tag used in cache keys and logs.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Pref => "pre",
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::Rive => "river",
        }
    }
}

impl TryFrom<usize> for Street {
    type Error = Error;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Pref),
            3 => Ok(Self::Flop),
            4 => Ok(Self::Turn),
            5 => Ok(Self::Rive),
            _ => Err(Error::InvalidBoardSize(n)),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_sizes() {
        for street in Street::all() {
            assert_eq!(Street::try_from(street.n_observed()), Ok(*street));
        }
        assert_eq!(Street::try_from(1), Err(Error::InvalidBoardSize(1)));
        assert_eq!(Street::try_from(6), Err(Error::InvalidBoardSize(6)));
    }
}
