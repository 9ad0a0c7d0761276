use super::kicks::Kickers;
use super::ranking::Ranking;

/// A 5-card hand's strength.
///
/// Field order matters: the derived `Ord` compares category first and only
/// then falls through to kickers. Equal strengths split the pot.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{}", self.value, self.kicks)
    }
}
