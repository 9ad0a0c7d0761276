use crate::Percent;
use std::cmp::Ordering;

/// Win/tie counts over a set of showdowns.
///
/// Kept as integers all the way through so that summing partial tallies in
/// any order gives the same equity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    wins: u64,
    ties: u64,
    total: u64,
}

impl Tally {
    pub fn wins(&self) -> u64 {
        self.wins
    }
    pub fn ties(&self) -> u64 {
        self.ties
    }
    pub fn total(&self) -> u64 {
        self.total
    }
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
    /// Hero's pot share, ties counting half. `None` before any showdown.
    pub fn percent(&self) -> Option<Percent> {
        match self.total {
            0 => None,
            n => Some((self.wins as f64 + 0.5 * self.ties as f64) / n as f64 * 100.0),
        }
    }
}

impl From<Ordering> for Tally {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Self { wins: 1, ties: 0, total: 1 },
            Ordering::Equal => Self { wins: 0, ties: 1, total: 1 },
            Ordering::Less => Self { wins: 0, ties: 0, total: 1 },
        }
    }
}

impl std::ops::Add for Tally {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
            total: self.total + rhs.total,
        }
    }
}
impl std::ops::AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl std::iter::Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |a, b| a + b)
    }
}
