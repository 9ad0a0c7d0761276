use crate::cards::Rank;

/// A hand's kicker ranks as a 13-bit mask.
///
/// Only ever compared between hands of the same [`Ranking`], which always
/// carry the same number of kickers. For equal-size sets of distinct ranks,
/// integer order on the mask is lexicographic order from the top rank down.
///
/// [`Ranking`]: super::ranking::Ranking
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

impl Kickers {
    pub fn none() -> Self {
        Self(0)
    }
}

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n)
    }
}

/// Vec<Rank> isomorphism
///
/// [2c, Ts, Jc, Js, Jd, Jh]
/// xxx 0001100000001
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        Rank::all()
            .into_iter()
            .filter(|r| k.0 & u16::from(*r) != 0)
            .collect()
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self).into_iter().rev() {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicographic_from_top() {
        let ak = Kickers::from(u16::from(Rank::Ace) | u16::from(Rank::King));
        let aq = Kickers::from(u16::from(Rank::Ace) | u16::from(Rank::Queen));
        let kq = Kickers::from(u16::from(Rank::King) | u16::from(Rank::Queen));
        assert!(ak > aq);
        assert!(aq > kq);
        assert_eq!(ak.to_string(), "AK");
    }
}
