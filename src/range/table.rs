use super::archetype::Archetype;
use crate::cards::Rank;
use crate::cards::Street;

/// Which combos an archetype still holds once board cards are out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inclusion {
    /// Keep every combo regardless of strength or board.
    Everything,
    /// Preflop: the strength threshold alone decides.
    Threshold,
    /// Pair or better: pocket pair, or a rank shared with the board.
    Made,
    /// Made hands plus flush draws and open-ended straight draws.
    Drawing,
    /// Made and drawing hands, plus an overcard to the board of at least this rank.
    Overcards(Rank),
}

/// One cell of the archetype × street table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    /// Minimum preflop strength a combo needs to still be in the range.
    pub threshold: f64,
    pub inclusion: Inclusion,
}

impl Profile {
    const fn new(threshold: f64, inclusion: Inclusion) -> Self {
        Self { threshold, inclusion }
    }
}

/// Range profile for every (archetype, street).
///
/// Exhaustive by construction: adding an archetype or a street fails to
/// compile until its row is filled in.
pub const fn profile(archetype: Archetype, street: Street) -> Profile {
    use Archetype::*;
    use Inclusion::*;
    use Street::*;
    match (archetype, street) {
        (Tight, Pref) => Profile::new(55.0, Threshold),
        (Tight, Flop) => Profile::new(45.0, Drawing),
        (Tight, Turn) => Profile::new(45.0, Drawing),
        (Tight, Rive) => Profile::new(45.0, Made),
        (Balanced, Pref) => Profile::new(40.0, Threshold),
        (Balanced, Flop) => Profile::new(35.0, Overcards(Rank::Jack)),
        (Balanced, Turn) => Profile::new(35.0, Overcards(Rank::Jack)),
        (Balanced, Rive) => Profile::new(35.0, Made),
        (Loose, Pref) => Profile::new(25.0, Threshold),
        (Loose, Flop) => Profile::new(20.0, Overcards(Rank::Two)),
        (Loose, Turn) => Profile::new(20.0, Overcards(Rank::Two)),
        (Loose, Rive) => Profile::new(20.0, Made),
        (Random, Pref) => Profile::new(0.0, Everything),
        (Random, Flop) => Profile::new(0.0, Everything),
        (Random, Turn) => Profile::new(0.0, Everything),
        (Random, Rive) => Profile::new(0.0, Everything),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_keeps_everything() {
        for street in Street::all() {
            let profile = profile(Archetype::Random, *street);
            assert_eq!(profile.threshold, 0.0);
            assert_eq!(profile.inclusion, Inclusion::Everything);
        }
    }

    #[test]
    fn tighter_types_demand_more() {
        for street in Street::all() {
            let tight = profile(Archetype::Tight, *street).threshold;
            let balanced = profile(Archetype::Balanced, *street).threshold;
            let loose = profile(Archetype::Loose, *street).threshold;
            assert!(tight > balanced && balanced > loose);
        }
    }

    #[test]
    fn river_has_no_draws() {
        for archetype in Archetype::all() {
            let inclusion = profile(*archetype, Street::Rive).inclusion;
            assert!(matches!(inclusion, Inclusion::Made | Inclusion::Everything));
        }
    }
}
