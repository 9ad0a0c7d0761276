use crate::cards::Hole;

/// A starting hand's shorthand label and preflop strength score.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    label: String,
    strength: f64,
}

impl Class {
    /// `AA`, `AKs`, `T9o`.
    pub fn label(&self) -> &str {
        &self.label
    }
    /// Heuristic preflop strength in [0, 100].
    pub fn strength(&self) -> f64 {
        self.strength
    }
}

impl From<&Hole> for Class {
    fn from(hole: &Hole) -> Self {
        Self {
            label: label(hole),
            strength: strength(hole),
        }
    }
}

/// Pocket pairs scale 4 points per rank down from aces at 100. Everything
/// else scores high card, kicker, suitedness and connectivity.
pub fn strength(hole: &Hole) -> f64 {
    let hi = hole.hi().rank().value() as f64;
    let lo = hole.lo().rank().value() as f64;
    if hole.is_pair() {
        return 100.0 - 4.0 * (14.0 - hi);
    }
    let suited = if hole.is_suited() { 8.0 } else { 0.0 };
    let connected = match hole.hi().rank().value() - hole.lo().rank().value() {
        1 => 5.0,
        2 => 3.0,
        3 => 1.0,
        _ => 0.0,
    };
    (3.0 * hi + 1.5 * lo + suited + connected).clamp(0.0, 100.0)
}

fn label(hole: &Hole) -> String {
    let hi = hole.hi().rank();
    let lo = hole.lo().rank();
    match (hole.is_pair(), hole.is_suited()) {
        (true, _) => format!("{}{}", hi, lo),
        (false, true) => format!("{}{}s", hi, lo),
        (false, false) => format!("{}{}o", hi, lo),
    }
}
