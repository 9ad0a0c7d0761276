use crate::Iterations;
use crate::range::Archetype;

/// How an equity figure was produced.
///
/// Rendered as a compact tag: `exact`, `mc:<n>`, `range_<type>_exact`,
/// `range_<type>_mc:<n>`, or `range_<type>_degenerate` when no villain
/// combo survived and the neutral fallback was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Exact,
    Simulated(Iterations),
    RangeExact(Archetype),
    RangeSimulated(Archetype, Iterations),
    RangeDegenerate(Archetype),
}

impl Method {
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact | Self::RangeExact(_))
    }
    pub fn archetype(&self) -> Option<Archetype> {
        match self {
            Self::Exact | Self::Simulated(_) => None,
            Self::RangeExact(a) | Self::RangeSimulated(a, _) | Self::RangeDegenerate(a) => Some(*a),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Simulated(n) => write!(f, "mc:{}", n),
            Self::RangeExact(a) => write!(f, "range_{}_exact", a),
            Self::RangeSimulated(a, n) => write!(f, "range_{}_mc:{}", a, n),
            Self::RangeDegenerate(a) => write!(f, "range_{}_degenerate", a),
        }
    }
}

impl std::str::FromStr for Method {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let iterations = |n: &str| {
            n.parse::<Iterations>()
                .map_err(|e| format!("bad iteration count in {:?}: {}", s, e))
        };
        if s == "exact" {
            return Ok(Self::Exact);
        }
        if let Some(n) = s.strip_prefix("mc:") {
            return Ok(Self::Simulated(iterations(n)?));
        }
        let rest = s
            .strip_prefix("range_")
            .ok_or_else(|| format!("unknown method: {}", s))?;
        let (archetype, solver) = rest
            .split_once('_')
            .ok_or_else(|| format!("unknown method: {}", s))?;
        let archetype = archetype.parse::<Archetype>()?;
        match solver {
            "exact" => Ok(Self::RangeExact(archetype)),
            "degenerate" => Ok(Self::RangeDegenerate(archetype)),
            _ => match solver.strip_prefix("mc:") {
                Some(n) => Ok(Self::RangeSimulated(archetype, iterations(n)?)),
                None => Err(format!("unknown method: {}", s)),
            },
        }
    }
}

impl serde::Serialize for Method {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
impl<'de> serde::Deserialize<'de> for Method {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}
