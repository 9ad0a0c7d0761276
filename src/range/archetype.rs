/// Opponent type whose plausible holdings we approximate.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Archetype {
    Tight,
    Balanced,
    Loose,
    Random,
}

impl Archetype {
    pub const fn all() -> &'static [Self] {
        &[Self::Tight, Self::Balanced, Self::Loose, Self::Random]
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Tight => write!(f, "tight"),
            Self::Balanced => write!(f, "balanced"),
            Self::Loose => write!(f, "loose"),
            Self::Random => write!(f, "random"),
        }
    }
}

impl std::str::FromStr for Archetype {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tight" => Ok(Self::Tight),
            "balanced" => Ok(Self::Balanced),
            "loose" => Ok(Self::Loose),
            "random" => Ok(Self::Random),
            other => Err(format!("unknown opponent type: {}", other)),
        }
    }
}

impl serde::Serialize for Archetype {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
impl<'de> serde::Deserialize<'de> for Archetype {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        for archetype in Archetype::all() {
            assert_eq!(archetype.to_string().parse::<Archetype>(), Ok(*archetype));
        }
        assert!("maniac".parse::<Archetype>().is_err());
    }
}
