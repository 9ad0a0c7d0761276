use crate::cards::Card;
use crate::equity::Opponent;
use crate::equity::Query;
use sha2::Digest;
use sha2::Sha256;

/// Stable fingerprint of everything that determines a query's answer.
///
/// SHA-256 over a small JSON document of hero, opponent, sorted board and
/// solver mode. Deal order of the board and of either hole never changes
/// the key; suits always do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey([u8; 32]);

#[derive(serde::Serialize)]
struct Document<'a> {
    hero: String,
    opponent: String,
    board: &'a [Card],
    mode: String,
}

impl From<&Query> for CanonicalKey {
    fn from(query: &Query) -> Self {
        let board = query.board().sorted();
        let opponent = match query.opponent() {
            Opponent::Hand(hole) => hole.to_string(),
            Opponent::Range(archetype) => format!("range:{}", archetype),
        };
        let document = Document {
            hero: query.hero().to_string(),
            opponent,
            board: &board,
            mode: query.mode().to_string(),
        };
        let json = serde_json::to_vec(&document).unwrap_or_default();
        Self(Sha256::digest(&json).into())
    }
}

impl std::fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.iter().try_for_each(|byte| write!(f, "{:02x}", byte))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equity::Mode;

    fn key(hero: &str, opponent: &str, board: &str) -> CanonicalKey {
        CanonicalKey::from(&Query::parse(hero, opponent, board).unwrap())
    }

    #[test]
    fn board_order_irrelevant() {
        assert_eq!(key("AsAh", "KsKd", "2c7d9h"), key("AsAh", "KsKd", "9h2c7d"));
        assert_eq!(key("AsAh", "KsKd", "2c7d9hTc3s"), key("AsAh", "KsKd", "3sTc9h7d2c"));
    }

    #[test]
    fn hole_order_irrelevant() {
        assert_eq!(key("AsAh", "KsKd", ""), key("AhAs", "KdKs", ""));
    }

    #[test]
    fn suits_matter() {
        assert_ne!(key("AsAh", "KsKd", "2c7d9h"), key("AsAh", "KsKd", "2h7d9c"));
    }

    #[test]
    fn roles_matter() {
        assert_ne!(key("AsAh", "KsKd", ""), key("KsKd", "AsAh", ""));
        assert_ne!(key("AsAh", "tight", ""), key("AsAh", "loose", ""));
    }

    #[test]
    fn mode_matters() {
        let query = Query::parse("AsAh", "KsKd", "2c7d9h").unwrap();
        let auto = CanonicalKey::from(&query);
        let forced = CanonicalKey::from(&query.with_mode(Mode::Simulate));
        assert_ne!(auto, forced);
    }

    #[test]
    fn hex_display() {
        let key = key("AsAh", "KsKd", "");
        assert_eq!(key.to_string().len(), 64);
    }
}
