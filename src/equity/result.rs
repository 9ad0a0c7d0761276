use super::method::Method;
use crate::Percent;

/// Hero's showdown equity and how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EquityResult {
    equity: Percent,
    method: Method,
}

impl EquityResult {
    pub fn new(equity: Percent, method: Method) -> Self {
        debug_assert!((0.0..=100.0).contains(&equity), "equity {} out of range", equity);
        Self { equity, method }
    }
    /// Percentage in [0, 100], ties counted half.
    pub fn equity(&self) -> Percent {
        self.equity
    }
    pub fn method(&self) -> Method {
        self.method
    }
}

impl std::fmt::Display for EquityResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.2}% ({})", self.equity, self.method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::Archetype;

    #[test]
    fn json_uses_method_tag() {
        let result = EquityResult::new(76.0, Method::RangeSimulated(Archetype::Tight, 100));
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"equity":76.0,"method":"range_tight_mc:100"}"#);
        assert_eq!(serde_json::from_str::<EquityResult>(&json).unwrap(), result);
    }
}
