use std::fmt::{Display, Formatter};

/// Uppercased ticker symbol.
///
/// Classification and template substitution both operate on the uppercased
/// form; no normalization beyond uppercasing is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(input: &str) -> Self {
        Self(input.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_input() {
        assert_eq!(Symbol::new("aapl").as_str(), "AAPL");
        assert_eq!(Symbol::new("btc").as_str(), "BTC");
    }

    #[test]
    fn leaves_uppercase_untouched() {
        assert_eq!(Symbol::new("MSFT").as_str(), "MSFT");
    }
}
