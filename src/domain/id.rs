//! Domain identifier types with proper encapsulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Product identifier issued by the catalog.
///
/// The recommender never mints these; it only references identities the
/// catalog already owns. Ordering is numeric, which is what the ranking
/// tie-break relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Create a new `ProductId`.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric identity.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::MalformedProductId {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_text() {
        let id: ProductId = "355299".parse().unwrap();
        assert_eq!(id, ProductId::new(355_299));
        assert_eq!(id.to_string(), "355299");
    }

    #[test]
    fn rejects_non_numeric_text() {
        let err = "abc".parse::<ProductId>().unwrap_err();
        assert!(matches!(err, DomainError::MalformedProductId { ref value } if value == "abc"));
    }

    #[test]
    fn rejects_negative_text() {
        assert!("-4".parse::<ProductId>().is_err());
    }

    #[test]
    fn rejects_padded_text() {
        let err = " 3".parse::<ProductId>().unwrap_err();
        assert!(matches!(err, DomainError::MalformedProductId { ref value } if value == " 3"));
    }

    #[test]
    fn orders_numerically() {
        assert!(ProductId::new(9) < ProductId::new(10));
    }
}
