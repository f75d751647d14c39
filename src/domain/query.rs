//! Suggestion query inputs.

use std::collections::BTreeSet;

use super::error::DomainError;
use super::id::ProductId;

/// Suggestion limit used when the caller does not pick one.
pub const DEFAULT_MAX_RESULTS: usize = 6;

/// Validated suggestion limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxResults(usize);

impl MaxResults {
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self(limit)
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for MaxResults {
    fn default() -> Self {
        Self(DEFAULT_MAX_RESULTS)
    }
}

impl TryFrom<i64> for MaxResults {
    type Error = DomainError;

    /// Negative limits are rejected rather than clamped to zero.
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::NegativeMaxResults { value })
    }
}

/// How a suggestion request is answered, decided by its distinct inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryShape {
    /// No inputs: answered without touching the store.
    Empty,
    /// One input: read that product's ranked entry.
    Single(ProductId),
    /// Several inputs: sum their entries and exclude the inputs themselves.
    Many(Vec<ProductId>),
}

impl QueryShape {
    /// Classify `products`, dropping repeated ids but keeping first-seen order.
    #[must_use]
    pub fn of(products: &[ProductId]) -> Self {
        let mut seen = BTreeSet::new();
        let mut distinct: Vec<ProductId> = products
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect();

        match distinct.len() {
            0 => Self::Empty,
            1 => Self::Single(distinct.remove(0)),
            _ => Self::Many(distinct),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> Vec<ProductId> {
        raw.iter().copied().map(ProductId::new).collect()
    }

    #[test]
    fn negative_limit_is_invalid() {
        assert_eq!(
            MaxResults::try_from(-3),
            Err(DomainError::NegativeMaxResults { value: -3 })
        );
    }

    #[test]
    fn zero_limit_is_valid() {
        assert_eq!(MaxResults::try_from(0).unwrap().get(), 0);
    }

    #[test]
    fn default_limit_is_six() {
        assert_eq!(MaxResults::default().get(), 6);
    }

    #[test]
    fn shape_follows_distinct_count() {
        assert_eq!(QueryShape::of(&[]), QueryShape::Empty);
        assert_eq!(
            QueryShape::of(&ids(&[4, 4])),
            QueryShape::Single(ProductId::new(4))
        );
        assert_eq!(
            QueryShape::of(&ids(&[5, 2, 5, 9])),
            QueryShape::Many(ids(&[5, 2, 9]))
        );
    }
}
