//! Affinity scores and the ranking order applied to them.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// Accumulated co-purchase count of `product` with some other product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affinity {
    pub product_id: ProductId,
    pub score: u64,
}

impl Affinity {
    #[must_use]
    pub const fn new(product_id: ProductId, score: u64) -> Self {
        Self { product_id, score }
    }
}

/// Ranking order: descending score, then ascending product id.
///
/// The id tie-break makes results identical across store backends, which
/// do not agree on how they order equal scores.
#[must_use]
pub fn ranking_order(a: &Affinity, b: &Affinity) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.product_id.cmp(&b.product_id))
}

/// Sort, drop excluded ids, and keep the first `limit` entries.
#[must_use]
pub fn rank(
    mut affinities: Vec<Affinity>,
    exclude: &BTreeSet<ProductId>,
    limit: usize,
) -> Vec<Affinity> {
    affinities.retain(|a| !exclude.contains(&a.product_id));
    affinities.sort_by(ranking_order);
    affinities.truncate(limit);
    affinities
}
