//! Key naming for affinity entries and union scratch sets.

use std::collections::BTreeSet;

use crate::domain::id::ProductId;

/// Key of the sorted set holding `product`'s co-purchase counts.
#[must_use]
pub fn entry_key(product: ProductId) -> String {
    format!("product:{product}:purchased_with")
}

/// Key of the scratch set used to union the entries of `products`.
///
/// Derived from the distinct ids in ascending order, so the same query
/// always lands on the same slot no matter how its inputs were ordered.
#[must_use]
pub fn scratch_key(products: &[ProductId]) -> String {
    let distinct: BTreeSet<ProductId> = products.iter().copied().collect();
    let joined = distinct
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("_");
    format!("tmp:purchased_with:{joined}")
}
