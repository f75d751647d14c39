//! Affinity persistence port.

use std::collections::BTreeSet;
use std::future::Future;

use crate::domain::{affinity::Affinity, id::ProductId};
use crate::error::Result;

/// Keyed collection of co-purchase counts, one ranked entry per product.
///
/// Implementations must make `increment` atomic with respect to concurrent
/// callers; the service layer does no locking of its own. Every operation
/// fails with [`StoreError::Unavailable`](crate::error::StoreError) when
/// the backing store cannot be reached, and none of them retry.
pub trait AffinityStore: Send + Sync {
    /// Add `amount` to the score of `other` in `product`'s entry, creating
    /// the entry or member if absent.
    fn increment(
        &self,
        product: ProductId,
        other: ProductId,
        amount: u64,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Up to `n` ids from `product`'s entry, best first.
    fn top_n(&self, product: ProductId, n: usize)
        -> impl Future<Output = Result<Vec<ProductId>>> + Send;

    /// Up to `n` ids ranked by their summed score across the entries of
    /// `products`, with every id in `exclude` removed.
    fn union_top_n(
        &self,
        products: &[ProductId],
        exclude: &BTreeSet<ProductId>,
        n: usize,
    ) -> impl Future<Output = Result<Vec<ProductId>>> + Send;

    /// Remove the whole entry of `product`.
    fn delete_entry(&self, product: ProductId) -> impl Future<Output = Result<()>> + Send;

    /// Current count of `other` under `product`, 0 when absent.
    fn score(
        &self,
        product: ProductId,
        other: ProductId,
    ) -> impl Future<Output = Result<u64>> + Send;

    /// The complete ranked entry of `product` with scores.
    fn entry(&self, product: ProductId) -> impl Future<Output = Result<Vec<Affinity>>> + Send;
}
