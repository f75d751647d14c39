//! [`AffinityStore`] over any [`SortedSetClient`].
//!
//! One sorted set per product, keyed `product:<id>:purchased_with`, members
//! are the other product ids and scores are co-purchase counts. Multi-product
//! queries materialize a union into a scratch set, read it, and delete it.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use super::keys::{entry_key, scratch_key};
use crate::domain::affinity::{rank, Affinity};
use crate::domain::id::ProductId;
use crate::error::{Result, StoreError};
use crate::port::outbound::sorted_set::SortedSetClient;
use crate::port::outbound::store::AffinityStore;

/// Affinity store backed by a sorted-set service.
#[derive(Debug, Clone)]
pub struct SortedSetAffinityStore<C> {
    client: C,
}

impl<C: SortedSetClient> SortedSetAffinityStore<C> {
    /// Wrap a connected client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// The underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Read a whole set and parse it into affinities, native order kept.
    async fn read_set(&self, key: &str) -> Result<Vec<Affinity>> {
        let raw = self.client.zrevrange_withscores(key).await?;
        raw.into_iter()
            .map(|(member, score)| parse_affinity(key, &member, score))
            .collect()
    }
}

impl<C: SortedSetClient + Clone + 'static> SortedSetAffinityStore<C> {
    async fn read_union(
        &self,
        scratch: &Scratch<'_, C>,
        products: &[ProductId],
        exclude: &BTreeSet<ProductId>,
    ) -> Result<Vec<Affinity>> {
        let keys: Vec<String> = products.iter().copied().map(entry_key).collect();
        let size = self.client.zunionstore(scratch.key(), &keys).await?;

        if size > 0 && !exclude.is_empty() {
            let members: Vec<String> = exclude.iter().map(ToString::to_string).collect();
            self.client.zrem(scratch.key(), &members).await?;
        }

        self.read_set(scratch.key()).await
    }
}

impl<C: SortedSetClient + Clone + 'static> AffinityStore for SortedSetAffinityStore<C> {
    async fn increment(&self, product: ProductId, other: ProductId, amount: u64) -> Result<()> {
        let key = entry_key(product);
        self.client
            .zincrby(&key, &other.to_string(), amount as f64)
            .await?;
        Ok(())
    }

    async fn top_n(&self, product: ProductId, n: usize) -> Result<Vec<ProductId>> {
        let entry = self.read_set(&entry_key(product)).await?;
        let exclude: BTreeSet<ProductId> = [product].into_iter().collect();
        Ok(ids(rank(entry, &exclude, n)))
    }

    async fn union_top_n(
        &self,
        products: &[ProductId],
        exclude: &BTreeSet<ProductId>,
        n: usize,
    ) -> Result<Vec<ProductId>> {
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let scratch = Scratch::acquire(&self.client, products);
        debug!(key = scratch.key(), inputs = products.len(), "Computing union");

        let outcome = self.read_union(&scratch, products, exclude).await;
        let merged = scratch.release(outcome).await?;

        Ok(ids(rank(merged, exclude, n)))
    }

    async fn delete_entry(&self, product: ProductId) -> Result<()> {
        self.client.del(&entry_key(product)).await?;
        Ok(())
    }

    async fn score(&self, product: ProductId, other: ProductId) -> Result<u64> {
        let key = entry_key(product);
        match self.client.zscore(&key, &other.to_string()).await? {
            Some(score) => Ok(parse_affinity(&key, &other.to_string(), score)?.score),
            None => Ok(0),
        }
    }

    async fn entry(&self, product: ProductId) -> Result<Vec<Affinity>> {
        let entry = self.read_set(&entry_key(product)).await?;
        Ok(rank(entry, &BTreeSet::new(), usize::MAX))
    }
}

/// A scratch key held for the duration of one union query.
///
/// There is no async drop, so the normal path hands the query outcome to
/// [`Scratch::release`], which deletes the key and then returns the outcome.
/// If the query future is dropped first (timeout, disconnect) the guard
/// deletes the key from a spawned task instead.
struct Scratch<'a, C: SortedSetClient + Clone + 'static> {
    client: &'a C,
    key: String,
    released: bool,
}

impl<'a, C: SortedSetClient + Clone + 'static> Scratch<'a, C> {
    fn acquire(client: &'a C, products: &[ProductId]) -> Self {
        Self {
            client,
            key: scratch_key(products),
            released: false,
        }
    }

    fn key(&self) -> &str {
        &self.key
    }

    /// Delete the scratch key, then return `outcome`.
    ///
    /// A failed query keeps its own error; a cleanup failure after a failed
    /// query is only logged. A cleanup failure after a successful query is
    /// returned so store trouble is never swallowed.
    async fn release<T>(mut self, outcome: Result<T>) -> Result<T> {
        let cleanup = self.client.del(&self.key).await;
        self.released = true;

        match (outcome, cleanup) {
            (Ok(value), Ok(_)) => Ok(value),
            (Ok(_), Err(err)) => Err(err.into()),
            (Err(err), Ok(_)) => Err(err),
            (Err(err), Err(cleanup_err)) => {
                warn!(
                    key = %self.key,
                    error = %cleanup_err,
                    "Failed to delete scratch set after query error"
                );
                Err(err)
            }
        }
    }
}

impl<C: SortedSetClient + Clone + 'static> Drop for Scratch<'_, C> {
    fn drop(&mut self) {
        if self.released {
            return;
        }

        let key = std::mem::take(&mut self.key);
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(key = %key, "Union query abandoned outside a runtime; scratch set left behind");
            return;
        };

        warn!(key = %key, "Union query abandoned; deleting scratch set in background");
        let client = self.client.clone();
        runtime.spawn(async move {
            if let Err(err) = client.del(&key).await {
                warn!(key = %key, error = %err, "Failed to delete abandoned scratch set");
            }
        });
    }
}

fn parse_affinity(key: &str, member: &str, score: f64) -> Result<Affinity> {
    let product_id = member
        .parse::<ProductId>()
        .map_err(|e| StoreError::Malformed {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

    if !score.is_finite() || score < 0.0 {
        return Err(StoreError::Malformed {
            key: key.to_string(),
            reason: format!("score {score} for member {member} is not a count"),
        }
        .into());
    }

    // Scores only ever grow by whole increments.
    Ok(Affinity::new(product_id, score as u64))
}

fn ids(affinities: Vec<Affinity>) -> Vec<ProductId> {
    affinities.into_iter().map(|a| a.product_id).collect()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::adapter::outbound::memory::MemorySortedSets;
    use crate::testkit::client::{FaultyClient, Op};

    fn id(raw: u64) -> ProductId {
        ProductId::new(raw)
    }

    async fn seeded() -> SortedSetAffinityStore<MemorySortedSets> {
        let store = SortedSetAffinityStore::new(MemorySortedSets::new());
        for (product, other, amount) in [(1, 3, 3), (1, 4, 1), (2, 3, 2), (2, 5, 5)] {
            store.increment(id(product), id(other), amount).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn union_sums_scores_and_excludes_inputs() {
        let store = seeded().await;
        let exclude: BTreeSet<_> = [id(1), id(2)].into_iter().collect();

        let result = store.union_top_n(&[id(1), id(2)], &exclude, 10).await.unwrap();

        // 3 and 5 both sum to 5; the lower id wins the tie.
        assert_eq!(result, vec![id(3), id(5), id(4)]);
    }

    #[tokio::test]
    async fn union_removes_scratch_set_on_success() {
        let store = seeded().await;
        let exclude: BTreeSet<_> = [id(1), id(2)].into_iter().collect();

        store.union_top_n(&[id(2), id(1)], &exclude, 10).await.unwrap();

        assert!(!store.client().contains_key("tmp:purchased_with:1_2"));
    }

    #[tokio::test]
    async fn union_removes_scratch_set_when_read_fails() {
        let memory = MemorySortedSets::new();
        memory.zincrby("product:1:purchased_with", "3", 1.0).await.unwrap();
        let store = SortedSetAffinityStore::new(FaultyClient::new(memory));
        store.client().fail_on(Op::Range);

        let exclude: BTreeSet<_> = [id(1), id(2)].into_iter().collect();
        let err = store
            .union_top_n(&[id(1), id(2)], &exclude, 10)
            .await
            .unwrap_err();

        assert!(err.is_store_unavailable());
        assert!(!store.client().inner().contains_key("tmp:purchased_with:1_2"));
    }

    #[tokio::test]
    async fn abandoned_union_still_deletes_scratch_set() {
        let memory = MemorySortedSets::new();
        memory.zincrby("product:1:purchased_with", "3", 1.0).await.unwrap();
        let store = SortedSetAffinityStore::new(FaultyClient::new(memory.clone()));
        store.client().stall_on(Op::Range);

        let exclude: BTreeSet<_> = [id(1), id(2)].into_iter().collect();
        let sources = [id(1), id(2)];
        let query = store.union_top_n(&sources, &exclude, 5);
        let timed_out = tokio::time::timeout(Duration::from_millis(50), query).await;
        assert!(timed_out.is_err());

        // Give the background delete a chance to run.
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(memory.keys(), vec!["product:1:purchased_with".to_string()]);
    }

    #[tokio::test]
    async fn union_reports_cleanup_failure_after_successful_read() {
        let store = SortedSetAffinityStore::new(FaultyClient::new(MemorySortedSets::new()));
        store.client().fail_on(Op::Delete);

        let exclude: BTreeSet<_> = [id(1), id(2)].into_iter().collect();
        let result = store.union_top_n(&[id(1), id(2)], &exclude, 10).await;

        assert!(result.unwrap_err().is_store_unavailable());
    }

    #[tokio::test]
    async fn top_n_never_returns_the_product_itself() {
        let store = seeded().await;
        store.client().zincrby("product:1:purchased_with", "1", 99.0).await.unwrap();

        let result = store.top_n(id(1), 10).await.unwrap();

        assert_eq!(result, vec![id(3), id(4)]);
    }

    #[tokio::test]
    async fn non_numeric_member_is_malformed() {
        let store = SortedSetAffinityStore::new(MemorySortedSets::new());
        store.client().zincrby("product:1:purchased_with", "abc", 1.0).await.unwrap();

        let err = store.top_n(id(1), 5).await.unwrap_err();

        assert!(matches!(
            err,
            crate::error::Error::Store(StoreError::Malformed { .. })
        ));
    }

    #[tokio::test]
    async fn padded_member_is_malformed() {
        let store = SortedSetAffinityStore::new(MemorySortedSets::new());
        store.client().zincrby("product:1:purchased_with", " 3", 1.0).await.unwrap();

        let err = store.entry(id(1)).await.unwrap_err();

        assert!(matches!(
            err,
            crate::error::Error::Store(StoreError::Malformed { .. })
        ));
    }

    #[tokio::test]
    async fn score_defaults_to_zero() {
        let store = seeded().await;
        assert_eq!(store.score(id(1), id(3)).await.unwrap(), 3);
        assert_eq!(store.score(id(1), id(9)).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_entry_drops_whole_set() {
        let store = seeded().await;
        store.delete_entry(id(1)).await.unwrap();
        assert!(store.entry(id(1)).await.unwrap().is_empty());
        assert_eq!(store.entry(id(2)).await.unwrap().len(), 2);
    }
}
