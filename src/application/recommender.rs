//! Co-purchase recommendation service.
//!
//! Records completed orders into the affinity store and answers "frequently
//! bought with" queries by reading and combining per-product entries.
//!
//! # Write path
//!
//! One call per completed order. Every ordered pair of distinct products in
//! the basket gets its count bumped by one, so a basket of `k` products
//! costs `k * (k - 1)` increments. Concurrent orders need no coordination:
//! increments are atomic in the store and addition commutes.
//!
//! # Read path
//!
//! ```text
//! []        -> []                        (no store access)
//! [p]       -> top_n(p)
//! [p, q, ..] -> union_top_n(inputs, exclude = inputs)
//! ```
//!
//! The service holds no state of its own beyond its injected handles.

use std::collections::BTreeSet;

use futures_util::future::try_join_all;
use tracing::{debug, info, warn};

use crate::domain::affinity::Affinity;
use crate::domain::basket::{Basket, OrderLine};
use crate::domain::id::ProductId;
use crate::domain::product::Product;
use crate::domain::query::{QueryShape, DEFAULT_MAX_RESULTS};
use crate::error::Result;
use crate::port::outbound::catalog::Catalog;
use crate::port::outbound::store::AffinityStore;

/// Item-to-item recommender over an injected store and catalog.
pub struct Recommender<S, C> {
    store: S,
    catalog: C,
    default_max_results: usize,
}

impl<S: AffinityStore, C: Catalog> Recommender<S, C> {
    /// Create a recommender with the default suggestion limit.
    pub fn new(store: S, catalog: C) -> Self {
        Self {
            store,
            catalog,
            default_max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Override the limit used when callers do not pass one.
    #[must_use]
    pub fn with_default_max_results(mut self, limit: usize) -> Self {
        self.default_max_results = limit;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn default_max_results(&self) -> usize {
        self.default_max_results
    }

    /// Record the basket of one completed order.
    ///
    /// Must be called exactly once per order; calling it again counts the
    /// order twice. Returns the number of increments written. Baskets with
    /// fewer than two products write nothing.
    ///
    /// Not transactional: if the store fails part way, the increments that
    /// already landed stay.
    pub async fn record_co_purchase(&self, basket: &Basket) -> Result<usize> {
        if basket.len() < 2 {
            debug!(products = basket.len(), "Basket too small to record");
            return Ok(0);
        }

        let writes = basket
            .ordered_pairs()
            .map(|(product, other)| self.store.increment(product, other, 1));
        let written = try_join_all(writes).await?.len();

        debug!(
            products = basket.len(),
            increments = written,
            "Recorded co-purchase"
        );
        Ok(written)
    }

    /// Record a completed order from its line items.
    pub async fn record_order(&self, lines: &[OrderLine]) -> Result<usize> {
        self.record_co_purchase(&Basket::from_lines(lines)).await
    }

    /// Products most often bought together with `products`, best first.
    ///
    /// Never returns any of the input products. Repeated inputs are
    /// collapsed. Equal scores rank the lower product id first.
    pub async fn suggest(
        &self,
        products: &[ProductId],
        max_results: usize,
    ) -> Result<Vec<ProductId>> {
        if max_results == 0 {
            return Ok(Vec::new());
        }

        match QueryShape::of(products) {
            QueryShape::Empty => Ok(Vec::new()),
            QueryShape::Single(product) => self.store.top_n(product, max_results).await,
            QueryShape::Many(inputs) => {
                let exclude: BTreeSet<ProductId> = inputs.iter().copied().collect();
                self.store
                    .union_top_n(&inputs, &exclude, max_results)
                    .await
            }
        }
    }

    /// [`suggest`](Self::suggest) with the configured default limit.
    pub async fn suggest_default(&self, products: &[ProductId]) -> Result<Vec<ProductId>> {
        self.suggest(products, self.default_max_results).await
    }

    /// Suggestions resolved to catalog records, ranking order kept.
    ///
    /// Suggested ids the catalog no longer knows are dropped.
    pub async fn suggest_products(
        &self,
        products: &[ProductId],
        max_results: usize,
    ) -> Result<Vec<Product>> {
        let ids = self.suggest(products, max_results).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.catalog.resolve(&ids).await
    }

    /// The full ranked affinity entry of `product`.
    pub async fn affinities(&self, product: ProductId) -> Result<Vec<Affinity>> {
        self.store.entry(product).await
    }

    /// How many times `product` and `other` were bought together, as
    /// recorded under `product`.
    pub async fn score(&self, product: ProductId, other: ProductId) -> Result<u64> {
        self.store.score(product, other).await
    }

    /// Delete the affinity entry of every catalog product.
    ///
    /// Administrative reset. Best-effort: stops at the first store error,
    /// leaving earlier entries cleared and later ones intact. Returns the
    /// number of entries cleared.
    pub async fn clear_all(&self) -> Result<usize> {
        let products = self.catalog.product_ids().await?;
        let total = products.len();

        for (cleared, product) in products.into_iter().enumerate() {
            if let Err(err) = self.store.delete_entry(product).await {
                warn!(
                    cleared,
                    total,
                    product = %product,
                    error = %err,
                    "Affinity reset interrupted"
                );
                return Err(err);
            }
        }

        info!(cleared = total, "Cleared affinity entries");
        Ok(total)
    }
}
