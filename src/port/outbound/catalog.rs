//! Catalog port: the owner of product identities.

use std::future::Future;

use crate::domain::{id::ProductId, product::Product};
use crate::error::Result;

/// Read access to the product catalog.
pub trait Catalog: Send + Sync {
    /// Every product identity the catalog knows about.
    fn product_ids(&self) -> impl Future<Output = Result<Vec<ProductId>>> + Send;

    /// Resolve `ids` to product records in the same order.
    ///
    /// Ids the catalog does not know are skipped.
    fn resolve(&self, ids: &[ProductId]) -> impl Future<Output = Result<Vec<Product>>> + Send;
}
