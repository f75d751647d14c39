//! Builders for domain primitives used across tests.

use rust_decimal::Decimal;

use crate::adapter::outbound::catalog::StaticCatalog;
use crate::domain::{basket::Basket, id::ProductId, product::Product};

/// Create a [`ProductId`].
pub fn pid(id: u64) -> ProductId {
    ProductId::new(id)
}

/// Create product ids from raw numbers, order kept.
pub fn ids(raw: &[u64]) -> Vec<ProductId> {
    raw.iter().copied().map(ProductId::new).collect()
}

/// Create a basket of the given products.
pub fn basket(raw: &[u64]) -> Basket {
    raw.iter().copied().map(ProductId::new).collect()
}

/// Create a product record named `product-<id>` priced at `id` units.
pub fn product(id: u64) -> Product {
    Product::try_new(
        ProductId::new(id),
        format!("product-{id}"),
        None,
        Decimal::from(id),
    )
    .expect("generated product names are never blank")
}

/// Create a catalog holding one generated product per id.
pub fn catalog(raw: &[u64]) -> StaticCatalog {
    StaticCatalog::new(raw.iter().copied().map(product).collect())
        .expect("generated catalog ids are distinct")
}
