//! Static product catalog, optionally loaded from a JSON file.
//!
//! The file is an array of product records:
//!
//! ```json
//! [
//!   { "id": 1, "name": "French press", "brand": "Bodum", "price": "29.90" },
//!   { "id": 2, "name": "Ground coffee", "price": "8.50" }
//! ]
//! ```

use std::collections::HashMap;
use std::path::Path;

use crate::domain::{id::ProductId, product::Product};
use crate::error::{CatalogError, Result};
use crate::port::outbound::catalog::Catalog;

/// Immutable in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    order: Vec<ProductId>,
    products: HashMap<ProductId, Product>,
}

impl StaticCatalog {
    /// Build a catalog from product records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateProduct`] if two records share an id.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut catalog = Self::default();
        for product in products {
            let id = product.id();
            if catalog.products.insert(id, product).is_some() {
                return Err(CatalogError::DuplicateProduct { id }.into());
            }
            catalog.order.push(id);
        }
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if it
    /// contains duplicate ids.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(CatalogError::Read)?;
        Self::from_json(&content)
    }

    /// Parse a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or contains duplicate ids.
    pub fn from_json(content: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(content).map_err(CatalogError::Parse)?;
        Self::new(products)
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Catalog for StaticCatalog {
    async fn product_ids(&self) -> Result<Vec<ProductId>> {
        Ok(self.order.clone())
    }

    async fn resolve(&self, ids: &[ProductId]) -> Result<Vec<Product>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.products.get(id).cloned())
            .collect())
    }
}
