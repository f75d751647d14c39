//! Catalog product records as the recommender presents them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::ProductId;

/// A product record resolved from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    brand: Option<String>,
    price: Decimal,
}

/// Unvalidated wire form of [`Product`].
#[derive(Deserialize)]
struct ProductRecord {
    id: ProductId,
    name: String,
    #[serde(default)]
    brand: Option<String>,
    price: Decimal,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Self::try_new(record.id, record.name, record.brand, record.price)
    }
}

impl Product {
    /// Create a validated product record.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyProductName`] if `name` is blank.
    pub fn try_new(
        id: ProductId,
        name: impl Into<String>,
        brand: Option<String>,
        price: Decimal,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyProductName);
        }
        Ok(Self {
            id,
            name,
            brand,
            price,
        })
    }

    #[must_use]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }
}
