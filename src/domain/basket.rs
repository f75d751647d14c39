//! Baskets: the distinct products of one completed order.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// One line item of a completed order.
///
/// Quantity has no bearing on affinity: buying three of A with B counts the
/// same as buying one of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl OrderLine {
    #[must_use]
    pub const fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// The distinct set of products contained in one completed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Basket {
    products: BTreeSet<ProductId>,
}

impl Basket {
    /// Build a basket from the line items of an order.
    #[must_use]
    pub fn from_lines(lines: &[OrderLine]) -> Self {
        lines.iter().map(|line| line.product_id).collect()
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the basket holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate over the distinct products in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.products.iter().copied()
    }

    /// Every ordered pair `(a, b)` with `a != b`.
    ///
    /// A basket of `k` products yields `k * (k - 1)` pairs, so each
    /// co-purchase is written in both directions and never as a self-loop.
    pub fn ordered_pairs(&self) -> impl Iterator<Item = (ProductId, ProductId)> + '_ {
        self.iter()
            .flat_map(move |a| self.iter().filter(move |&b| b != a).map(move |b| (a, b)))
    }
}

impl FromIterator<ProductId> for Basket {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}
