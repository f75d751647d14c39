//! Copurchase - "frequently bought with" recommendations.
//!
//! Every completed order bumps a co-purchase count for each ordered pair of
//! distinct products in its basket. Counts live in one sorted set per product
//! (`product:<id>:purchased_with`), so suggestions are a ranked read of one
//! entry, or of the sum of several entries with the inputs removed.
//!
//! # Architecture
//!
//! - [`domain`] - Store-agnostic types: product ids, baskets, affinities,
//!   query limits and the ranking order
//! - [`port`] - Traits the application depends on (`AffinityStore`,
//!   `SortedSetClient`, `Catalog`)
//! - [`application`] - The `Recommender` service
//! - [`adapter`] - Redis and in-memory sorted sets, the catalog file, the CLI
//! - [`infrastructure`] - Configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - Test doubles (fault-injecting store client, fixtures)
//! - `integration-tests` - Tests that need a live Redis
//!
//! # Example
//!
//! ```
//! use copurchase::adapter::outbound::catalog::StaticCatalog;
//! use copurchase::adapter::outbound::memory::MemoryAffinityStore;
//! use copurchase::application::recommender::Recommender;
//! use copurchase::domain::basket::Basket;
//! use copurchase::domain::id::ProductId;
//!
//! # tokio_test::block_on(async {
//! let recommender = Recommender::new(MemoryAffinityStore::in_memory(), StaticCatalog::default());
//!
//! let basket: Basket = [1, 2, 3].into_iter().map(ProductId::new).collect();
//! recommender.record_co_purchase(&basket).await.unwrap();
//!
//! let suggested = recommender.suggest(&[ProductId::new(1)], 6).await.unwrap();
//! assert_eq!(suggested, vec![ProductId::new(2), ProductId::new(3)]);
//! # });
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
