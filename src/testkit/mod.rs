//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`client`] - `FaultyClient`, a sorted-set client wrapper that counts
//!   commands and injects store-unavailable failures.
//! - [`domain`] - Builders for product ids, baskets, products, catalogs.
//! - [`recommender`] - Recommenders wired to in-memory and faulty stores.

pub mod client;
pub mod domain;
pub mod recommender;
