//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the recommender's infrastructure dependencies:
//! the affinity store, the raw sorted-set service under it, and the catalog.

pub mod catalog;
pub mod sorted_set;
pub mod store;
