//! Store-agnostic core types of the recommender.
//!
//! Nothing in here performs I/O or depends on the async runtime or a store
//! client; adapters translate to and from these types.

pub mod affinity;
pub mod basket;
pub mod error;
pub mod id;
pub mod product;
pub mod query;
