//! Affinity store implemented on top of a sorted-set client.

pub mod keys;
pub mod store;
