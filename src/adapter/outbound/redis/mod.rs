//! Redis adapter for the sorted-set wire contract.

pub mod client;
pub mod error;
pub mod settings;
