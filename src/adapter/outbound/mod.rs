//! Outbound adapters: concrete implementations of the outbound ports.

pub mod catalog;
pub mod memory;
pub mod redis;
pub mod sorted_set;
