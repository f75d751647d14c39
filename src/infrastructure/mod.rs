//! Infrastructure: configuration, logging, and runtime wiring.

pub mod bootstrap;
pub mod config;
