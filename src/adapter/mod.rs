//! Adapters binding the ports to concrete technology.
//!
//! - `inbound` drives the application (the command line).
//! - `outbound` is driven by it (Redis, in-memory sets, the catalog file).

pub mod inbound;
pub mod outbound;
