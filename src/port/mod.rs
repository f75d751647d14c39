//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                 ┌─────────────────────────┐
//!                 │       Recommender       │
//!                 │   (application layer)   │
//!                 └────────────┬────────────┘
//!              ┌───────────────┴───────────────┐
//!              ▼                               ▼
//!      ┌───────────────┐               ┌───────────────┐
//!      │ AffinityStore │               │    Catalog    │
//!      └───────┬───────┘               └───────────────┘
//!              ▼
//!      ┌───────────────┐
//!      │SortedSetClient│  (Redis or in-memory)
//!      └───────────────┘
//! ```

pub mod outbound;
