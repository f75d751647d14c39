//! Domain validation errors.
//!
//! These are the invalid-input class of failures: they are raised at the
//! boundary, before any store round trip happens.
//!
//! # Examples
//!
//! ```
//! use copurchase::domain::error::DomainError;
//! use copurchase::domain::query::MaxResults;
//!
//! let result = MaxResults::try_from(-1_i64);
//! assert!(matches!(result, Err(DomainError::NegativeMaxResults { value: -1 })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A suggestion limit below zero was requested.
    #[error("max_results must be 0 or greater, got {value}")]
    NegativeMaxResults {
        /// The rejected limit.
        value: i64,
    },

    /// A product identity could not be parsed.
    #[error("malformed product id '{value}'")]
    MalformedProductId {
        /// The rejected text.
        value: String,
    },

    /// Catalog records must carry a display name.
    #[error("product name cannot be empty")]
    EmptyProductName,
}
