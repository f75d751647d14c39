use thiserror::Error;

use crate::domain::error::DomainError;
use crate::domain::id::ProductId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Sorted-set store errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached: refused, dropped, or timed out.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store answered with an error reply.
    #[error("store command failed: {0}")]
    Command(String),

    /// A stored value could not be read back as an affinity.
    #[error("malformed entry in {key}: {reason}")]
    Malformed { key: String, reason: String },
}

/// Catalog loading errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("duplicate product {id} in catalog")]
    DuplicateProduct { id: ProductId },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A destructive command was invoked without confirmation.
    #[error("refusing to {action} without --yes")]
    Unconfirmed { action: &'static str },
}

impl Error {
    /// True when the backing store could not be reached.
    #[must_use]
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Error::Store(StoreError::Unavailable(_)))
    }

    /// True when the caller supplied arguments that were rejected up front.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::Domain(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_store_unavailable() {
        let err: Error = StoreError::Unavailable("connection refused".into()).into();
        assert!(err.is_store_unavailable());
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn classifies_invalid_input() {
        let err: Error = DomainError::NegativeMaxResults { value: -1 }.into();
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "max_results must be 0 or greater, got -1");
    }
}
