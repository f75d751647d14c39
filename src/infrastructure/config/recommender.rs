//! Recommender and catalog settings.

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::query::DEFAULT_MAX_RESULTS;

/// Recommender service settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommenderConfig {
    /// Suggestion limit used when a caller does not pass one.
    #[serde(default = "default_max_results")]
    pub default_max_results: usize,
}

const fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            default_max_results: default_max_results(),
        }
    }
}

/// Where the product catalog is loaded from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// JSON file of product records. Without one the catalog is empty,
    /// which leaves `clear` with nothing to enumerate.
    #[serde(default)]
    pub path: Option<PathBuf>,
}
