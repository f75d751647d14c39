//! Infrastructure bootstrap helpers for runtime wiring.

use tracing::{info, warn};

use crate::adapter::outbound::catalog::StaticCatalog;
use crate::adapter::outbound::redis::client::{RedisAffinityStore, RedisClient};
use crate::adapter::outbound::sorted_set::store::SortedSetAffinityStore;
use crate::application::recommender::Recommender;
use crate::error::Result;
use crate::infrastructure::config::recommender::CatalogConfig;
use crate::infrastructure::config::settings::Config;

/// Recommender wired to Redis and the configured catalog.
pub type AppRecommender = Recommender<RedisAffinityStore, StaticCatalog>;

/// Load the catalog named in configuration, or an empty one.
pub fn load_catalog(config: &CatalogConfig) -> Result<StaticCatalog> {
    match &config.path {
        Some(path) => {
            let catalog = StaticCatalog::from_json_file(path)?;
            info!(path = %path.display(), products = catalog.len(), "Loaded catalog");
            Ok(catalog)
        }
        None => {
            warn!("No catalog configured; product listing and resolution are empty");
            Ok(StaticCatalog::default())
        }
    }
}

/// Connect to the store and assemble the recommender.
pub async fn build_recommender(config: &Config) -> Result<AppRecommender> {
    let catalog = load_catalog(&config.catalog)?;
    let client = RedisClient::connect(&config.store).await?;

    Ok(Recommender::new(SortedSetAffinityStore::new(client), catalog)
        .with_default_max_results(config.recommender.default_max_results))
}
