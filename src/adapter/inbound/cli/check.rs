//! Handler for the `check` command.

use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::redis::client::RedisClient;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::sorted_set::SortedSetClient;

/// Execute the check command.
///
/// The configuration has already been loaded and validated by the caller;
/// this confirms the catalog loads and the store answers a ping.
pub async fn execute(config: &Config) -> Result<()> {
    output::header(env!("CARGO_PKG_VERSION"));
    output::success("Configuration is valid");

    let catalog = bootstrap::load_catalog(&config.catalog)?;
    output::field("Catalog", format!("{} products", catalog.len()));

    output::field("Store", config.redacted_store_url());
    let client = RedisClient::connect(&config.store).await?;
    client.ping().await?;
    output::success("Store is reachable");

    Ok(())
}
