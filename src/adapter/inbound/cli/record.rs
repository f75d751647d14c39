//! Handler for the `record` command.

use crate::adapter::inbound::cli::output;
use crate::application::recommender::Recommender;
use crate::domain::basket::Basket;
use crate::domain::id::ProductId;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::catalog::Catalog;
use crate::port::outbound::store::AffinityStore;

/// Execute the record command against the configured store.
pub async fn execute(config: &Config, products: &[ProductId]) -> Result<()> {
    let recommender = bootstrap::build_recommender(config).await?;
    run(&recommender, products).await
}

/// Record one order's basket and report how many increments were written.
pub async fn run<S: AffinityStore, C: Catalog>(
    recommender: &Recommender<S, C>,
    products: &[ProductId],
) -> Result<()> {
    let basket: Basket = products.iter().copied().collect();
    let written = recommender.record_co_purchase(&basket).await?;

    if written == 0 {
        output::warning("Basket has fewer than two distinct products; nothing recorded");
        return Ok(());
    }

    output::success("Recorded co-purchase");
    output::field("Products", basket.len());
    output::field("Increments", written);
    Ok(())
}
