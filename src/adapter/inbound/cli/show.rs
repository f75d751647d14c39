//! Handler for the `show` command.

use crate::adapter::inbound::cli::output;
use crate::application::recommender::Recommender;
use crate::domain::id::ProductId;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::catalog::Catalog;
use crate::port::outbound::store::AffinityStore;

const COLUMNS: [(&str, usize); 3] = [("Rank", 4), ("Product", 12), ("Score", 8)];

/// Execute the show command.
pub async fn execute(config: &Config, product: ProductId) -> Result<()> {
    let recommender = bootstrap::build_recommender(config).await?;
    run(&recommender, product).await
}

/// Print the full ranked entry of `product`.
pub async fn run<S: AffinityStore, C: Catalog>(
    recommender: &Recommender<S, C>,
    product: ProductId,
) -> Result<()> {
    let entry = recommender.affinities(product).await?;

    output::section(&format!("Bought with {product}"));
    if entry.is_empty() {
        output::note("No co-purchases recorded");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = entry
        .iter()
        .enumerate()
        .map(|(rank, affinity)| {
            vec![
                (rank + 1).to_string(),
                affinity.product_id.to_string(),
                affinity.score.to_string(),
            ]
        })
        .collect();
    output::table(&COLUMNS, &rows);
    Ok(())
}
