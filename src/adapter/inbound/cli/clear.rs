//! Handler for the `clear` command.

use crate::adapter::inbound::cli::output;
use crate::application::recommender::Recommender;
use crate::error::{Error, Result};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::catalog::Catalog;
use crate::port::outbound::store::AffinityStore;

/// Execute the clear command.
///
/// Refuses to touch the store unless `confirmed` is set.
pub async fn execute(config: &Config, confirmed: bool) -> Result<()> {
    require_confirmation(confirmed)?;
    let recommender = bootstrap::build_recommender(config).await?;
    run(&recommender).await
}

fn require_confirmation(confirmed: bool) -> Result<()> {
    if confirmed {
        return Ok(());
    }
    output::hint("pass --yes to delete every catalog product's affinity entry");
    Err(Error::Unconfirmed {
        action: "clear affinity entries",
    })
}

/// Delete the entry of every catalog product.
pub async fn run<S: AffinityStore, C: Catalog>(recommender: &Recommender<S, C>) -> Result<()> {
    let cleared = recommender.clear_all().await?;
    output::success("Cleared affinity entries");
    output::field("Products", cleared);
    Ok(())
}
