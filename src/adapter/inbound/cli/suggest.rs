//! Handler for the `suggest` command.

use crate::adapter::inbound::cli::output;
use crate::application::recommender::Recommender;
use crate::domain::id::ProductId;
use crate::domain::query::MaxResults;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::catalog::Catalog;
use crate::port::outbound::store::AffinityStore;

const ID_COLUMNS: [(&str, usize); 2] = [("Rank", 4), ("Product", 12)];
const PRODUCT_COLUMNS: [(&str, usize); 5] = [
    ("Rank", 4),
    ("Product", 12),
    ("Name", 24),
    ("Brand", 16),
    ("Price", 10),
];

/// Execute the suggest command.
///
/// The limit is validated before any connection is opened.
pub async fn execute(
    config: &Config,
    products: &[ProductId],
    limit: Option<i64>,
    resolve: bool,
) -> Result<()> {
    let limit = resolve_limit(limit, config.recommender.default_max_results)?;
    let recommender = bootstrap::build_recommender(config).await?;
    run(&recommender, products, limit, resolve).await
}

/// Turn the raw `--limit` flag into a validated suggestion limit.
pub fn resolve_limit(limit: Option<i64>, default: usize) -> Result<MaxResults> {
    match limit {
        Some(raw) => Ok(MaxResults::try_from(raw)?),
        None => Ok(MaxResults::new(default)),
    }
}

/// Query suggestions and print them as a ranked table.
pub async fn run<S: AffinityStore, C: Catalog>(
    recommender: &Recommender<S, C>,
    products: &[ProductId],
    limit: MaxResults,
    resolve: bool,
) -> Result<()> {
    if resolve {
        let found = recommender.suggest_products(products, limit.get()).await?;
        if found.is_empty() {
            output::note("No suggestions");
            return Ok(());
        }

        let rows: Vec<Vec<String>> = found
            .iter()
            .enumerate()
            .map(|(rank, product)| {
                vec![
                    (rank + 1).to_string(),
                    product.id().to_string(),
                    product.name().to_string(),
                    product.brand().unwrap_or("-").to_string(),
                    product.price().to_string(),
                ]
            })
            .collect();
        output::table(&PRODUCT_COLUMNS, &rows);
        return Ok(());
    }

    let found = recommender.suggest(products, limit.get()).await?;
    if found.is_empty() {
        output::note("No suggestions");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = found
        .iter()
        .enumerate()
        .map(|(rank, product)| vec![(rank + 1).to_string(), product.to_string()])
        .collect();
    output::table(&ID_COLUMNS, &rows);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::error::Error;

    #[test]
    fn negative_limit_is_invalid_input() {
        let err = resolve_limit(Some(-1), 6).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(matches!(
            err,
            Error::Domain(DomainError::NegativeMaxResults { value: -1 })
        ));
    }

    #[test]
    fn missing_limit_uses_default() {
        assert_eq!(resolve_limit(None, 4).unwrap(), MaxResults::new(4));
        assert_eq!(resolve_limit(Some(0), 4).unwrap(), MaxResults::new(0));
    }
}
