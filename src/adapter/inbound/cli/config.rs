//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!("2. Run: copurchase -c {} check", path.display()));
    Ok(())
}

/// Execute `config show` with an already loaded configuration.
pub fn execute_show(config: &Config) {
    output::section("Effective Configuration");

    output::section("Store");
    output::field("URL", config.redacted_store_url());
    output::field(
        "Timeout",
        format!("{} ms", config.store.connection_timeout_ms),
    );
    output::field("Retries", config.store.retries);

    output::section("Recommender");
    output::field("Max results", config.recommender.default_max_results);

    output::section("Catalog");
    match &config.catalog.path {
        Some(path) => output::field("Path", path.display()),
        None => output::note("(none configured)"),
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
}

/// Execute `config validate`.
///
/// Unlike the other commands this requires the file to exist.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());

    let config = Config::load(path)?;
    let catalog = bootstrap::load_catalog(&config.catalog)?;
    output::success("Config file is valid");

    if config.catalog.path.is_none() {
        output::warning("No catalog configured; `clear` has no products to reset");
    } else if catalog.is_empty() {
        output::warning("Catalog file lists no products");
    }
    if config.recommender.default_max_results == 0 {
        output::warning("recommender.default_max_results is 0; suggestions without --limit are empty");
    }

    output::field("Next", format!("copurchase -c {} check", path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    #[test]
    fn init_writes_a_loadable_template() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        execute_init(&path, false).unwrap();

        assert!(path.exists());
        Config::load(&path).unwrap();
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "# mine").unwrap();

        let err = execute_init(&path, false).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "config",
                ..
            })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");

        execute_init(&path, true).unwrap();
        assert_ne!(fs::read_to_string(&path).unwrap(), "# mine");
    }

    #[test]
    fn validate_requires_existing_file() {
        let dir = TempDir::new().unwrap();
        let err = execute_validate(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
    }
}
