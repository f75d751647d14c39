//! Command-line interface definitions.
//!
//! Defines the CLI structure for the copurchase application using `clap`.
//! Subcommands record completed orders, query suggestions, inspect and reset
//! affinity entries, and manage configuration.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;
use crate::domain::error::DomainError;
use crate::domain::id::ProductId;

/// Product ids typed on a command line may carry stray whitespace.
fn parse_product_id(raw: &str) -> Result<ProductId, DomainError> {
    raw.trim().parse()
}

/// "Frequently bought with" recommendations over a sorted-set store
#[derive(Parser, Debug)]
#[command(name = "copurchase")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the copurchase CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record the basket of one completed order
    Record(RecordArgs),

    /// Suggest products frequently bought with the given ones
    Suggest(SuggestArgs),

    /// Show the ranked affinity entry of a product
    Show(ShowArgs),

    /// Delete the affinity entry of every catalog product
    Clear(ClearArgs),

    /// Validate configuration and ping the store
    Check,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `copurchase config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate the configuration file for correctness.
    Validate,
}

/// Arguments for the `record` subcommand.
#[derive(Parser, Debug)]
pub struct RecordArgs {
    /// Product ids in the order (repeats are collapsed).
    #[arg(required = true, value_parser = parse_product_id)]
    pub products: Vec<ProductId>,
}

/// Arguments for the `suggest` subcommand.
///
/// The limit is taken as a signed integer so that negative values reach
/// validation and are reported as invalid input instead of a parse error.
#[derive(Parser, Debug)]
pub struct SuggestArgs {
    /// Product ids to find companions for.
    #[arg(value_parser = parse_product_id)]
    pub products: Vec<ProductId>,

    /// Maximum number of suggestions (defaults to `recommender.default_max_results`).
    #[arg(short, long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Print catalog records instead of bare ids.
    #[arg(long)]
    pub resolve: bool,
}

/// Arguments for the `show` subcommand.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Product whose entry to display.
    #[arg(value_parser = parse_product_id)]
    pub product: ProductId,
}

/// Arguments for the `clear` subcommand.
#[derive(Parser, Debug)]
pub struct ClearArgs {
    /// Confirm the reset; nothing is deleted without it.
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_has_name_and_version() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "copurchase");
        assert!(cmd.get_version().is_some());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["copurchase", "check", "--json", "-q", "-vv"]).unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn record_parses_product_ids() {
        let cli = Cli::try_parse_from(["copurchase", "record", "3", "7", "3"]).unwrap();
        match cli.command {
            Commands::Record(args) => assert_eq!(
                args.products,
                vec![ProductId::new(3), ProductId::new(7), ProductId::new(3)]
            ),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn record_requires_products() {
        assert!(Cli::try_parse_from(["copurchase", "record"]).is_err());
    }

    #[test]
    fn malformed_product_id_is_rejected() {
        assert!(Cli::try_parse_from(["copurchase", "show", "abc"]).is_err());
    }

    #[test]
    fn product_ids_are_trimmed_on_the_command_line() {
        let cli = Cli::try_parse_from(["copurchase", "show", " 7 "]).unwrap();
        match cli.command {
            Commands::Show(args) => assert_eq!(args.product, ProductId::new(7)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn suggest_accepts_negative_limit_for_validation() {
        let cli =
            Cli::try_parse_from(["copurchase", "suggest", "1", "--limit", "-1"]).unwrap();
        match cli.command {
            Commands::Suggest(args) => {
                assert_eq!(args.limit, Some(-1));
                assert!(!args.resolve);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn config_path_is_global() {
        let cli =
            Cli::try_parse_from(["copurchase", "config", "show", "-c", "/tmp/cp.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("/tmp/cp.toml"));
        assert!(matches!(cli.command, Commands::Config(ConfigCommand::Show)));
    }

    #[test]
    fn clear_defaults_to_unconfirmed() {
        let cli = Cli::try_parse_from(["copurchase", "clear"]).unwrap();
        assert!(matches!(cli.command, Commands::Clear(ClearArgs { yes: false })));
    }
}
