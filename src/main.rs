use clap::Parser;
use copurchase::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use copurchase::adapter::inbound::cli::output::{self, Mode};
use copurchase::adapter::inbound::cli::{check, clear, config, record, show, suggest};
use copurchase::error::Result;
use copurchase::infrastructure::config::settings::Config;
use tracing::{debug, error};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(Mode::from_flags(cli.json, cli.quiet));

    if let Err(e) = run(cli).await {
        error!(error = %e, "Command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Validate) => config::execute_validate(&cli.config),
        command => {
            let mut settings = Config::load_or_default(&cli.config)?;
            settings.logging.raise_verbosity(cli.verbose);
            settings.init_logging();
            debug!(path = %cli.config.display(), "Configuration loaded");

            match command {
                Commands::Record(args) => record::execute(&settings, &args.products).await,
                Commands::Suggest(args) => {
                    suggest::execute(&settings, &args.products, args.limit, args.resolve).await
                }
                Commands::Show(args) => show::execute(&settings, args.product).await,
                Commands::Clear(args) => clear::execute(&settings, args.yes).await,
                Commands::Check => check::execute(&settings).await,
                Commands::Config(ConfigCommand::Show) => {
                    config::execute_show(&settings);
                    Ok(())
                }
                Commands::Config(ConfigCommand::Init(_) | ConfigCommand::Validate) => Ok(()),
            }
        }
    }
}
