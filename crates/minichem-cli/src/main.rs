mod cli;
mod commands;
mod config;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::config::PartialChemistryConfig;
use crate::error::{CliError, Result};
use clap::Parser;
use minichemistry::engine::context::Chemistry;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!(
        "🧪 miniChemistry CLI v{} starting up.",
        env!("CARGO_PKG_VERSION")
    );
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = load_chemistry(&cli).and_then(|chemistry| match cli.command {
        Commands::Predict(args) => {
            info!("Dispatching to 'predict' command.");
            commands::predict::run(args, &chemistry)
        }
        Commands::Equate(args) => {
            info!("Dispatching to 'equate' command.");
            commands::equate::run(args, &chemistry)
        }
        Commands::Parse(args) => {
            info!("Dispatching to 'parse' command.");
            commands::parse::run(args, &chemistry)
        }
        Commands::Essential(args) => {
            info!("Dispatching to 'essential' command.");
            commands::essential::run(args, &chemistry)
        }
        Commands::Redox(args) => {
            info!("Dispatching to 'redox' command.");
            commands::redox::run(args, &chemistry)
        }
        Commands::Batch(args) => {
            info!("Dispatching to 'batch' command.");
            commands::batch::run(args, &chemistry, !cli.quiet)
        }
    });

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}

fn load_chemistry(cli: &Cli) -> Result<Chemistry> {
    let config = PartialChemistryConfig::load(cli.config.as_deref())?.merge_with_cli(cli.threshold)?;
    Chemistry::load(&config).map_err(CliError::Databases)
}
