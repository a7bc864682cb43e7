//! SsoProbe - browser-driven SSO flow verification CLI
//!
#![doc = "Main entry point for the ssoprobe command."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ssoprobe::cli::{Cli, Commands};
use ssoprobe::commands;
use ssoprobe::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration (file, if present, then env, then CLI flags)
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    let exit_code = match cli.command {
        Commands::Run {
            ref filter, json, ..
        } => {
            let filter = filter.clone();
            commands::run(config, filter, json).await?
        }
        Commands::List { .. } => {
            commands::list(&config);
            0
        }
        Commands::Check { .. } => commands::check(&config).await?,
    };

    std::process::exit(exit_code);
}

/// Initialize tracing subscriber with environment filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "ssoprobe=debug"
    } else {
        "ssoprobe=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
