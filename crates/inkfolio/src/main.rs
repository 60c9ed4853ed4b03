//! Main entry point for Inkfolio.

use anyhow::{Context, Result};
use clap::Parser;
use inkfolio::{config_source, load_config, App, Cli};
use inkfolio_common::init_logging;
use std::io;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli).context("Failed to load configuration")?;
    init_logging(config.logging.to_logging_config()).context("Failed to initialize logging")?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting Inkfolio");
    match config_source(&cli) {
        Some(path) => info!(path = %path.display(), "Configuration loaded"),
        None => info!("No configuration file found, using defaults"),
    }

    let mut app = App::new(&config, cli.no_splash).context("Failed to start site session")?;
    app.apply_cli(&cli);

    let mut stdout = io::stdout().lock();
    app.run(cli.subcommand(), &mut stdout).await?;

    Ok(())
}
