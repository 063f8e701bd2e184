//! Turnos CLI entry point.

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use turnos::cli::{commands, Cli, Commands};
use turnos::infrastructure::config::ConfigLoader;
use turnos::infrastructure::logging::{LogConfig, LoggerImpl};
use turnos::Config;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli.command, cli.config.as_deref(), cli.json).await {
        turnos::cli::handle_error(err, cli.json);
    }
}

async fn run(command: Commands, config_path: Option<&Path>, json: bool) -> Result<()> {
    match command {
        // init must work before any configuration exists
        Commands::Init(args) => commands::init::execute(args, json).await,
        Commands::Shifts(args) => {
            let (config, _logger) = setup(config_path)?;
            commands::shifts::execute(args, &config, json).await
        }
        Commands::Summary(args) => {
            let (config, _logger) = setup(config_path)?;
            commands::summary::execute(args, &config, json).await
        }
        Commands::Events(args) => {
            let (config, _logger) = setup(config_path)?;
            commands::events::execute(args, &config, json).await
        }
        Commands::Config => {
            let (config, _logger) = setup(config_path)?;
            commands::config::execute(&config, json)
        }
    }
}

/// Load configuration and install the global subscriber.
///
/// The returned logger must outlive the command so file logs are flushed.
fn setup(config_path: Option<&Path>) -> Result<(Config, LoggerImpl)> {
    let config = match config_path {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    let logger = LoggerImpl::init(&LogConfig::from(&config.logging))?;
    Ok((config, logger))
}
