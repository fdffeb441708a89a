//! # CLI
//!
//! Both binaries take no required arguments; everything comes from the config file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;

use crate::application::logging;
use crate::domain::config::{AppConfig, CONFIG_ENV};
use crate::strings::logs;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Path to the configuration file (defaults to ./config.yaml, then the user config dir)
    #[arg(short, long, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,
}

/// Load `.env` into the process environment, then parse arguments.
pub fn parse() -> Cli {
    dotenv::dotenv().ok();
    Cli::parse()
}

/// Locate and load the configuration, then start logging.
///
/// The guard keeps the file log writer alive; hold it for the life of `main`.
pub fn bootstrap(cli: &Cli) -> Result<(AppConfig, Option<WorkerGuard>)> {
    let path = AppConfig::locate(cli.config.as_deref())?;
    let config = AppConfig::load(&path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    let guard = logging::init(&config.logging).context("Failed to initialise logging")?;

    tracing::info!("{}", logs::config_loaded(&path.display().to_string()));
    Ok((config, guard))
}
