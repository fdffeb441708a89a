//! # Logging
//!
//! Installs the global `tracing` subscriber: console output on stderr, plus an
//! optional plain-text file sink. `RUST_LOG` overrides the configured level.

use std::path::Path;
use std::str::FromStr;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::domain::config::LoggingConfig;
use crate::domain::errors::{Result, WorkflowError};

/// Dependencies that are chatty at `info`.
const QUIET_TARGETS: &[&str] = &["rmcp=warn", "hyper=warn", "reqwest=warn"];

/// Filter directives for a base level, e.g. `info,rmcp=warn,...`.
pub fn directives(level: &str) -> Result<String> {
    let level = LevelFilter::from_str(level.trim()).map_err(|_| {
        WorkflowError::Configuration(format!("Invalid logging.level '{level}'"))
    })?;

    let mut parts = vec![level.to_string().to_lowercase()];
    parts.extend(QUIET_TARGETS.iter().map(|t| t.to_string()));
    Ok(parts.join(","))
}

/// Initialise logging for the process. The returned guard must be held until
/// exit so buffered file output is flushed.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directives(&config.level)?)
            .map_err(|e| WorkflowError::Configuration(format!("Invalid log filter: {e}")))?,
    };

    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match &config.file {
        Some(path) => {
            let (writer, guard) = file_writer(path)?;
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| WorkflowError::Configuration(format!("Failed to install logger: {e}")))?;

    Ok(guard)
}

fn file_writer(path: &Path) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let file_name = path.file_name().ok_or_else(|| {
        WorkflowError::Configuration(format!("logging.file '{}' has no file name", path.display()))
    })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(dir).map_err(|e| {
        WorkflowError::Configuration(format!("Failed to create log directory {}: {e}", dir.display()))
    })?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}
