//! # List-Directory Pipeline
//!
//! Pipeline B: start one tool server as a subprocess, list a directory through
//! it, and tear the subprocess down whether or not the call succeeded.

use crate::application::path_arguments;
use crate::domain::config::ListingConfig;
use crate::domain::errors::Result;
use crate::domain::traits::ToolSession;
use crate::infrastructure::mcp::McpClient;
use crate::strings::logs;

pub const LISTING_SERVER: &str = "listing";

/// Spawn the configured server and list `config.path` through it.
pub async fn run_listing(config: &ListingConfig) -> Result<String> {
    tracing::info!("{}", logs::listing_directory(&config.path));
    let client = McpClient::spawn(LISTING_SERVER, &config.server)
        .await
        .inspect_err(|e| tracing::error!("{}", logs::step_failed("spawn", &e.to_string())))?;
    list_directory(client, &config.tool, &config.path).await
}

/// Call `tool` with `path` and close the session exactly once afterwards.
/// If both the call and the close fail, the call's error is returned.
pub async fn list_directory<S: ToolSession>(
    mut session: S,
    tool: &str,
    path: &str,
) -> Result<String> {
    let listing = session.call_tool(tool, path_arguments(path)).await;
    let closed = session.close().await;

    let listing = listing.inspect_err(|e| {
        tracing::error!("{}", logs::step_failed(tool, &e.to_string()));
    })?;
    closed?;
    Ok(listing)
}
