//! # List Command
//!
//! Spawns the listing server, prints what its list tool returns, and stops it.

use anyhow::{Context, Result};

use crate::application::listing::run_listing;
use crate::domain::config::AppConfig;
use crate::strings::logs;

pub async fn handle_list(config: &AppConfig) -> Result<String> {
    let listing_config = config
        .validate_listing()
        .inspect_err(|e| {
            tracing::error!("{}", logs::setup_failed("Invalid configuration", &e.to_string()));
        })
        .context("Invalid configuration for scribe-ls")?;

    let listing = run_listing(listing_config).await?;
    println!("{listing}");
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::WorkflowError;

    #[tokio::test]
    async fn test_edit_only_config_rejected() {
        let config = AppConfig::from_yaml(
            r#"
mcp:
  servers:
    filesystem:
      command: rust-mcp-filesystem
model:
  model: llama3-8b-8192
workflow:
  list_dir: /srv/data
  target_file: /srv/data/example.txt
"#,
        )
        .unwrap();

        let err = handle_list(&config).await.unwrap_err();
        match err.downcast_ref::<WorkflowError>() {
            Some(WorkflowError::Configuration(message)) => {
                assert!(message.contains("listing"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_spawn_failure_is_configuration_error() {
        let config = AppConfig::from_yaml(
            "listing:\n  server:\n    command: scribe-definitely-not-installed-7c1e\n",
        )
        .unwrap();

        let err = handle_list(&config).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WorkflowError>(),
            Some(WorkflowError::Configuration(_))
        ));
    }
}
