//! # Edit Command
//!
//! Connects to the configured tool servers, runs the edit-file workflow, and
//! shuts the servers down again.

use anyhow::{Context, Result};

use crate::application::workflow::EditWorkflow;
use crate::domain::config::AppConfig;
use crate::domain::errors::WorkflowError;
use crate::domain::state::WorkflowState;
use crate::infrastructure::llm::Client as LlmClient;
use crate::infrastructure::mcp::McpManager;
use crate::strings::logs;

pub async fn handle_edit(config: &AppConfig) -> Result<WorkflowState> {
    let settings = config
        .validate_edit()
        .inspect_err(|e| report("Invalid configuration", e))
        .context("Invalid configuration for scribe")?;

    // Resolve the model first so a missing key fails before any server starts.
    let llm = LlmClient::from_config(settings.model)
        .inspect_err(|e| report("Failed to configure model client", e))
        .context("Failed to configure model client")?;

    let mut manager = McpManager::connect(settings.mcp)
        .await
        .inspect_err(|e| report("Failed to connect to MCP servers", e))
        .context("Failed to connect to MCP servers")?;
    tracing::debug!(servers = ?manager.server_names(), "MCP servers connected");

    let mut state = WorkflowState::new();
    let outcome = match manager.discover().await {
        Ok(tools) => {
            EditWorkflow::new(&tools, &llm, settings.workflow)
                .run(&mut state)
                .await
        }
        Err(e) => {
            report("Tool discovery failed", &e);
            Err(e)
        }
    };

    manager.shutdown().await;
    outcome?;
    Ok(state)
}

fn report(stage: &str, err: &WorkflowError) {
    tracing::error!("{}", logs::setup_failed(stage, &err.to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_listing_only_config_rejected_before_startup() {
        let config = AppConfig::from_yaml(
            "listing:\n  server:\n    command: scribe-definitely-not-installed-7c1e\n",
        )
        .unwrap();

        let err = handle_edit(&config).await.unwrap_err();
        let cause = err.downcast_ref::<WorkflowError>();
        assert!(matches!(cause, Some(WorkflowError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_servers_start() {
        let config = AppConfig::from_yaml(
            r#"
mcp:
  servers:
    filesystem:
      command: scribe-definitely-not-installed-7c1e
model:
  model: llama3-8b-8192
  api_key_env: SCRIBE_TEST_UNSET_KEY_31D7
workflow:
  list_dir: /srv/data
  target_file: /srv/data/example.txt
"#,
        )
        .unwrap();

        let err = handle_edit(&config).await.unwrap_err();
        match err.downcast_ref::<WorkflowError>() {
            Some(WorkflowError::Configuration(message)) => {
                assert!(message.contains("SCRIBE_TEST_UNSET_KEY_31D7"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
