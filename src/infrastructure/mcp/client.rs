use async_trait::async_trait;
use rmcp::{
    RoleClient, ServiceExt,
    model::{CallToolRequestParam, CallToolResult, RawContent},
    service::{Peer, RunningService},
    transport::{ConfigureCommandExt, TokioChildProcess},
};
use tokio::process::Command;

use crate::domain::config::ServerConfig;
use crate::domain::errors::{Result, WorkflowError};
use crate::domain::traits::{ToolArguments, ToolSession};
use crate::infrastructure::mcp::tools::McpTool;
use crate::strings::logs;

/// MCP client bound to a single tool server running as a child process.
///
/// The child and its stdio channel live as long as the client holds the
/// running service. Call [`McpClient::shutdown`] to release them; dropping the
/// client only schedules cancellation.
pub struct McpClient {
    name: String,
    service: Option<RunningService<RoleClient, ()>>,
}

impl McpClient {
    /// Spawn the server described by `config` and complete the MCP handshake.
    ///
    /// # Errors
    /// Returns a configuration error if the process cannot be started or the
    /// handshake fails.
    pub async fn spawn(name: &str, config: &ServerConfig) -> Result<Self> {
        tracing::debug!(
            server = name,
            transport = ?config.transport,
            command = %config.command,
            "Spawning MCP server"
        );

        let command = Command::new(&config.command).configure(|cmd| {
            cmd.args(&config.args);
            cmd.envs(&config.env);
            if let Some(dir) = &config.cwd {
                cmd.current_dir(dir);
            }
        });

        let transport = TokioChildProcess::new(command).map_err(|e| {
            WorkflowError::Configuration(logs::mcp_spawn_failed(name, &config.command, &e.to_string()))
        })?;

        let service = ().serve(transport).await.map_err(|e| {
            WorkflowError::Configuration(logs::mcp_handshake_failed(name, &e.to_string()))
        })?;

        if let Some(info) = service.peer_info() {
            tracing::info!(
                "{}",
                logs::mcp_connected(name, &info.server_info.name, &info.server_info.version)
            );
        }

        Ok(Self {
            name: name.to_string(),
            service: Some(service),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn peer(&self) -> Result<&Peer<RoleClient>> {
        self.service
            .as_ref()
            .map(|service| service.peer())
            .ok_or_else(|| WorkflowError::Configuration(logs::mcp_closed(&self.name)))
    }

    /// Fetch every tool the server advertises, as invocable handles.
    pub async fn tools(&self) -> Result<Vec<McpTool>> {
        let peer = self.peer()?;
        let tools = peer.list_all_tools().await.map_err(|e| {
            WorkflowError::Configuration(logs::mcp_list_tools_failed(&self.name, &e.to_string()))
        })?;

        Ok(tools
            .into_iter()
            .map(|tool| McpTool::new(tool.name.to_string(), self.name.clone(), peer.clone()))
            .collect())
    }

    /// Cancel the session and wait for the transport to wind down.
    /// Idempotent: later calls are no-ops.
    pub async fn shutdown(&mut self) -> Result<()> {
        if let Some(service) = self.service.take() {
            service.cancel().await.map_err(|e| {
                WorkflowError::Configuration(logs::mcp_shutdown_failed(&self.name, &e.to_string()))
            })?;
            tracing::debug!("{}", logs::mcp_disconnected(&self.name));
        }
        Ok(())
    }
}

#[async_trait]
impl ToolSession for McpClient {
    async fn call_tool(&self, name: &str, arguments: ToolArguments) -> Result<String> {
        call_tool(self.peer()?, name, arguments).await
    }

    async fn close(&mut self) -> Result<()> {
        self.shutdown().await
    }
}

/// Call a tool by name on an established peer and render the result as text.
pub async fn call_tool(
    peer: &Peer<RoleClient>,
    name: &str,
    arguments: ToolArguments,
) -> Result<String> {
    let result = peer
        .call_tool(CallToolRequestParam {
            name: name.to_string().into(),
            arguments: Some(arguments),
        })
        .await
        .map_err(|e| WorkflowError::remote(name, e.to_string()))?;

    render_tool_result(name, result)
}

/// Text blocks are joined with newlines. A result with no text falls back to
/// its structured content as JSON. `is_error` turns the text into an error.
pub fn render_tool_result(name: &str, result: CallToolResult) -> Result<String> {
    let text = result
        .content
        .iter()
        .filter_map(|content| match &content.raw {
            RawContent::Text(block) => Some(block.text.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n");

    if result.is_error.unwrap_or(false) {
        let message = if text.is_empty() {
            "server reported an error without details".to_string()
        } else {
            text
        };
        return Err(WorkflowError::remote(name, message));
    }

    if text.is_empty()
        && let Some(structured) = result.structured_content
    {
        return Ok(structured.to_string());
    }

    Ok(text)
}
