use std::sync::Arc;

use crate::domain::config::McpConfig;
use crate::domain::errors::{Result, WorkflowError};
use crate::domain::registry::ToolRegistry;
use crate::domain::traits::ToolHandle;
use crate::infrastructure::mcp::client::McpClient;
use crate::strings::logs;

/// Owns one client per configured tool server.
///
/// Connection is all-or-nothing: if any server fails to start, the ones
/// already running are shut down before the error is returned. Callers must
/// invoke [`McpManager::shutdown`] on every exit path once connected.
pub struct McpManager {
    clients: Vec<McpClient>,
}

impl McpManager {
    /// Connect to every server in `config`, in server-name order.
    pub async fn connect(config: &McpConfig) -> Result<Self> {
        if config.servers.is_empty() {
            return Err(WorkflowError::Configuration(
                "No MCP servers configured".to_string(),
            ));
        }

        let mut manager = Self {
            clients: Vec::with_capacity(config.servers.len()),
        };

        for (name, server) in &config.servers {
            match McpClient::spawn(name, server).await {
                Ok(client) => manager.clients.push(client),
                Err(e) => {
                    manager.shutdown().await;
                    return Err(e);
                }
            }
        }

        Ok(manager)
    }

    /// Collect every advertised tool into a registry. On a name collision the
    /// server that sorts first keeps the name.
    pub async fn discover(&self) -> Result<ToolRegistry> {
        let mut registry = ToolRegistry::new();

        for client in &self.clients {
            let tools = client
                .tools()
                .await?
                .into_iter()
                .map(|tool| Arc::new(tool) as Arc<dyn ToolHandle>);
            register_server_tools(&mut registry, client.name(), tools);
        }

        tracing::info!("{}", logs::tools_available(&registry.names()));
        Ok(registry)
    }

    pub fn server_names(&self) -> Vec<&str> {
        self.clients.iter().map(McpClient::name).collect()
    }

    /// Shut every client down. Failures are logged, not returned, so one
    /// stuck server cannot keep the others alive.
    pub async fn shutdown(&mut self) {
        for client in &mut self.clients {
            if let Err(e) = client.shutdown().await {
                tracing::warn!("{}", e);
            }
        }
        self.clients.clear();
    }
}

/// Add one server's tools to `registry`. Names already taken by an earlier
/// server are skipped with a warning; the skipped names are returned.
fn register_server_tools(
    registry: &mut ToolRegistry,
    server: &str,
    tools: impl IntoIterator<Item = Arc<dyn ToolHandle>>,
) -> Vec<String> {
    let mut shadowed = Vec::new();
    for tool in tools {
        let name = tool.name().to_string();
        if !registry.register(tool) {
            tracing::warn!("{}", logs::tool_shadowed(&name, server));
            shadowed.push(name);
        }
    }
    shadowed
}
