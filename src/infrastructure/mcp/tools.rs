//! # MCP Tools
//!
//! Adapts tools advertised by an MCP server to the domain `ToolHandle` trait.

use async_trait::async_trait;
use rmcp::{RoleClient, service::Peer};

use crate::domain::errors::Result;
use crate::domain::traits::{ToolArguments, ToolHandle};
use crate::infrastructure::mcp::client;

/// One tool on one server. Holds a clone of the server's peer, so it stays
/// callable until that server's client is shut down.
#[derive(Clone)]
pub struct McpTool {
    name: String,
    server: String,
    peer: Peer<RoleClient>,
}

impl McpTool {
    pub fn new(name: String, server: String, peer: Peer<RoleClient>) -> Self {
        Self { name, server, peer }
    }
}

#[async_trait]
impl ToolHandle for McpTool {
    fn name(&self) -> &str {
        &self.name
    }

    async fn invoke(&self, arguments: ToolArguments) -> Result<String> {
        tracing::debug!(tool = %self.name, server = %self.server, "Invoking MCP tool");
        client::call_tool(&self.peer, &self.name, arguments).await
    }
}
