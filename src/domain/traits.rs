//! # Domain Traits
//!
//! Abstract interfaces for the external collaborators (tool servers, LLM).
//! The pipelines only see these, so tests can swap in scripted fakes.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::errors::Result;

/// Named arguments passed to a tool call.
pub type ToolArguments = Map<String, Value>;

/// A single named operation discovered on a tool server.
#[async_trait]
pub trait ToolHandle: Send + Sync {
    fn name(&self) -> &str;

    /// Invoke the operation and return its textual result.
    async fn invoke(&self, arguments: ToolArguments) -> Result<String>;
}

/// A live connection to one tool server that must be closed explicitly.
#[async_trait]
pub trait ToolSession: Send {
    async fn call_tool(&self, name: &str, arguments: ToolArguments) -> Result<String>;

    /// Release the channel and the server process behind it.
    async fn close(&mut self) -> Result<()>;
}

/// Abstract interface for an LLM Provider
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion for a single user prompt
    async fn completion(&self, prompt: &str) -> Result<String>;
}
