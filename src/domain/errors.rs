//! # Errors
//!
//! The failure taxonomy shared by both pipelines. Every variant is fatal:
//! nothing in this crate retries or recovers, the error is logged and
//! propagated to `main`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkflowError {
    /// Missing or invalid configuration, unreachable tool server, missing credential.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A named operation is absent from the discovered tool set.
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// The tool server rejected a call, or the transport to it failed.
    #[error("Tool '{tool}' failed: {message}")]
    RemoteOperation { tool: String, message: String },

    /// The language-model request failed.
    #[error("Model request failed: {0}")]
    ModelRequest(String),

    /// Workflow state was written twice or read before it was written.
    #[error("Workflow state error: {0}")]
    State(String),
}

impl WorkflowError {
    pub fn remote(tool: &str, message: impl Into<String>) -> Self {
        WorkflowError::RemoteOperation {
            tool: tool.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WorkflowError>;
