//! # Infrastructure Layer
//!
//! Handles interactions with external systems: MCP tool servers and the LLM API.
//! Implements the traits defined in the Domain layer (`ToolHandle`, `ToolSession`, `LlmProvider`).

pub mod llm;
pub mod mcp;
