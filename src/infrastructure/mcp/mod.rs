//! # MCP Module
//!
//! Model Context Protocol client side: spawning tool servers over stdio,
//! discovering their tools, and calling them by name.

pub mod client;
pub mod manager;
pub mod tools;

pub use client::McpClient;
pub use manager::McpManager;
pub use tools::McpTool;
