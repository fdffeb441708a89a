//! # LLM
//!
//! Minimal wrapper over OpenAI-compatible chat-completion APIs (OpenAI, Groq, xAI).
//!
//! ```rust,no_run
//! # async fn demo(config: &scribe::domain::config::ModelConfig) -> Result<(), Box<dyn std::error::Error>> {
//! use scribe::infrastructure::llm::Client;
//!
//! let client = Client::from_config(config)?;
//! let response = client.prompt("Hello, world!").await?;
//! println!("Response: {}", response.content);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod providers;
mod types;

pub use client::Client;

pub use types::{Context, Error, Message, MessageRole, Provider, Response, TokenUsage};
