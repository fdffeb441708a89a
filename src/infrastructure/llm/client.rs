//! # LLM Client
//!
//! Provides the `Client` struct, the entry point for LLM interactions. It owns a
//! reusable HTTP client and the resolved provider settings.

use async_trait::async_trait;

use crate::domain::config::ModelConfig;
use crate::domain::errors::{Result as WorkflowResult, WorkflowError};
use crate::domain::traits::LlmProvider;
use crate::infrastructure::llm::providers::{self, ProviderConfig};
use crate::infrastructure::llm::{Context, Error, Response};

/// Simple LLM client
pub struct Client {
    http: reqwest::Client,
    provider: ProviderConfig,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl Client {
    /// Build a client from the `model` section of the configuration.
    ///
    /// Fails with a configuration error if the provider is unknown or the API
    /// key cannot be resolved.
    pub fn from_config(config: &ModelConfig) -> WorkflowResult<Self> {
        let provider = ProviderConfig::from_model_config(config)
            .map_err(|e| WorkflowError::Configuration(e.to_string()))?;
        let http = reqwest::Client::builder().build().map_err(|e| {
            WorkflowError::Configuration(format!(
                "[{}] Failed to create HTTP client: {}",
                provider.provider.as_str(),
                e
            ))
        })?;

        Ok(Self {
            http,
            provider,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    pub fn provider_config(&self) -> &ProviderConfig {
        &self.provider
    }

    /// Send a single user prompt with the configured model.
    pub async fn prompt(&self, prompt: &str) -> Result<Response, Error> {
        let context = Context::prompt(prompt)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens);
        self.chat(context).await
    }

    /// Send a chat request with full context
    pub async fn chat(&self, context: Context) -> Result<Response, Error> {
        providers::chat(&self.http, &self.provider, context).await
    }
}

#[async_trait]
impl LlmProvider for Client {
    async fn completion(&self, prompt: &str) -> WorkflowResult<String> {
        let response = self
            .prompt(prompt)
            .await
            .map_err(|e| WorkflowError::ModelRequest(e.to_string()))?;

        tracing::debug!(
            model = %response.model,
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            "Model responded"
        );

        Ok(response.content)
    }
}
