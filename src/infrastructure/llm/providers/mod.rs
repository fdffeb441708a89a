//! Provider implementations for the LLM API wrapper
//!
//! Every supported provider is OpenAI-compatible; they differ only in their
//! default base URL.

mod openai;

pub use openai::chat;

use crate::domain::config::ModelConfig;
use crate::infrastructure::llm::{Error, Provider};

/// Configuration for a provider
#[derive(Clone)]
pub struct ProviderConfig {
    pub provider: Provider,
    /// API key
    pub api_key: String,
    /// Base URL, without the `/chat/completions` suffix
    pub base_url: String,
    /// Default model
    pub default_model: String,
    /// Timeout in seconds
    pub timeout: Option<u64>,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("default_model", &self.default_model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ProviderConfig {
    pub fn from_model_config(config: &ModelConfig) -> Result<Self, Error> {
        let provider = Provider::from_str(&config.provider)
            .ok_or_else(|| Error::new(&config.provider, "Unknown provider"))?;

        let api_key = match &config.api_key {
            Some(key) => key.clone(),
            None => {
                let env_var = config
                    .api_key_env
                    .as_deref()
                    .unwrap_or(provider.default_api_key_env());
                std::env::var(env_var).map_err(|e| {
                    Error::new(
                        &config.provider,
                        format!("API key env var {} not set: {}", env_var, e),
                    )
                })?
            }
        };

        let base_url = config
            .endpoint
            .clone()
            .unwrap_or_else(|| provider.default_base_url().to_string());

        Ok(Self {
            provider,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            default_model: config.model.clone(),
            timeout: config.timeout,
        })
    }
}
