//! OpenAI-compatible API provider
//!
//! Supports OpenAI, Groq, xAI and any other `/chat/completions` endpoint.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::ProviderConfig;
use crate::infrastructure::llm::{Context, Error, Response, TokenUsage};

/// OpenAI API request format
#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

/// OpenAI API response format
#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    #[serde(default)]
    model: String,
    choices: Vec<OpenAIChoice>,
    #[serde(default)]
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

fn build_request(config: &ProviderConfig, context: Context) -> OpenAIRequest {
    OpenAIRequest {
        model: config.default_model.clone(),
        messages: context
            .messages
            .into_iter()
            .map(|msg| OpenAIMessage {
                role: msg.role.as_str().to_string(),
                content: msg.content,
            })
            .collect(),
        temperature: context.temperature,
        max_tokens: context.max_tokens,
    }
}

fn parse_response(provider: &str, body: OpenAIResponse) -> Result<Response, Error> {
    let choice = body
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| Error::new(provider, "No choices in response"))?;

    let usage = body
        .usage
        .map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        })
        .unwrap_or_default();

    Ok(Response {
        content: choice.message.content.unwrap_or_default(),
        model: body.model,
        usage,
    })
}

/// Pull `error.message` out of an error body, if it has one.
fn error_message(body: &str) -> Option<String> {
    let json = serde_json::from_str::<serde_json::Value>(body).ok()?;
    json.get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

/// Execute a chat request using an OpenAI-compatible API
pub async fn chat(
    http: &Client,
    config: &ProviderConfig,
    context: Context,
) -> Result<Response, Error> {
    let provider = config.provider.as_str();
    let url = format!("{}/chat/completions", config.base_url);
    let request = build_request(config, context);

    let mut request_builder = http
        .post(&url)
        .header("Authorization", format!("Bearer {}", config.api_key))
        .header("Content-Type", "application/json")
        .json(&request);

    if let Some(timeout_secs) = config.timeout {
        request_builder = request_builder.timeout(std::time::Duration::from_secs(timeout_secs));
    }

    let response = request_builder
        .send()
        .await
        .map_err(|e| Error::new(provider, format!("HTTP request failed: {}", e)))?;

    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error response".to_string());

        if let Some(message) = error_message(&error_text) {
            return Err(Error::new(provider, format!("HTTP {}: {}", status, message)));
        }

        return Err(Error::new(
            provider,
            format!("HTTP {}: {}", status, error_text),
        ));
    }

    let body: OpenAIResponse = response
        .json()
        .await
        .map_err(|e| Error::new(provider, format!("Failed to parse response: {}", e)))?;

    parse_response(provider, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::llm::Provider;

    fn config() -> ProviderConfig {
        ProviderConfig {
            provider: Provider::Groq,
            api_key: "sk-test".to_string(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            default_model: "llama3-8b-8192".to_string(),
            timeout: None,
        }
    }

    #[test]
    fn test_request_uses_configured_model() {
        let request = build_request(&config(), Context::prompt("Teh cat sat."));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "llama3-8b-8192",
                "messages": [{ "role": "user", "content": "Teh cat sat." }]
            })
        );
    }

    #[test]
    fn test_request_sampling_settings() {
        let context = Context::prompt("hi")
            .with_temperature(Some(0.0))
            .with_max_tokens(Some(256));
        let json = serde_json::to_value(build_request(&config(), context)).unwrap();
        assert_eq!(json["model"], "llama3-8b-8192");
        assert_eq!(json["temperature"], 0.0);
        assert_eq!(json["max_tokens"], 256);
    }

    #[test]
    fn test_parse_first_choice() {
        let body: OpenAIResponse = serde_json::from_str(
            r#"{
                "id": "chatcmpl-1",
                "object": "chat.completion",
                "model": "llama3-8b-8192",
                "choices": [
                    { "index": 0, "message": { "role": "assistant", "content": "The cat sat." }, "finish_reason": "stop" },
                    { "index": 1, "message": { "role": "assistant", "content": "ignored" }, "finish_reason": "stop" }
                ],
                "usage": { "prompt_tokens": 30, "completion_tokens": 4, "total_tokens": 34 }
            }"#,
        )
        .unwrap();

        let response = parse_response("groq", body).unwrap();
        assert_eq!(response.content, "The cat sat.");
        assert_eq!(response.model, "llama3-8b-8192");
        assert_eq!(response.usage.total_tokens, 34);
    }

    #[test]
    fn test_parse_without_usage_or_content() {
        let body: OpenAIResponse = serde_json::from_str(
            r#"{ "choices": [ { "message": { "role": "assistant", "content": null } } ] }"#,
        )
        .unwrap();
        let response = parse_response("groq", body).unwrap();
        assert_eq!(response.content, "");
        assert_eq!(response.usage.total_tokens, 0);
    }

    #[test]
    fn test_parse_no_choices() {
        let body: OpenAIResponse = serde_json::from_str(r#"{ "choices": [] }"#).unwrap();
        let err = parse_response("groq", body).unwrap_err();
        assert_eq!(err.to_string(), "[groq] No choices in response");
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error"}}"#),
            Some("Invalid API Key".to_string())
        );
        assert_eq!(error_message("<html>bad gateway</html>"), None);
    }
}
