//! HTTP client for OpenAI-compatible chat completion APIs
//!
//! Works against anything speaking the `/chat/completions` format: a local
//! server, OpenAI itself, or a proxy. The request is bounded by a timeout
//! and every transport or format problem surfaces as `CoachError::Llm`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::core::config::LLM_TIMEOUT_SECS;
use crate::core::error::{CoachError, Result};
use crate::llm::{ChatMessage, LanguageModel};

pub struct OpenAiCompatClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl OpenAiCompatClient {
    pub fn new(base_url: String, model: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(LLM_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
        }
    }

    /// Create a client from environment variables
    ///
    /// Optional: LLM_BASE_URL (defaults to a local server)
    /// Optional: LLM_MODEL
    /// Optional: LLM_API_KEY (local servers usually ignore it)
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("LLM_BASE_URL").unwrap_or_else(|_| "http://localhost:8000/v1".into());
        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| "local-model".into());
        let api_key = std::env::var("LLM_API_KEY").unwrap_or_default();
        Self::new(base_url, model, api_key)
    }
}

#[async_trait]
impl LanguageModel for OpenAiCompatClient {
    async fn generate(&self, messages: &[ChatMessage], temperature: f32) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.to_string(),
                    content: m.content.clone(),
                })
                .collect(),
            temperature,
        };

        let mut builder = self.client.post(&url).json(&request);
        if !self.api_key.is_empty() {
            builder = builder.header("Authorization", format!("Bearer {}", self.api_key));
        }

        let response = builder
            .send()
            .await
            .map_err(|e| CoachError::Llm(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CoachError::Llm(format!("API error {status}: {body}")));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| CoachError::Llm(e.to_string()))?;

        completion
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| CoachError::Llm("empty response".into()))
    }
}

#[derive(Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_strips_trailing_slash() {
        let client = OpenAiCompatClient::new(
            "http://localhost:8000/v1/".into(),
            "test-model".into(),
            String::new(),
        );
        assert_eq!(client.base_url, "http://localhost:8000/v1");
        assert_eq!(client.model, "test-model");
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{"choices": [{"message": {"content": "Расскажи про индексы?"}}]}"#;
        let parsed: CompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Расскажи про индексы?");
    }
}
