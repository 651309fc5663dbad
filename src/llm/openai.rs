//! OpenAI-compatible text generation provider.
//!
//! Works against the OpenAI API and compatible gateways (OpenRouter,
//! OneAPI, self-hosted proxies) via the chat-completions endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::TextGenerator;
use crate::error::{DomainHunterError, Result};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI-compatible provider
pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiGenerator {
    pub fn new(api_key: String, model: String, base_url: Option<String>) -> Result<Self> {
        if api_key.is_empty() {
            return Err(DomainHunterError::config("OpenAI API key is required"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| DomainHunterError::network(e.to_string(), None, None))?;

        Ok(Self {
            client,
            api_key,
            model,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    /// Join the base URL and endpoint, tolerating bases with or without /v1
    fn build_url(&self, endpoint: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.ends_with("/v1") {
            format!("{}{}", base, endpoint)
        } else {
            format!("{}/v1{}", base, endpoint)
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: "You suggest domain names. Reply with plain text only, one name per line."
                        .to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            temperature: 0.8,
            max_tokens: 1000,
        };

        let url = self.build_url("/chat/completions");
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                DomainHunterError::network(
                    format!("Failed to reach API: {}", e),
                    None,
                    Some(url.clone()),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            let message = match status.as_u16() {
                401 => "Authentication failed (401); check the API key".to_string(),
                429 => "Rate limit exceeded (429); try again later".to_string(),
                500..=599 => format!("Server error ({}); the API is having issues", status),
                _ => format!("API request failed ({}): {}", status, body),
            };
            return Err(DomainHunterError::network(
                message,
                Some(status.as_u16()),
                Some(url),
            ));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| DomainHunterError::parse(e.to_string(), None))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| DomainHunterError::generation("API returned no choices"))
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}
