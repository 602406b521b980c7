//! OpenAI-Compatible Provider
//!
//! Implementation of the CompletionProvider trait for any service exposing
//! an OpenAI-compatible `/completions` endpoint.

use async_trait::async_trait;
use serde::Deserialize;

use super::provider::{missing_api_key_error, parse_http_error, CompletionProvider};
use super::types::{CompletionError, CompletionOptions, CompletionResult};
use crate::models::settings::CompletionConfig;

/// Default OpenAI completions endpoint
const OPENAI_API_URL: &str = "https://api.openai.com/v1/completions";

/// OpenAI-compatible completion provider
pub struct OpenAiCompatProvider {
    config: CompletionConfig,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct CompletionsResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

impl OpenAiCompatProvider {
    /// Create a new provider with the given configuration
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Get the API base URL
    fn base_url(&self) -> &str {
        self.config.base_url.as_deref().unwrap_or(OPENAI_API_URL)
    }

    /// Build the request body for the API
    fn build_request_body(&self, prompt: &str, options: &CompletionOptions) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "prompt": prompt,
            "max_tokens": options.max_tokens,
            "temperature": options.temperature,
            "stop": options.stop,
            "stream": false,
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompatProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> CompletionResult<String> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| missing_api_key_error("openai"))?;

        let body = self.build_request_body(prompt, options);

        let response = self
            .client
            .post(self.base_url())
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body_text = response
            .text()
            .await
            .map_err(|e| CompletionError::NetworkError {
                message: e.to_string(),
            })?;

        if status != 200 {
            return Err(parse_http_error(status, &body_text, "openai"));
        }

        let parsed: CompletionsResponse =
            serde_json::from_str(&body_text).map_err(|e| CompletionError::ParseError {
                message: format!("Failed to parse response: {}", e),
            })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text)
            .ok_or_else(|| CompletionError::ParseError {
                message: "Response contained no choices".to_string(),
            })
    }
}
