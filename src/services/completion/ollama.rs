//! Ollama Provider
//!
//! Implementation of the CompletionProvider trait for Ollama local
//! inference using the ollama-rs native SDK. Supports local model
//! inference without API keys.

use async_trait::async_trait;
use ollama_rs::generation::completion::request::GenerationRequest;
use ollama_rs::models::ModelOptions;
use ollama_rs::Ollama;

use super::provider::CompletionProvider;
use super::types::{CompletionError, CompletionOptions, CompletionResult};
use crate::models::settings::CompletionConfig;

/// Default Ollama API endpoint
const OLLAMA_DEFAULT_URL: &str = "http://localhost:11434";

/// Ollama provider for local inference using the native ollama-rs SDK
pub struct OllamaProvider {
    config: CompletionConfig,
    client: Ollama,
}

impl OllamaProvider {
    /// Create a new Ollama provider with the given configuration
    pub fn new(config: CompletionConfig) -> Self {
        let base_url = config.base_url.as_deref().unwrap_or(OLLAMA_DEFAULT_URL);
        let client = Self::create_client(base_url);

        Self { config, client }
    }

    /// Create an Ollama SDK client from a base URL string.
    ///
    /// Parses the URL to extract host and port for `Ollama::new()`.
    /// Falls back to `Ollama::default()` if parsing fails.
    fn create_client(base_url: &str) -> Ollama {
        if let Ok(parsed) = url::Url::parse(base_url) {
            let scheme = parsed.scheme();
            let host = parsed.host_str().unwrap_or("localhost");
            let port = parsed.port().unwrap_or(11434);
            // Reconstruct the host URL without port (Ollama::new takes them separately)
            let host_url = format!("{}://{}", scheme, host);
            Ollama::new(host_url, port)
        } else {
            Ollama::default()
        }
    }

    /// Get the base URL for the Ollama server (used in error messages)
    fn base_url(&self) -> &str {
        self.config.base_url.as_deref().unwrap_or(OLLAMA_DEFAULT_URL)
    }
}

#[async_trait]
impl CompletionProvider for OllamaProvider {
    fn name(&self) -> &'static str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> CompletionResult<String> {
        let model_options = ModelOptions::default()
            .temperature(options.temperature)
            .num_predict(options.max_tokens as i32)
            .stop(options.stop.clone());

        let request = GenerationRequest::new(self.config.model.clone(), prompt.to_string())
            .options(model_options);

        let response =
            self.client
                .generate(request)
                .await
                .map_err(|e| CompletionError::ProviderUnavailable {
                    message: format!("Ollama at {}: {}", self.base_url(), e),
                })?;

        Ok(response.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_reports_configured_model() {
        let config = CompletionConfig {
            model: "mistral".to_string(),
            ..CompletionConfig::default()
        };
        let provider = OllamaProvider::new(config);
        assert_eq!(provider.name(), "ollama");
        assert_eq!(provider.model(), "mistral");
    }

    #[test]
    fn test_base_url_defaults_to_localhost() {
        let provider = OllamaProvider::new(CompletionConfig::default());
        assert_eq!(provider.base_url(), OLLAMA_DEFAULT_URL);
    }
}
