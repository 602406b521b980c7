//! Completion Provider Trait
//!
//! Defines the common interface for all text-completion providers.

use std::sync::Arc;

use async_trait::async_trait;

use super::ollama::OllamaProvider;
use super::openai::OpenAiCompatProvider;
use super::types::{CompletionError, CompletionOptions, CompletionResult};
use crate::models::settings::{CompletionConfig, ProviderKind};

/// Trait that all completion providers must implement.
///
/// A provider turns a prompt into raw generated text. Implementations are
/// shared read-only across requests; the call may be slow and its output is
/// non-deterministic for a given prompt.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns the provider name for identification
    fn name(&self) -> &'static str;

    /// Returns the current model being used
    fn model(&self) -> &str;

    /// Generate a completion for the prompt.
    ///
    /// Returns the raw generated text; callers must treat it as an
    /// untrusted, weakly structured stream. The provider applies the
    /// requested token budget, stop sequences, and temperature, but the
    /// model may still truncate or ignore format instructions.
    async fn complete(&self, prompt: &str, options: &CompletionOptions)
        -> CompletionResult<String>;
}

/// Create a provider instance from configuration
pub fn create_provider(config: &CompletionConfig) -> Arc<dyn CompletionProvider> {
    match config.provider {
        ProviderKind::Ollama => Arc::new(OllamaProvider::new(config.clone())),
        ProviderKind::OpenAi => Arc::new(OpenAiCompatProvider::new(config.clone())),
    }
}

/// Helper function to create a "missing API key" error
pub fn missing_api_key_error(provider: &str) -> CompletionError {
    CompletionError::AuthenticationFailed {
        message: format!("API key not configured for {}", provider),
    }
}

/// Helper function to parse HTTP error status codes
pub fn parse_http_error(status: u16, body: &str, provider: &str) -> CompletionError {
    match status {
        401 => CompletionError::AuthenticationFailed {
            message: format!("{}: Invalid API key", provider),
        },
        403 => CompletionError::AuthenticationFailed {
            message: format!("{}: Access denied", provider),
        },
        404 => CompletionError::ModelNotFound {
            model: body.to_string(),
        },
        429 => CompletionError::RateLimited {
            message: body.to_string(),
        },
        400 => CompletionError::InvalidRequest {
            message: body.to_string(),
        },
        500..=599 => CompletionError::ServerError {
            message: body.to_string(),
            status: Some(status),
        },
        _ => CompletionError::Other {
            message: format!("HTTP {}: {}", status, body),
        },
    }
}
