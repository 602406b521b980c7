//! Completion Types
//!
//! Core types for text-completion provider interactions.

use serde::{Deserialize, Serialize};

use crate::utils::error::AppError;

/// Per-request sampling options for a completion call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionOptions {
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
    /// Stop sequences that terminate generation
    pub stop: Vec<String>,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            max_tokens: 300,
            temperature: 0.7,
            stop: vec!["\n\n".to_string()],
        }
    }
}

/// Errors from a completion provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CompletionError {
    /// Authentication failed (invalid API key)
    AuthenticationFailed { message: String },
    /// Rate limit exceeded
    RateLimited { message: String },
    /// Model not found or not available
    ModelNotFound { model: String },
    /// Invalid request (bad parameters)
    InvalidRequest { message: String },
    /// Server error from the provider
    ServerError { message: String, status: Option<u16> },
    /// Network/connection error
    NetworkError { message: String },
    /// Response parsing error
    ParseError { message: String },
    /// Provider not available (e.g., Ollama not running)
    ProviderUnavailable { message: String },
    /// Other error
    Other { message: String },
}

impl std::fmt::Display for CompletionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompletionError::AuthenticationFailed { message } => {
                write!(f, "Authentication failed: {}", message)
            }
            CompletionError::RateLimited { message } => write!(f, "Rate limited: {}", message),
            CompletionError::ModelNotFound { model } => write!(f, "Model not found: {}", model),
            CompletionError::InvalidRequest { message } => {
                write!(f, "Invalid request: {}", message)
            }
            CompletionError::ServerError { message, status } => match status {
                Some(code) => write!(f, "Server error ({}): {}", code, message),
                None => write!(f, "Server error: {}", message),
            },
            CompletionError::NetworkError { message } => write!(f, "Network error: {}", message),
            CompletionError::ParseError { message } => write!(f, "Parse error: {}", message),
            CompletionError::ProviderUnavailable { message } => {
                write!(f, "Provider unavailable: {}", message)
            }
            CompletionError::Other { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CompletionError {}

/// Convert provider failures into the crate-wide upstream error
impl From<CompletionError> for AppError {
    fn from(err: CompletionError) -> Self {
        AppError::upstream(err.to_string())
    }
}

/// Result type for completion operations
pub type CompletionResult<T> = Result<T, CompletionError>;
