//! Settings Models
//!
//! Persisted application configuration: which completion provider to use
//! and how to reach it.

use serde::{Deserialize, Serialize};

/// Supported completion provider kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Local inference through an Ollama server
    Ollama,
    /// Any OpenAI-compatible completions endpoint
    OpenAi,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Ollama => write!(f, "ollama"),
            ProviderKind::OpenAi => write!(f, "openai"),
        }
    }
}

/// Configuration for the completion provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// The provider kind
    pub provider: ProviderKind,
    /// API key (not needed for Ollama)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL override (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Model name to use
    pub model: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Ollama,
            api_key: None,
            base_url: None,
            model: "llama2".to_string(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Completion provider settings
    #[serde(default)]
    pub completion: CompletionConfig,
}

impl AppConfig {
    /// Validate the configuration, returning a message on failure
    pub fn validate(&self) -> Result<(), String> {
        if self.completion.model.trim().is_empty() {
            return Err("completion.model must not be empty".to_string());
        }
        if let Some(url) = &self.completion.base_url {
            if url::Url::parse(url).is_err() {
                return Err(format!("completion.base_url is not a valid URL: {}", url));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_model_rejected() {
        let mut config = AppConfig::default();
        config.completion.model = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let mut config = AppConfig::default();
        config.completion.base_url = Some("not a url".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_provider_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ProviderKind::OpenAi).unwrap();
        assert_eq!(json, "\"openai\"");
    }
}
