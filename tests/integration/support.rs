//! Test Support
//!
//! Scripted completion provider standing in for a real model.

use async_trait::async_trait;

use survey_pulse::services::completion::{
    CompletionError, CompletionOptions, CompletionProvider, CompletionResult,
};

/// Provider returning a fixed scripted result for every call
pub struct ScriptedProvider {
    result: CompletionResult<String>,
}

impl ScriptedProvider {
    /// Provider that always succeeds with the given raw completion text
    pub fn returning(raw: &str) -> Self {
        Self {
            result: Ok(raw.to_string()),
        }
    }

    /// Provider that always fails with the given error
    pub fn failing(error: CompletionError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(
        &self,
        _prompt: &str,
        _options: &CompletionOptions,
    ) -> CompletionResult<String> {
        self.result.clone()
    }
}
