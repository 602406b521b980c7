//! Completion Providers
//!
//! Text-completion capability behind a common trait, with Ollama (local)
//! and OpenAI-compatible (HTTP) implementations.

pub mod ollama;
pub mod openai;
pub mod provider;
pub mod types;

pub use provider::{create_provider, CompletionProvider};
pub use types::{CompletionError, CompletionOptions, CompletionResult};
