//! Survey Pulse
//!
//! Collects free-text survey feedback, scores it for sentiment and emotion,
//! generates adaptive follow-up questions with a language model, and
//! aggregates results into analytics. The library includes:
//! - Business logic services (scoring, question generation, analytics)
//! - Storage layer (SQLite record store, JSON config)
//! - Data models and utilities

pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

pub use models::records::{
    Answer, GeneratedQuestion, NewAnswer, NewResponse, Question, Response, Survey, UserType,
};
pub use models::analytics::AnalyticsSummary;
pub use models::settings::{AppConfig, CompletionConfig, ProviderKind};
pub use services::{
    create_provider, CompletionProvider, FeedbackAnalysis, GenerateQuestionsRequest,
    SentimentLabel, SentimentScorer, SurveyService,
};
pub use storage::{ConfigService, Database};
pub use utils::error::{AppError, AppResult};
