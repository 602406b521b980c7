//! Services
//!
//! Business logic: sentiment scoring, completion providers, question
//! generation, analytics, and the survey facade.

pub mod analytics;
pub mod completion;
pub mod questions;
pub mod scoring;
pub mod survey;

pub use analytics::AnalyticsService;
pub use completion::{create_provider, CompletionProvider};
pub use questions::{GenerateQuestionsRequest, QuestionPipeline};
pub use scoring::{ScoreResult, SentimentLabel, SentimentScorer};
pub use survey::{FeedbackAnalysis, SurveyService};
