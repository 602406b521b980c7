//! Analytics Models
//!
//! Data structures for aggregate statistics over stored responses and answers.

use serde::{Deserialize, Serialize};

/// Age bucket labels, in reporting order. Bins are half-open intervals
/// (0,20], (20,30], (30,40], (40,50], (50,100] with 0 included in the
/// lowest bin; ages outside [0, 100] fall into no bucket.
pub const AGE_BUCKET_LABELS: [&str; 5] = ["0-20", "21-30", "31-40", "41-50", "51+"];

/// User-type category labels, in reporting order
pub const USER_TYPE_LABELS: [&str; 3] = ["Student", "Professional", "Other"];

/// Sentiment label order used for the sentiment distribution
pub const SENTIMENT_BUCKET_LABELS: [&str; 3] = ["positive", "neutral", "negative"];

/// Per-question answer statistics. Only questions with at least one
/// answer are reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionStat {
    /// Durable question id the answers reference
    pub question_id: String,
    /// Number of answers recorded for the question
    pub response_count: i64,
    /// Mean compound sentiment of those answers, rounded to 2 decimals
    pub avg_sentiment: f64,
}

/// Aggregate statistics over all stored responses and answers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    /// Total number of stored responses
    pub total_responses: i64,
    /// Mean respondent age, rounded to 2 decimals (0 when unavailable)
    pub average_age: f64,
    /// Mean rating, rounded to 2 decimals (0 when unavailable)
    pub average_rating: f64,
    /// Mean compound sentiment, rounded to 2 decimals (0 when unavailable)
    pub average_sentiment: f64,
    /// The last 10 feedback texts in insertion order (fewer if fewer exist)
    pub recent_feedbacks: Vec<String>,
    /// Counts per age bucket, in `AGE_BUCKET_LABELS` order
    pub age_distribution: Vec<i64>,
    /// Counts per user type, in `USER_TYPE_LABELS` order
    pub user_type_distribution: Vec<i64>,
    /// Counts per sentiment label, in `SENTIMENT_BUCKET_LABELS` order
    pub sentiment_distribution: Vec<i64>,
    /// Per-question answer statistics, sorted by question id
    pub question_stats: Vec<QuestionStat>,
}
