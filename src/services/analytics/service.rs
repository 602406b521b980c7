//! Analytics Service
//!
//! Computes summary statistics over all stored responses and answers.
//! Pure read over the current persisted state; the snapshot may be stale
//! by the time it returns, which is acceptable for analytics.

use tracing::{debug, warn};

use super::aggregation::{
    age_distribution, mean, question_stats, recent_feedbacks, round2, sentiment_distribution,
    user_type_distribution,
};
use crate::models::analytics::AnalyticsSummary;
use crate::storage::database::Database;
use crate::utils::error::AppResult;

/// How many of the latest feedback texts the summary carries
const RECENT_FEEDBACK_LIMIT: usize = 10;

/// Service computing aggregate statistics from the record store
pub struct AnalyticsService {
    db: Database,
}

impl AnalyticsService {
    /// Create a new analytics service
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Access the record store (shared with the export helpers)
    pub(crate) fn db(&self) -> &Database {
        &self.db
    }

    /// Compute the analytics summary.
    ///
    /// Returns `None` when zero responses exist: the distinct no-data
    /// signal, never a computed statistic over nothing.
    pub fn summary(&self) -> AppResult<Option<AnalyticsSummary>> {
        let responses = self.db.list_responses()?;
        if responses.is_empty() {
            warn!("No responses found for analytics");
            return Ok(None);
        }

        let answers = self.db.find_answers(None)?;

        let ages: Vec<f64> = responses.iter().map(|r| r.age as f64).collect();
        let ratings: Vec<f64> = responses.iter().map(|r| r.rating as f64).collect();
        let sentiments: Vec<f64> = responses.iter().map(|r| r.sentiment).collect();

        let summary = AnalyticsSummary {
            total_responses: responses.len() as i64,
            average_age: round2(mean(&ages)),
            average_rating: round2(mean(&ratings)),
            average_sentiment: round2(mean(&sentiments)),
            recent_feedbacks: recent_feedbacks(&responses, RECENT_FEEDBACK_LIMIT),
            age_distribution: age_distribution(&responses),
            user_type_distribution: user_type_distribution(&responses),
            sentiment_distribution: sentiment_distribution(&responses),
            question_stats: question_stats(&answers),
        };

        debug!(
            total_responses = summary.total_responses,
            answered_questions = summary.question_stats.len(),
            "Analytics summary prepared"
        );

        Ok(Some(summary))
    }
}
