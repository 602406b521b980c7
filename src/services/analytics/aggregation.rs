//! Data Aggregation
//!
//! Pure aggregation helpers over fetched response and answer records:
//! means, rounding, age binning, and categorical distributions.

use std::collections::BTreeMap;

use crate::models::analytics::{QuestionStat, AGE_BUCKET_LABELS, SENTIMENT_BUCKET_LABELS, USER_TYPE_LABELS};
use crate::models::records::{Answer, Response, UserType};
use crate::services::scoring::SentimentLabel;

/// Round to 2 decimal places, half away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean; 0 when the set is empty (never NaN)
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Index of the age bucket for an age, or None when the age falls outside
/// [0, 100]. Bins are half-open on the left: (0,20], (20,30], (30,40],
/// (40,50], (50,100], with 0 included in the lowest bin.
pub fn age_bucket(age: i64) -> Option<usize> {
    match age {
        0..=20 => Some(0),
        21..=30 => Some(1),
        31..=40 => Some(2),
        41..=50 => Some(3),
        51..=100 => Some(4),
        _ => None,
    }
}

/// Counts per age bucket in `AGE_BUCKET_LABELS` order
pub fn age_distribution(responses: &[Response]) -> Vec<i64> {
    let mut counts = vec![0i64; AGE_BUCKET_LABELS.len()];
    for response in responses {
        if let Some(bucket) = age_bucket(response.age) {
            counts[bucket] += 1;
        }
    }
    counts
}

/// Counts per user type in `USER_TYPE_LABELS` order
pub fn user_type_distribution(responses: &[Response]) -> Vec<i64> {
    let mut counts = vec![0i64; USER_TYPE_LABELS.len()];
    for response in responses {
        let index = UserType::ALL
            .iter()
            .position(|ut| *ut == response.user_type)
            .unwrap_or(UserType::ALL.len() - 1);
        counts[index] += 1;
    }
    counts
}

/// Counts per sentiment label in `SENTIMENT_BUCKET_LABELS` order, derived
/// from each response's compound score
pub fn sentiment_distribution(responses: &[Response]) -> Vec<i64> {
    let mut counts = vec![0i64; SENTIMENT_BUCKET_LABELS.len()];
    for response in responses {
        let index = match SentimentLabel::from_compound(response.sentiment) {
            SentimentLabel::Positive => 0,
            SentimentLabel::Neutral => 1,
            SentimentLabel::Negative => 2,
        };
        counts[index] += 1;
    }
    counts
}

/// The last `limit` feedback texts in insertion order
pub fn recent_feedbacks(responses: &[Response], limit: usize) -> Vec<String> {
    let start = responses.len().saturating_sub(limit);
    responses[start..]
        .iter()
        .map(|r| r.feedback.clone())
        .collect()
}

/// Per-question answer statistics, sorted by question id. Questions with
/// zero answers never appear.
pub fn question_stats(answers: &[Answer]) -> Vec<QuestionStat> {
    let mut grouped: BTreeMap<&str, (i64, f64)> = BTreeMap::new();
    for answer in answers {
        let entry = grouped.entry(answer.question_id.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += answer.sentiment;
    }

    grouped
        .into_iter()
        .map(|(question_id, (count, sum))| {
            let avg = sum / count as f64;
            QuestionStat {
                question_id: question_id.to_string(),
                response_count: count,
                avg_sentiment: if avg.is_nan() { 0.0 } else { round2(avg) },
            }
        })
        .collect()
}
