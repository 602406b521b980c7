//! Survey Flow Integration Tests
//!
//! Full-service scenarios: response submission with scoring, follow-up
//! question generation, answer submission against durable ids, analytics
//! aggregation, and CSV export.

use std::sync::Arc;

use survey_pulse::models::records::{NewAnswer, NewResponse};
use survey_pulse::services::questions::GenerateQuestionsRequest;
use survey_pulse::services::scoring::SentimentScorer;
use survey_pulse::services::survey::SurveyService;
use survey_pulse::storage::Database;
use survey_pulse::utils::error::AppError;

use crate::support::ScriptedProvider;

// ============================================================================
// Helpers
// ============================================================================

fn service_with(provider: ScriptedProvider) -> SurveyService {
    SurveyService::new(
        Database::new_in_memory().unwrap(),
        Arc::new(SentimentScorer::new()),
        Arc::new(provider),
    )
}

fn ana_response() -> NewResponse {
    NewResponse {
        name: "Ana".to_string(),
        age: 34,
        feedback: "I loved the product but support was slow".to_string(),
        rating: 4,
        user_type: "Professional".to_string(),
        survey_id: None,
    }
}

// ============================================================================
// No-data signals
// ============================================================================

#[test]
fn test_analytics_no_data_signal_before_any_response() {
    let service = service_with(ScriptedProvider::returning(""));
    assert!(service.analytics().unwrap().is_none());
    assert!(service.export_responses_csv().unwrap().is_none());
}

// ============================================================================
// End-to-end response scenario
// ============================================================================

#[test]
fn test_submit_response_end_to_end() {
    let service = service_with(ScriptedProvider::returning(""));

    let receipt = service.submit_response(ana_response()).unwrap();
    assert!(!receipt.response_id.is_empty());
    assert!(receipt.sentiment > 0.05);

    let summary = service.analytics().unwrap().unwrap();
    assert_eq!(summary.total_responses, 1);
    // Age 34 lands in the "31-40" bucket (index 2)
    assert_eq!(summary.age_distribution, vec![0, 0, 1, 0, 0]);
    // Professional is the second user-type bucket
    assert_eq!(summary.user_type_distribution, vec![0, 1, 0]);
    assert_eq!(summary.sentiment_distribution, vec![1, 0, 0]);
    assert_eq!(
        summary.recent_feedbacks,
        vec!["I loved the product but support was slow".to_string()]
    );

    let csv = service.export_responses_csv().unwrap().unwrap();
    assert!(csv.lines().count() == 2);
    assert!(csv.contains("Ana,34,"));
}

// ============================================================================
// Question and answer flow
// ============================================================================

#[tokio::test]
async fn test_question_answer_round_trip() {
    let raw = "1. How was it?\n2) Anything else?\n\n";
    let service = service_with(ScriptedProvider::returning(raw));

    let survey = service.create_survey("Product feedback").unwrap();
    let receipt = service.submit_response(ana_response()).unwrap();

    let generated = service
        .generate_questions(GenerateQuestionsRequest {
            domain: "retail".to_string(),
            feedback: "I loved the product but support was slow".to_string(),
            survey_id: survey.id.clone(),
            response_id: receipt.response_id.clone(),
        })
        .await
        .unwrap();
    assert_eq!(generated.len(), 2);

    // Questions are retrievable by survey with the same durable ids
    let listed = service.list_questions(Some(&survey.id)).unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, generated[0].id);
    assert_eq!(listed[0].question, "How was it?");

    // Answer attaches to the durable question id with its own score
    let answer_receipt = service
        .submit_answer(NewAnswer {
            answer: "The checkout was terrible".to_string(),
            question_id: generated[0].id.clone(),
            response_id: receipt.response_id.clone(),
        })
        .unwrap();
    assert!(answer_receipt.sentiment < -0.05);

    let answers = service.list_answers(Some(&receipt.response_id)).unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].question_id, generated[0].id);

    // Analytics now reports stats for the answered question only
    let summary = service.analytics().unwrap().unwrap();
    assert_eq!(summary.question_stats.len(), 1);
    assert_eq!(summary.question_stats[0].question_id, generated[0].id);
    assert_eq!(summary.question_stats[0].response_count, 1);
}

#[test]
fn test_answer_against_unknown_question_rejected() {
    let service = service_with(ScriptedProvider::returning(""));

    let err = service
        .submit_answer(NewAnswer {
            answer: "Fine".to_string(),
            question_id: "transient-or-bogus".to_string(),
            response_id: "r1".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(service.list_answers(None).unwrap().is_empty());
}

// ============================================================================
// Surveys
// ============================================================================

#[test]
fn test_surveys_listed_in_creation_order() {
    let service = service_with(ScriptedProvider::returning(""));

    let first = service.create_survey("First").unwrap();
    let second = service.create_survey("Second").unwrap();

    let surveys = service.list_surveys().unwrap();
    assert_eq!(surveys.len(), 2);
    assert_eq!(surveys[0].id, first.id);
    assert_eq!(surveys[1].id, second.id);
}

#[test]
fn test_live_analysis_matches_distribution_labels() {
    let service = service_with(ScriptedProvider::returning(""));

    let analysis = service.analyze_feedback("I loved the product but support was slow");
    assert_eq!(analysis.sentiment.as_str(), "positive");

    let receipt = service.submit_response(ana_response()).unwrap();
    assert!((analysis.polarity - receipt.sentiment).abs() < 1e-12);
}
