//! Question Pipeline Integration Tests
//!
//! Tests for the complete generation pipeline: prompt, completion, parsing,
//! transient-id assignment, transactional persistence, and durable-id
//! relabeling.

use std::sync::Arc;

use survey_pulse::services::completion::CompletionError;
use survey_pulse::services::questions::{GenerateQuestionsRequest, QuestionPipeline};
use survey_pulse::storage::Database;
use survey_pulse::utils::error::AppError;

use crate::support::ScriptedProvider;

// ============================================================================
// Helpers
// ============================================================================

fn pipeline_with(provider: ScriptedProvider) -> (QuestionPipeline, Database) {
    let db = Database::new_in_memory().unwrap();
    let pipeline = QuestionPipeline::new(Arc::new(provider), db.clone());
    (pipeline, db)
}

fn request() -> GenerateQuestionsRequest {
    GenerateQuestionsRequest {
        domain: "online retail".to_string(),
        feedback: "Checkout was confusing".to_string(),
        survey_id: "survey-1".to_string(),
        response_id: "response-1".to_string(),
    }
}

// ============================================================================
// Generation and persistence
// ============================================================================

#[tokio::test]
async fn test_generate_persists_parsed_questions_in_order() {
    let raw = "1. How was the checkout flow?\n2) What would make it clearer?\n3. Would you shop again?\n\n";
    let (pipeline, db) = pipeline_with(ScriptedProvider::returning(raw));

    let generated = pipeline.generate(&request()).await.unwrap();
    assert_eq!(generated.len(), 3);
    assert_eq!(generated[0].question, "How was the checkout flow?");
    assert_eq!(generated[1].question, "What would make it clearer?");
    assert_eq!(generated[2].question, "Would you shop again?");

    // Returned ids are the durable storage ids, usable across requests
    let stored = db.find_questions(Some("survey-1")).unwrap();
    assert_eq!(stored.len(), 3);
    for (returned, record) in generated.iter().zip(&stored) {
        assert_eq!(returned.id, record.id);
        assert_eq!(returned.question, record.question);
        assert_eq!(record.response_id, "response-1");
        assert_eq!(record.domain, "online retail");
    }
}

#[tokio::test]
async fn test_generated_ids_are_unique_across_invocations() {
    let raw = "1. How was it?";
    let (pipeline, _db) = pipeline_with(ScriptedProvider::returning(raw));

    let first = pipeline.generate(&request()).await.unwrap();
    let second = pipeline.generate(&request()).await.unwrap();
    assert_ne!(first[0].id, second[0].id);
}

#[tokio::test]
async fn test_duplicate_questions_pass_through_unchanged() {
    let raw = "1. Anything else?\n2. Anything else?";
    let (pipeline, db) = pipeline_with(ScriptedProvider::returning(raw));

    let generated = pipeline.generate(&request()).await.unwrap();
    assert_eq!(generated.len(), 2);
    assert_eq!(generated[0].question, generated[1].question);
    assert_ne!(generated[0].id, generated[1].id);
    assert_eq!(db.find_questions(None).unwrap().len(), 2);
}

#[tokio::test]
async fn test_malformed_numbering_is_tolerated() {
    let raw = "  7)   Why the rating?   \n...\n- Final thoughts?\n\nignored after stop";
    let (pipeline, _db) = pipeline_with(ScriptedProvider::returning(raw));

    let generated = pipeline.generate(&request()).await.unwrap();
    let texts: Vec<&str> = generated.iter().map(|q| q.question.as_str()).collect();
    assert_eq!(
        texts,
        vec!["Why the rating?", "Final thoughts?", "ignored after stop"]
    );
}

// ============================================================================
// Edge cases and failures
// ============================================================================

#[tokio::test]
async fn test_blank_completion_yields_empty_list_not_error() {
    let (pipeline, db) = pipeline_with(ScriptedProvider::returning("\n\n   \n"));

    let generated = pipeline.generate(&request()).await.unwrap();
    assert!(generated.is_empty());
    assert!(db.find_questions(None).unwrap().is_empty());
}

#[tokio::test]
async fn test_marker_only_completion_yields_empty_list() {
    let (pipeline, db) = pipeline_with(ScriptedProvider::returning("1.\n2)\n3."));

    let generated = pipeline.generate(&request()).await.unwrap();
    assert!(generated.is_empty());
    assert!(db.find_questions(None).unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_feedback_still_generates() {
    let raw = "1. What prompted you to leave no comment?";
    let (pipeline, _db) = pipeline_with(ScriptedProvider::returning(raw));

    let mut req = request();
    req.feedback = String::new();
    let generated = pipeline.generate(&req).await.unwrap();
    assert_eq!(generated.len(), 1);
}

#[tokio::test]
async fn test_provider_failure_surfaces_as_upstream_error() {
    let (pipeline, db) = pipeline_with(ScriptedProvider::failing(
        CompletionError::ProviderUnavailable {
            message: "connection refused".to_string(),
        },
    ));

    let err = pipeline.generate(&request()).await.unwrap_err();
    assert!(matches!(err, AppError::Upstream(_)));
    assert!(db.find_questions(None).unwrap().is_empty());
}
