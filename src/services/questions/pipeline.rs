//! Question-Generation Pipeline
//!
//! Turns (domain, feedback) into a bounded, ordered list of follow-up
//! questions with durable identifiers: build prompt, call the completion
//! provider, parse defensively, assign transient ids, then persist in a
//! single transaction and relabel with the store's durable ids.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::parser::parse_questions;
use super::prompt::build_prompt;
use crate::models::records::{DraftQuestion, GeneratedQuestion};
use crate::services::completion::{CompletionOptions, CompletionProvider};
use crate::storage::database::{Database, NewQuestionRecord};
use crate::utils::error::AppResult;

/// Request to generate follow-up questions for a response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateQuestionsRequest {
    /// Free-text domain the feedback was given in
    pub domain: String,
    /// The feedback to probe further
    pub feedback: String,
    /// Survey the questions belong to
    pub survey_id: String,
    /// Response that triggered the generation
    pub response_id: String,
}

/// Assign a fresh transient id to each parsed question.
///
/// Transient ids give callers a handle on the questions even if
/// persistence is skipped or fails; they are never used for lookups once
/// durable ids exist.
pub fn assign_transient_ids(texts: Vec<String>) -> Vec<DraftQuestion> {
    texts
        .into_iter()
        .map(|text| DraftQuestion {
            transient_id: Uuid::new_v4().to_string(),
            text,
        })
        .collect()
}

/// Pipeline orchestrating generation, parsing, and persistence
pub struct QuestionPipeline {
    provider: Arc<dyn CompletionProvider>,
    db: Database,
}

impl QuestionPipeline {
    /// Create a new pipeline with a completion provider and record store
    pub fn new(provider: Arc<dyn CompletionProvider>, db: Database) -> Self {
        Self { provider, db }
    }

    /// Generate, parse, and persist follow-up questions.
    ///
    /// Returns the persisted questions with their durable ids, in the
    /// order the model produced them. A completion that yields zero usable
    /// lines returns an empty list and persists nothing. Persistence is
    /// atomic: a partial failure stores no questions and reports an error.
    pub async fn generate(
        &self,
        request: &GenerateQuestionsRequest,
    ) -> AppResult<Vec<GeneratedQuestion>> {
        let prompt = build_prompt(&request.domain, &request.feedback);

        debug!(
            domain = %request.domain,
            provider = self.provider.name(),
            model = self.provider.model(),
            "Generating follow-up questions"
        );

        let raw = self
            .provider
            .complete(&prompt, &CompletionOptions::default())
            .await
            .map_err(|e| {
                warn!(error = %e, "Completion provider failed");
                e
            })?;

        let drafts = assign_transient_ids(parse_questions(&raw));
        if drafts.is_empty() {
            info!("Completion yielded no usable question lines");
            return Ok(Vec::new());
        }

        let stored = self.persist(request, &drafts)?;
        info!(count = stored.len(), "Stored generated questions");
        Ok(stored)
    }

    /// Persist drafts transactionally and replace transient ids with the
    /// durable ids assigned by the store, preserving order.
    fn persist(
        &self,
        request: &GenerateQuestionsRequest,
        drafts: &[DraftQuestion],
    ) -> AppResult<Vec<GeneratedQuestion>> {
        let records: Vec<NewQuestionRecord> = drafts
            .iter()
            .map(|draft| NewQuestionRecord {
                survey_id: request.survey_id.clone(),
                response_id: request.response_id.clone(),
                domain: request.domain.clone(),
                question: draft.text.clone(),
            })
            .collect();

        let ids = self.db.insert_questions(&records)?;

        Ok(ids
            .into_iter()
            .zip(drafts)
            .map(|(id, draft)| GeneratedQuestion {
                id,
                question: draft.text.clone(),
            })
            .collect())
    }
}
