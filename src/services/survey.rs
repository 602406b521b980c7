//! Survey Service
//!
//! Facade exposing the survey operations consumed by the presentation
//! layer: survey creation, response and answer submission, question
//! generation, live analysis, analytics, and listings. Each operation
//! runs synchronously to completion; the completion call inside question
//! generation is the only slow path.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::analytics::AnalyticsSummary;
use crate::models::records::{
    Answer, AnswerReceipt, GeneratedQuestion, NewAnswer, NewResponse, Question, Response,
    ResponseReceipt, Survey, UserType,
};
use crate::services::analytics::AnalyticsService;
use crate::services::completion::CompletionProvider;
use crate::services::questions::{GenerateQuestionsRequest, QuestionPipeline};
use crate::services::scoring::{SentimentLabel, SentimentScorer};
use crate::storage::database::{Database, NewAnswerRecord, NewResponseRecord};
use crate::utils::error::{AppError, AppResult};

/// Result of live feedback analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackAnalysis {
    /// Sentiment label derived from the compound score
    pub sentiment: SentimentLabel,
    /// Compound sentiment score in [-1, 1]
    pub polarity: f64,
}

/// Facade over scoring, question generation, persistence, and analytics.
///
/// The scorer and completion provider are process-wide read-only services
/// injected once at construction.
pub struct SurveyService {
    db: Database,
    scorer: Arc<SentimentScorer>,
    pipeline: QuestionPipeline,
    analytics: AnalyticsService,
}

impl SurveyService {
    /// Create a new survey service
    pub fn new(
        db: Database,
        scorer: Arc<SentimentScorer>,
        provider: Arc<dyn CompletionProvider>,
    ) -> Self {
        let pipeline = QuestionPipeline::new(provider, db.clone());
        let analytics = AnalyticsService::new(db.clone());
        Self {
            db,
            scorer,
            pipeline,
            analytics,
        }
    }

    /// Create a new survey
    pub fn create_survey(&self, title: &str) -> AppResult<Survey> {
        if title.trim().is_empty() {
            return Err(AppError::validation("Survey title must not be empty"));
        }

        let survey = self.db.insert_survey(title)?;
        info!(survey_id = %survey.id, "Survey created");
        Ok(survey)
    }

    /// List all surveys in insertion order
    pub fn list_surveys(&self) -> AppResult<Vec<Survey>> {
        self.db.list_surveys()
    }

    /// Submit a feedback response.
    ///
    /// The feedback is scored exactly once; the compound score and emotion
    /// frequencies are persisted with the record and the compound score is
    /// returned to the caller.
    pub fn submit_response(&self, payload: NewResponse) -> AppResult<ResponseReceipt> {
        if payload.name.trim().is_empty() {
            return Err(AppError::validation("Missing respondent name"));
        }
        if payload.feedback.trim().is_empty() {
            return Err(AppError::validation("Missing feedback text"));
        }
        let user_type = UserType::parse(&payload.user_type).ok_or_else(|| {
            AppError::validation(format!("Unknown user type: '{}'", payload.user_type))
        })?;

        let score = self.scorer.score(&payload.feedback);
        let response_id = self.db.insert_response(NewResponseRecord {
            name: payload.name,
            age: payload.age,
            feedback: payload.feedback,
            rating: payload.rating,
            user_type,
            survey_id: payload.survey_id,
            sentiment: score.compound,
            emotion: score.emotion_frequencies,
        })?;

        info!(response_id = %response_id, sentiment = score.compound, "Response submitted");
        Ok(ResponseReceipt {
            response_id,
            sentiment: score.compound,
        })
    }

    /// Generate and persist follow-up questions for a response
    pub async fn generate_questions(
        &self,
        request: GenerateQuestionsRequest,
    ) -> AppResult<Vec<GeneratedQuestion>> {
        self.pipeline.generate(&request).await
    }

    /// Submit an answer to a previously persisted question.
    ///
    /// The referenced question must already have a durable id; answers
    /// against unknown question ids are rejected rather than stored,
    /// since the store enforces no foreign keys.
    pub fn submit_answer(&self, payload: NewAnswer) -> AppResult<AnswerReceipt> {
        if payload.answer.trim().is_empty() {
            return Err(AppError::validation("Missing answer text"));
        }
        if !self.db.question_exists(&payload.question_id)? {
            return Err(AppError::not_found(format!(
                "No persisted question with id '{}'",
                payload.question_id
            )));
        }

        let score = self.scorer.score(&payload.answer);
        let answer_id = self.db.insert_answer(NewAnswerRecord {
            question_id: payload.question_id,
            response_id: payload.response_id,
            answer: payload.answer,
            sentiment: score.compound,
        })?;

        info!(answer_id = %answer_id, sentiment = score.compound, "Answer submitted");
        Ok(AnswerReceipt {
            sentiment: score.compound,
        })
    }

    /// Analyze a feedback text without persisting anything
    pub fn analyze_feedback(&self, text: &str) -> FeedbackAnalysis {
        let score = self.scorer.score(text);
        FeedbackAnalysis {
            sentiment: SentimentLabel::from_compound(score.compound),
            polarity: score.compound,
        }
    }

    /// Compute the analytics summary; `None` when no responses exist
    pub fn analytics(&self) -> AppResult<Option<AnalyticsSummary>> {
        self.analytics.summary()
    }

    /// Export all responses as CSV; `None` when no responses exist
    pub fn export_responses_csv(&self) -> AppResult<Option<String>> {
        self.analytics.export_responses_csv()
    }

    /// List all responses in insertion order
    pub fn list_responses(&self) -> AppResult<Vec<Response>> {
        self.db.list_responses()
    }

    /// List questions, optionally filtered by survey
    pub fn list_questions(&self, survey_id: Option<&str>) -> AppResult<Vec<Question>> {
        self.db.find_questions(survey_id)
    }

    /// List answers, optionally filtered by response
    pub fn list_answers(&self, response_id: Option<&str>) -> AppResult<Vec<Answer>> {
        self.db.find_answers(response_id)
    }
}
