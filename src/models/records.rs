//! Record Models
//!
//! Data structures for the four persisted collections: surveys, responses,
//! questions, and answers. Records are immutable after insertion; all ids
//! are opaque uuid strings assigned by the store, and timestamps serialize
//! as ISO-8601.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of survey respondent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Student,
    Professional,
    Other,
}

impl UserType {
    /// All categories in their fixed reporting order
    pub const ALL: [UserType; 3] = [UserType::Student, UserType::Professional, UserType::Other];

    /// Canonical string form used at the boundary and in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Student => "Student",
            UserType::Professional => "Professional",
            UserType::Other => "Other",
        }
    }

    /// Parse the canonical string form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Student" => Some(UserType::Student),
            "Professional" => Some(UserType::Professional),
            "Other" => Some(UserType::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A survey definition, root of a response tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Survey {
    /// Durable survey identifier
    pub id: String,
    /// Survey title
    pub title: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A single feedback submission with its computed sentiment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// Durable response identifier
    pub id: String,
    /// Respondent name
    pub name: String,
    /// Respondent age
    pub age: i64,
    /// Free-text feedback
    pub feedback: String,
    /// Numeric rating given by the respondent
    pub rating: i64,
    /// Respondent category
    pub user_type: UserType,
    /// Owning survey, if the response was submitted against one
    pub survey_id: Option<String>,
    /// Compound sentiment score of the feedback, in [-1, 1]
    pub sentiment: f64,
    /// Emotion-frequency mapping for the feedback (values in [0, 1])
    pub emotion: HashMap<String, f64>,
}

/// Payload for submitting a new response; `user_type` arrives as the
/// caller's raw string and is validated by the service layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewResponse {
    pub name: String,
    pub age: i64,
    pub feedback: String,
    pub rating: i64,
    pub user_type: String,
    #[serde(default)]
    pub survey_id: Option<String>,
}

/// Receipt returned after a response is persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseReceipt {
    /// Durable id of the stored response
    pub response_id: String,
    /// Compound sentiment score computed for the feedback
    pub sentiment: f64,
}

/// A follow-up question generated for a response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Durable question identifier
    pub id: String,
    /// Survey the question belongs to
    pub survey_id: String,
    /// Response that triggered the generation
    pub response_id: String,
    /// Free-text domain the feedback was given in
    pub domain: String,
    /// Question text, non-empty after enumeration-marker trimming
    pub question: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A parsed question holding a transient id, valid only within a single
/// pipeline invocation. Replaced by a durable id once persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftQuestion {
    pub transient_id: String,
    pub text: String,
}

/// A persisted question as returned to callers: durable id plus text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    /// Durable storage id
    pub id: String,
    /// Question text
    pub question: String,
}

/// An answer attached to a durably persisted question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// Durable answer identifier
    pub id: String,
    /// Durable id of the answered question
    pub question_id: String,
    /// Response the answer belongs to
    pub response_id: String,
    /// Free-text answer
    pub answer: String,
    /// Compound sentiment score of the answer text
    pub sentiment: f64,
    /// Submission timestamp
    pub created_at: DateTime<Utc>,
}

/// Payload for submitting a new answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAnswer {
    pub answer: String,
    pub question_id: String,
    pub response_id: String,
}

/// Receipt returned after an answer is persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerReceipt {
    /// Compound sentiment score computed for the answer text
    pub sentiment: f64,
}
