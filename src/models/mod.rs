//! Data Models
//!
//! Serializable types shared between services and the storage layer.

pub mod analytics;
pub mod records;
pub mod settings;

pub use analytics::{AnalyticsSummary, QuestionStat};
pub use records::{
    Answer, AnswerReceipt, DraftQuestion, GeneratedQuestion, NewAnswer, NewResponse, Question,
    Response, ResponseReceipt, Survey, UserType,
};
