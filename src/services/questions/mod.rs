//! Question Generation
//!
//! Prompt construction, defensive parsing of model output, and the
//! generate-persist pipeline.

pub mod parser;
pub mod pipeline;
pub mod prompt;

pub use parser::parse_questions;
pub use pipeline::{assign_transient_ids, GenerateQuestionsRequest, QuestionPipeline};
pub use prompt::build_prompt;
