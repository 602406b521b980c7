//! Export Functionality
//!
//! CSV export of stored responses, consumed by presentation sinks.

use std::io::Write;

use crate::models::records::Response;
use crate::utils::error::{AppError, AppResult};

use super::service::AnalyticsService;

impl AnalyticsService {
    /// Export all responses as CSV.
    ///
    /// Returns `None` when zero responses exist (the same no-data signal
    /// as the summary). Durable ids are not included; emotion maps are
    /// serialized as JSON inside a quoted field.
    pub fn export_responses_csv(&self) -> AppResult<Option<String>> {
        let responses = self.db().list_responses()?;
        if responses.is_empty() {
            return Ok(None);
        }

        let csv = Self::responses_to_csv(&responses)?;
        Ok(Some(csv))
    }

    /// Serialize responses to CSV text
    fn responses_to_csv(responses: &[Response]) -> AppResult<String> {
        let mut output = Vec::new();

        writeln!(
            output,
            "name,age,feedback,rating,user_type,survey_id,sentiment,emotion"
        )
        .map_err(|e| AppError::internal(e.to_string()))?;

        for response in responses {
            let emotion_json = serde_json::to_string(&response.emotion)?;
            writeln!(
                output,
                "{},{},{},{},{},{},{},{}",
                Self::csv_escape(&response.name),
                response.age,
                Self::csv_escape(&response.feedback),
                response.rating,
                response.user_type,
                Self::csv_escape(response.survey_id.as_deref().unwrap_or("")),
                response.sentiment,
                Self::csv_escape(&emotion_json),
            )
            .map_err(|e| AppError::internal(e.to_string()))?;
        }

        String::from_utf8(output).map_err(|e| AppError::internal(e.to_string()))
    }

    /// Escape a CSV field: quote when it contains a comma, quote, or
    /// newline, doubling any embedded quotes.
    fn csv_escape(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::records::UserType;
    use crate::storage::database::{Database, NewResponseRecord};
    use std::collections::HashMap;

    #[test]
    fn test_export_none_when_no_responses() {
        let db = Database::new_in_memory().unwrap();
        let service = AnalyticsService::new(db);
        assert!(service.export_responses_csv().unwrap().is_none());
    }

    #[test]
    fn test_export_includes_header_and_rows() {
        let db = Database::new_in_memory().unwrap();
        db.insert_response(NewResponseRecord {
            name: "Ana".to_string(),
            age: 34,
            feedback: "Loved it, but support was slow".to_string(),
            rating: 4,
            user_type: UserType::Professional,
            survey_id: None,
            sentiment: 0.4,
            emotion: HashMap::new(),
        })
        .unwrap();

        let csv = AnalyticsService::new(db)
            .export_responses_csv()
            .unwrap()
            .unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "name,age,feedback,rating,user_type,survey_id,sentiment,emotion"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("Ana,34,"));
        // Feedback contains a comma, so it must be quoted
        assert!(row.contains("\"Loved it, but support was slow\""));
        assert!(row.contains("Professional"));
    }

    #[test]
    fn test_csv_escape_doubles_quotes() {
        assert_eq!(
            AnalyticsService::csv_escape("said \"hi\", twice"),
            "\"said \"\"hi\"\", twice\""
        );
        assert_eq!(AnalyticsService::csv_escape("plain"), "plain");
    }
}
