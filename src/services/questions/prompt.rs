//! Prompt Template
//!
//! Deterministic prompt construction for follow-up question generation.

/// Build the follow-up question prompt for a domain and feedback text.
///
/// The template embeds both inputs verbatim and instructs the model to
/// produce 5-6 numbered questions. Empty feedback is embedded as-is; the
/// model is still consulted.
pub fn build_prompt(domain: &str, feedback: &str) -> String {
    format!(
        "A user gave feedback in the domain: '{}'.\n\
         Feedback: \"{}\"\n\
         Generate 5-6 follow-up questions to better understand the user's experience \
         and improve the service.\n\
         Format as a numbered list (e.g., 1. Question text).",
        domain, feedback
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_inputs_verbatim() {
        let prompt = build_prompt("online retail", "Checkout kept failing");
        assert!(prompt.contains("'online retail'"));
        assert!(prompt.contains("\"Checkout kept failing\""));
    }

    #[test]
    fn test_prompt_requests_numbered_list() {
        let prompt = build_prompt("retail", "ok");
        assert!(prompt.contains("5-6 follow-up questions"));
        assert!(prompt.contains("numbered list"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt("a", "b"), build_prompt("a", "b"));
    }

    #[test]
    fn test_empty_feedback_still_produces_prompt() {
        let prompt = build_prompt("retail", "");
        assert!(prompt.contains("Feedback: \"\""));
    }
}
