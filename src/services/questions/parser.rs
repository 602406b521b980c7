//! Completion Output Parser
//!
//! Turns the model's raw completion text into discrete question strings.
//! The output is treated as an untrusted, weakly structured stream: parsing
//! is purely textual (line splitting plus marker stripping) with no reliance
//! on the model honoring the requested format.

/// Parse raw completion text into an ordered list of question strings.
///
/// Each non-blank line has its leading enumeration marker (any run of
/// digits, punctuation, and whitespace, e.g. "1.", "2)", "- ") stripped and
/// surrounding whitespace trimmed. Lines that become empty are dropped.
/// Relative order is preserved and duplicates are passed through unchanged.
pub fn parse_questions(raw: &str) -> Vec<String> {
    raw.lines()
        .map(strip_enumeration_marker)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strip a leading enumeration marker and surrounding whitespace
fn strip_enumeration_marker(line: &str) -> &str {
    line.trim_start_matches(|c: char| c.is_ascii_digit() || c.is_ascii_punctuation() || c.is_whitespace())
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_numbered_markers() {
        let parsed = parse_questions("1. How was it?\n2) Anything else?\n\n");
        assert_eq!(parsed, vec!["How was it?", "Anything else?"]);
    }

    #[test]
    fn test_all_blank_input_yields_empty_list() {
        assert!(parse_questions("").is_empty());
        assert!(parse_questions("\n\n   \n\t\n").is_empty());
    }

    #[test]
    fn test_marker_only_lines_are_dropped() {
        let parsed = parse_questions("1.\n2) What changed?\n3.   ");
        assert_eq!(parsed, vec!["What changed?"]);
    }

    #[test]
    fn test_bullet_and_paren_markers() {
        let parsed = parse_questions("- First question?\n(2) Second question?\n  3 - Third?");
        assert_eq!(parsed, vec!["First question?", "Second question?", "Third?"]);
    }

    #[test]
    fn test_order_preserved_and_duplicates_kept() {
        let parsed = parse_questions("1. Same question?\n2. Same question?\n3. Different?");
        assert_eq!(
            parsed,
            vec!["Same question?", "Same question?", "Different?"]
        );
    }

    #[test]
    fn test_trailing_whitespace_trimmed() {
        let parsed = parse_questions("1. How was the checkout?   \r\n");
        assert_eq!(parsed, vec!["How was the checkout?"]);
    }

    #[test]
    fn test_unnumbered_lines_survive() {
        let parsed = parse_questions("What did you expect?\nWould you return?");
        assert_eq!(parsed, vec!["What did you expect?", "Would you return?"]);
    }
}
