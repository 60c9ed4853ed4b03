//! Shared utility functions.

/// Truncates a string to at most `max_chars` characters, ending with an ellipsis.
///
/// Counts characters rather than bytes so Japanese text is never split
/// inside a code point.
pub fn truncate_chars(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        return input.to_string();
    }
    let kept: String = input.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Collapses runs of whitespace into single spaces and trims the ends.
pub fn normalize_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        let truncated = truncate_chars("Digital painting capturing the spirit", 10);
        assert_eq!(truncated, "Digital p…");
        assert_eq!(truncated.chars().count(), 10);

        assert_eq!(truncate_chars("Short", 20), "Short");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        let truncated = truncate_chars("冒険の精神を捉えたデジタルペインティング", 5);
        assert_eq!(truncated, "冒険の精…");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  Ink \n  Flow\tStudy "), "Ink Flow Study");
        assert_eq!(normalize_whitespace(""), "");
    }
}
