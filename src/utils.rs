//! Text helpers applied to every operator-entered value before it reaches a query.

/// Characters treated as surrounding whitespace on input lines.
const WHITESPACE: &[char] = &[' ', '\n', '\r', '\t', '\x0c', '\x0b'];

/// Trim leading and trailing whitespace from an input line.
pub fn trim_whitespace(input: &str) -> &str {
    input.trim_matches(WHITESPACE)
}

/// Trim an input line and map a blank result to `None`.
///
/// This is the blank→NULL rule for optional columns: the value bound into a
/// statement is either a trimmed non-empty string or NULL, never `''`.
pub fn non_blank(input: &str) -> Option<String> {
    let trimmed = trim_whitespace(input);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("JDOE", "JDOE")]
    #[case("  JDOE  ", "JDOE")]
    #[case("\tJohn Smith\r\n", "John Smith")]
    #[case("\x0b\x0cX\x0c", "X")]
    #[case("   ", "")]
    #[case("", "")]
    fn test_trim_whitespace(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(trim_whitespace(input), expected);
    }

    #[rstest]
    fn test_trim_keeps_inner_whitespace() {
        assert_eq!(trim_whitespace("  1 Regent Road "), "1 Regent Road");
    }

    #[rstest]
    #[case("", None)]
    #[case("  \t ", None)]
    #[case("\n", None)]
    #[case(" Smith ", Some("Smith"))]
    fn test_non_blank(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(non_blank(input).as_deref(), expected);
    }
}
