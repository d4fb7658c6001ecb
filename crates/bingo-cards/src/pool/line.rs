//! Classification of specification lines

use super::range::RangeDirective;
use crate::types::Result;

/// Marks a whole-line or trailing comment
pub const COMMENT_MARKER: char = '#';

/// Switches the active pool from priority to filler
pub const SEPARATOR: &str = "---";

/// Introduces a numeric range directive
pub const RANGE_MARKER: char = '!';

/// One line of the pool specification
#[derive(Debug, Clone, PartialEq)]
pub enum SpecLine<'a> {
    Blank,
    Comment,
    Separator,
    Range(RangeDirective),
    /// Literal value with any trailing comment and surrounding whitespace removed
    Literal(&'a str),
}

/// Classify a raw line. `line` is 1-based and only used for error reporting.
pub fn classify(raw: &str, line: usize) -> Result<SpecLine<'_>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(SpecLine::Blank);
    }
    if trimmed.starts_with(COMMENT_MARKER) {
        return Ok(SpecLine::Comment);
    }
    if trimmed == SEPARATOR {
        return Ok(SpecLine::Separator);
    }

    let content = strip_trailing_comment(trimmed);
    if content.is_empty() {
        return Ok(SpecLine::Blank);
    }

    match content.strip_prefix(RANGE_MARKER) {
        Some(body) => Ok(SpecLine::Range(RangeDirective::parse(body, line)?)),
        None => Ok(SpecLine::Literal(content)),
    }
}

fn strip_trailing_comment(text: &str) -> &str {
    match text.find(COMMENT_MARKER) {
        Some(pos) => text[..pos].trim(),
        None => text.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_fixed_order() {
        assert_eq!(classify("", 1).unwrap(), SpecLine::Blank);
        assert_eq!(classify("   \r", 1).unwrap(), SpecLine::Blank);
        assert_eq!(classify("# note", 1).unwrap(), SpecLine::Comment);
        assert_eq!(classify("  # indented note", 1).unwrap(), SpecLine::Comment);
        assert_eq!(classify("---", 1).unwrap(), SpecLine::Separator);
        assert_eq!(classify(" --- ", 1).unwrap(), SpecLine::Separator);
        assert_eq!(classify("----", 1).unwrap(), SpecLine::Literal("----"));
        assert!(matches!(
            classify("! from:1 to:3 step:1", 1).unwrap(),
            SpecLine::Range(_)
        ));
    }

    #[test]
    fn test_trailing_comment_stripped() {
        assert_eq!(
            classify("  apple pie   # dessert", 1).unwrap(),
            SpecLine::Literal("apple pie")
        );
        assert!(matches!(
            classify("! from:1 to:2 step:1 # small", 1).unwrap(),
            SpecLine::Range(_)
        ));
    }

    #[test]
    fn test_malformed_range_reports_line() {
        let err = classify("! from:1 to:3", 7).unwrap_err();
        assert!(err.to_string().contains("Line 7"));
    }
}
