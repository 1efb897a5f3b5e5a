//! Span classification.
//!
//! A span is checked against the keyword table, then the operator table,
//! then the integer and double literal shapes. Anything left over is an
//! identifier, so classification never fails.

use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::{TokenKind, KEYWORD_LOOKUP, OPERATOR_LOOKUP};

lazy_static! {
    static ref INTEGER_PATTERN: Regex = Regex::new("^[0-9]+$").unwrap();
    static ref DOUBLE_PATTERN: Regex = Regex::new("^[0-9]*\\.?[0-9]*$").unwrap();
}

pub fn is_keyword(span: &str) -> bool {
    KEYWORD_LOOKUP.contains_key(span)
}

pub fn is_operator(span: &str) -> bool {
    OPERATOR_LOOKUP.contains_key(span)
}

pub fn is_integer(span: &str) -> bool {
    INTEGER_PATTERN.is_match(span)
}

/// Digits with at most one `.` anywhere. `"."`, `"5."` and `".5"` all qualify,
/// and so does every integer.
pub fn is_double(span: &str) -> bool {
    !span.is_empty() && DOUBLE_PATTERN.is_match(span)
}

pub fn classify(span: &str) -> TokenKind {
    if let Some(kind) = KEYWORD_LOOKUP.get(span) {
        *kind
    } else if let Some(kind) = OPERATOR_LOOKUP.get(span) {
        *kind
    } else if is_integer(span) {
        TokenKind::IntegerConstant
    } else if is_double(span) {
        TokenKind::DoubleConstant
    } else {
        TokenKind::Identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_shape() {
        assert!(is_integer("0"));
        assert!(is_integer("123"));
        assert!(!is_integer(""));
        assert!(!is_integer("12a"));
        assert!(!is_integer("1.0"));
        assert!(!is_integer("-1"));
    }

    #[test]
    fn test_double_shape() {
        assert!(is_double("3.14"));
        assert!(is_double("5."));
        assert!(is_double(".5"));
        assert!(is_double("."));
        assert!(is_double("42"));
        assert!(!is_double(""));
        assert!(!is_double("1.2.3"));
        assert!(!is_double("1e5"));
    }

    #[test]
    fn test_table_membership() {
        assert!(is_keyword("class"));
        assert!(is_keyword("return"));
        assert!(!is_keyword("Class"));
        assert!(is_operator("=="));
        assert!(is_operator(","));
        assert!(!is_operator("="));
        assert!(!is_operator("!"));
    }

    #[test]
    fn test_classify_priority() {
        assert_eq!(classify("123"), TokenKind::IntegerConstant);
        assert_eq!(classify("1.5"), TokenKind::DoubleConstant);
        assert_eq!(classify("class"), TokenKind::Class);
        assert_eq!(classify("return"), TokenKind::Identifier);
        assert_eq!(classify("=="), TokenKind::Equals);
        assert_eq!(classify("="), TokenKind::Identifier);
        assert_eq!(classify("x1"), TokenKind::Identifier);
        assert_eq!(classify("@#"), TokenKind::Identifier);
    }
}
