use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_unrecognized_classifies_quote_as_malformed_char() {
    let error = LexError::unrecognized(Span::new(4, 5), "'");
    assert_eq!(error.kind, LexErrorKind::MalformedChar);
    assert_eq!(error.to_string(), "malformed character literal at position 4");
}

#[test]
fn test_unrecognized_reports_character() {
    let error = LexError::unrecognized(Span::new(2, 3), "@");
    assert_eq!(error.kind, LexErrorKind::UnexpectedCharacter { found: '@' });
    assert_eq!(error.to_string(), "unexpected character '@' at position 2");
}

#[test]
fn test_source_too_large_message() {
    let error = LexError::source_too_large(5_000_000_000);
    assert_eq!(
        error.to_string(),
        "source is too large (5000000000 bytes) at position 0"
    );
}
