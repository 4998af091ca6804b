use super::*;
use pretty_assertions::assert_eq;

#[test]
fn unterminated_string_points_at_opening_delimiter() {
    let err = LexError::unterminated_string(17, '`');
    assert_eq!(err.span, Span::new(17, 18));
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.context, LexErrorContext::InsideString { start: 17 });
    assert_eq!(err.suggestions, vec!["add a closing ```".to_string()]);
}

#[test]
fn invalid_operator_carries_text() {
    let err = LexError::invalid_operator(Span::new(3, 5), "=+");
    assert_eq!(
        err.kind,
        LexErrorKind::InvalidOperator {
            text: "=+".to_string()
        }
    );
    assert_eq!(err.context, LexErrorContext::InsideOperator { start: 3 });
    assert_eq!(err.code(), ErrorCode::E0003);
}

#[test]
fn error_display_includes_position() {
    let err = LexError::unexpected_character(4, '#');
    assert_eq!(err.to_string(), "unexpected character `#` at position 4");
}

#[test]
fn error_equality() {
    let a = LexError::unexpected_character(0, '#');
    let b = LexError::unexpected_character(0, '#');
    let c = LexError::unexpected_character(1, '#');
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn to_diagnostic_maps_codes() {
    let diag = LexError::unterminated_string(0, '`').to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0001);
    assert_eq!(diag.primary_span(), Some(Span::new(0, 1)));
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions.len(), 1);

    let diag = LexError::unexpected_character(2, '`').to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0002);
    assert!(diag.suggestions.is_empty());
}
