use super::*;
use pretty_assertions::assert_eq;

#[test]
fn phases_route_characters_to_accumulators() {
    let mut cursor = Cursor::new("  ab ");
    let mut state = ScanState::new(&cursor);
    state.eat_whitespace(&mut cursor);
    state.advance(&cursor);
    state.expect_phase(Phase::Content, &cursor);
    state.consume(&mut cursor);
    state.consume(&mut cursor);
    assert_eq!(state.content(), "ab");
    state.advance(&cursor);
    state.expect_phase(Phase::TrailingTrivia, &cursor);
    state.eat_whitespace(&mut cursor);

    let token = state.finish(TokenKind::Name("ab".to_string()));
    assert_eq!(token.span, Span::new(2, 4));
    assert_eq!(token.leading_trivia, "  ");
    assert_eq!(token.trailing_trivia, " ");
    assert_eq!((token.start_offset(), token.end_offset()), (2, 3));
}

#[test]
fn start_offset_follows_token_start() {
    let mut cursor = Cursor::new("x y");
    cursor.bump();
    cursor.bump();
    let mut state = ScanState::new(&cursor);
    state.advance(&cursor);
    state.consume(&mut cursor);
    state.advance(&cursor);
    assert_eq!(state.finish(TokenKind::Name("y".to_string())).span, Span::new(2, 3));
}

#[test]
fn whitespace_only_stays_leading() {
    let mut cursor = Cursor::new(" \t\n");
    let mut state = ScanState::new(&cursor);
    state.eat_whitespace(&mut cursor);
    assert!(cursor.is_eof());
    assert_eq!(state.into_leading(), " \t\n");
}

#[test]
#[should_panic(expected = "tokenizing in bad state")]
fn out_of_order_phase_aborts() {
    let cursor = Cursor::new("x");
    let state = ScanState::new(&cursor);
    state.expect_phase(Phase::TrailingTrivia, &cursor);
}

#[test]
#[should_panic(expected = "current partial token")]
fn advancing_past_trailing_trivia_aborts() {
    let mut cursor = Cursor::new("x");
    let mut state = ScanState::new(&cursor);
    state.advance(&cursor);
    state.consume(&mut cursor);
    state.advance(&cursor);
    state.advance(&cursor);
}
