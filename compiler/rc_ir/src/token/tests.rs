use pretty_assertions::assert_eq;

use super::*;

fn name(text: &str, first: u32, last: u32) -> Token {
    Token::new(TokenKind::Name(text.to_string()), Span::inclusive(first, last))
}

#[test]
fn offsets_are_inclusive() {
    let token = name("Grubsong", 2, 9);
    assert_eq!(token.start_offset(), 2);
    assert_eq!(token.end_offset(), 9);
}

#[test]
fn content_text_per_kind() {
    assert_eq!(TokenKind::Name("CHARMS".into()).content_text(), "CHARMS");
    assert_eq!(TokenKind::Number(12).content_text(), "12");
    assert_eq!(TokenKind::Operator("+=".into()).content_text(), "+=");
    assert_eq!(
        TokenKind::Structural(StructuralKind::OpenParen).content_text(),
        "("
    );
    assert_eq!(
        TokenKind::LogicString("Grubsong = 1".into()).content_text(),
        "Grubsong = 1"
    );
}

#[test]
fn full_text_includes_trivia() {
    let token = Token::with_trivia(
        TokenKind::LogicString("Grubsong = 1".into()),
        Span::inclusive(18, 29),
        "`",
        "` ",
    );
    assert_eq!(token.full_text(), "`Grubsong = 1` ");
}

#[test]
fn accessors() {
    let op = Token::dummy(TokenKind::Operator(">>".into()));
    assert_eq!(op.operator(), Some(">>"));
    assert!(op.is_operator(">>"));
    assert!(!op.is_operator("=>"));
    assert_eq!(op.name(), None);

    let paren = Token::dummy(TokenKind::Structural(StructuralKind::CloseParen));
    assert_eq!(paren.structural(), Some(StructuralKind::CloseParen));
    assert_eq!(paren.operator(), None);
}

#[test]
fn atom_kinds() {
    assert!(TokenKind::Name("X".into()).is_atom());
    assert!(TokenKind::Number(1).is_atom());
    assert!(TokenKind::LogicString(String::new()).is_atom());
    assert!(!TokenKind::Operator("++".into()).is_atom());
    assert!(!TokenKind::Structural(StructuralKind::OpenParen).is_atom());
}

#[test]
fn list_reconstructs_source() {
    let tokens = TokenList::from_vec(vec![
        Token::with_trivia(TokenKind::Name("Grubsong".into()), Span::inclusive(2, 9), "  ", ""),
        Token::new(TokenKind::Operator("+=".into()), Span::inclusive(10, 11)),
        Token::new(TokenKind::Number(1), Span::inclusive(12, 12)),
    ]);
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens.reconstruct(), "  Grubsong+=1");
}

#[test]
fn whitespace_only_list_reconstructs() {
    let mut tokens = TokenList::new();
    tokens.set_trailing_trivia(" \t ");
    assert!(tokens.is_empty());
    assert_eq!(tokens.reconstruct(), " \t ");
}

#[test]
fn display_names() {
    assert_eq!(TokenKind::Operator(">>".into()).display_name(), "operator `>>`");
    assert_eq!(
        TokenKind::Structural(StructuralKind::CloseParen).display_name(),
        "`)`"
    );
}
