use crate::lex;
use model::{Token, TokenKind};

#[test]
fn test_bang_before_identifier_is_rescanned() {
    // The character after '!' is only peeked, so it must start the next token
    let tokens = lex("!flag").expect("lexing should succeed");
    assert_eq!(tokens, vec![Token::fixed(TokenKind::Bang), Token::identifier("flag")]);
}

#[test]
fn test_assign_followed_by_negative_number() {
    let tokens = lex("x=-1").expect("lexing should succeed");
    assert_eq!(tokens, vec![
        Token::identifier("x"),
        Token::fixed(TokenKind::Equal),
        Token::fixed(TokenKind::Minus),
        Token::number("1"),
    ]);
}

#[test]
fn test_triple_equals() {
    let tokens = lex("===").expect("lexing should succeed");
    assert_eq!(tokens, vec![Token::fixed(TokenKind::EqualEqual), Token::fixed(TokenKind::Equal)]);
}

#[test]
fn test_operator_at_end_of_input() {
    let tokens = lex("x>").expect("lexing should succeed");
    assert_eq!(tokens, vec![Token::identifier("x"), Token::fixed(TokenKind::Greater)]);
}
