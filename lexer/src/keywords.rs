use model::{Token, TokenKind};

/// Reserved words. Any other alphanumeric run is an identifier.
pub const KEYWORDS: [(&str, TokenKind); 10] = [
    ("int", TokenKind::Int),
    ("bool", TokenKind::Bool),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("do", TokenKind::Do),
    ("break", TokenKind::Break),
    ("print", TokenKind::Print),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
];

pub fn keyword_or_identifier(text: &str) -> Token {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == text)
        .map(|&(_, kind)| Token::fixed(kind))
        .unwrap_or_else(|| Token::identifier(text))
}
