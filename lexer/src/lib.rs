mod error;
mod keywords;
mod state_machine;
#[cfg(test)]
mod repro_bug;

pub use error::LexicalError;
pub use keywords::{KEYWORDS, keyword_or_identifier};

use model::Token;
use state_machine::StateMachineLexer;

/// Main lexer entry point. Stops at the first unrecognised character; no
/// end-of-input token is appended.
pub fn lex(input: &str) -> Result<Vec<Token>, LexicalError> {
    let mut lexer = StateMachineLexer::new(input);
    lexer.tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::TokenKind;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn lex_simple_identifier_and_constant() {
        let input = "foo 123";
        let tokens = lex(input).expect("lexing should succeed");
        assert_eq!(tokens, vec![Token::identifier("foo"), Token::number("123")]);
    }

    #[test]
    fn lex_keywords_and_operators() {
        let input = "{ int x; x = 1; if (x == 1) print(x); }";
        let tokens = lex(input).expect("lexing should succeed");
        assert_eq!(
            tokens,
            vec![
                Token::fixed(TokenKind::OpenBrace),
                Token::fixed(TokenKind::Int),
                Token::identifier("x"),
                Token::fixed(TokenKind::Semicolon),
                Token::identifier("x"),
                Token::fixed(TokenKind::Equal),
                Token::number("1"),
                Token::fixed(TokenKind::Semicolon),
                Token::fixed(TokenKind::If),
                Token::fixed(TokenKind::OpenParenthesis),
                Token::identifier("x"),
                Token::fixed(TokenKind::EqualEqual),
                Token::number("1"),
                Token::fixed(TokenKind::CloseParenthesis),
                Token::fixed(TokenKind::Print),
                Token::fixed(TokenKind::OpenParenthesis),
                Token::identifier("x"),
                Token::fixed(TokenKind::CloseParenthesis),
                Token::fixed(TokenKind::Semicolon),
                Token::fixed(TokenKind::CloseBrace),
            ]
        );
    }

    // ─── Keyword tests ──────────────────────────────────────────
    #[test]
    fn lex_all_keywords() {
        let tokens = lex("int bool if else while do break print true false").unwrap();
        assert_eq!(kinds(&tokens), vec![
            TokenKind::Int, TokenKind::Bool, TokenKind::If, TokenKind::Else,
            TokenKind::While, TokenKind::Do, TokenKind::Break, TokenKind::Print,
            TokenKind::True, TokenKind::False,
        ]);
    }

    #[test]
    fn lex_keyword_prefix_is_identifier() {
        let tokens = lex("ifx").unwrap();
        assert_eq!(tokens, vec![Token::identifier("ifx")]);
    }

    #[test]
    fn lex_identifier_with_digits() {
        let tokens = lex("v2 x10y").unwrap();
        assert_eq!(tokens, vec![Token::identifier("v2"), Token::identifier("x10y")]);
    }

    #[test]
    fn lex_keywords_are_case_sensitive() {
        let tokens = lex("True INT").unwrap();
        assert_eq!(tokens, vec![Token::identifier("True"), Token::identifier("INT")]);
    }

    // ─── Operator tests ─────────────────────────────────────────
    #[test]
    fn lex_single_character_operators() {
        let tokens = lex("( ) { } [ ] + - * / ;").unwrap();
        assert_eq!(kinds(&tokens), vec![
            TokenKind::OpenParenthesis, TokenKind::CloseParenthesis,
            TokenKind::OpenBrace, TokenKind::CloseBrace,
            TokenKind::OpenBracket, TokenKind::CloseBracket,
            TokenKind::Plus, TokenKind::Minus, TokenKind::Star, TokenKind::Slash,
            TokenKind::Semicolon,
        ]);
    }

    #[test]
    fn lex_comparison_operators() {
        let tokens = lex("< <= > >= == != = !").unwrap();
        assert_eq!(kinds(&tokens), vec![
            TokenKind::Less, TokenKind::LessEqual,
            TokenKind::Greater, TokenKind::GreaterEqual,
            TokenKind::EqualEqual, TokenKind::BangEqual,
            TokenKind::Equal, TokenKind::Bang,
        ]);
    }

    #[test]
    fn lex_logical_operators() {
        let tokens = lex("&& || !").unwrap();
        assert_eq!(kinds(&tokens), vec![TokenKind::AndAnd, TokenKind::OrOr, TokenKind::Bang]);
    }

    #[test]
    fn lex_split_operator_is_two_tokens() {
        let tokens = lex("< =").unwrap();
        assert_eq!(kinds(&tokens), vec![TokenKind::Less, TokenKind::Equal]);
    }

    #[test]
    fn lex_lexemes_reconstruct_input() {
        let input = "{ int [3] v; v[0] = -2*(a+b)/c; while (!(v[0] <= 4) && x != y || z >= 1) x = x; }";
        let tokens = lex(input).unwrap();
        let joined: String = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        let squeezed: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(joined, squeezed);
    }

    // ─── Error tests ────────────────────────────────────────────
    #[test]
    fn lex_lone_pipe_fails() {
        let err = lex("a | b").unwrap_err();
        assert_eq!(err, LexicalError::IncompleteOperator { symbol: '|' });
        assert!(err.to_string().contains('|'));
    }

    #[test]
    fn lex_lone_ampersand_fails() {
        let err = lex("a & b").unwrap_err();
        assert_eq!(err.symbol(), '&');
    }

    #[test]
    fn lex_pipe_at_end_of_input_fails() {
        let err = lex("a |").unwrap_err();
        assert_eq!(err, LexicalError::IncompleteOperator { symbol: '|' });
    }

    #[test]
    fn lex_unrecognised_character_fails() {
        let err = lex("x = 1 % 2;").unwrap_err();
        assert_eq!(err, LexicalError::UnexpectedCharacter { symbol: '%' });
        assert_eq!(err.to_string(), "lexical error on symbol: %");
    }

    #[test]
    fn lex_underscore_is_not_an_identifier_character() {
        let err = lex("my_var").unwrap_err();
        assert_eq!(err.symbol(), '_');
    }

    // ─── Edge case tests ────────────────────────────────────────
    #[test]
    fn lex_empty_input() {
        let tokens = lex("").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn lex_whitespace_only() {
        let tokens = lex("   \t\n  \r\n  ").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn lex_adjacent_tokens_no_space() {
        let tokens = lex("(x+1)").unwrap();
        assert_eq!(tokens, vec![
            Token::fixed(TokenKind::OpenParenthesis),
            Token::identifier("x"),
            Token::fixed(TokenKind::Plus),
            Token::number("1"),
            Token::fixed(TokenKind::CloseParenthesis),
        ]);
    }

    #[test]
    fn lex_indexed_access() {
        let tokens = lex("v[i+1]").unwrap();
        assert_eq!(kinds(&tokens), vec![
            TokenKind::Identifier, TokenKind::OpenBracket, TokenKind::Identifier,
            TokenKind::Plus, TokenKind::Number, TokenKind::CloseBracket,
        ]);
    }

    #[test]
    fn lex_leading_zeros_are_preserved() {
        let tokens = lex("007").unwrap();
        assert_eq!(tokens, vec![Token::number("007")]);
    }
}
