use model::{Token, TokenKind};
use crate::error::LexicalError;
use crate::keywords::keyword_or_identifier;

pub struct StateMachineLexer<'a> {
    input: &'a str,
    pos: usize,
    token_start: usize,
}

impl<'a> StateMachineLexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            token_start: 0,
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexicalError> {
        let mut tokens = Vec::new();

        while self.pos < self.input.len() {
            match self.lex_next_token()? {
                Some(token) => tokens.push(token),
                None => continue, // Trailing whitespace consumed
            }
        }

        Ok(tokens)
    }

    fn lex_next_token(&mut self) -> Result<Option<Token>, LexicalError> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };
        self.token_start = self.pos;

        match ch {
            '0'..='9' => Ok(Some(self.lex_number())),
            'a'..='z' | 'A'..='Z' => Ok(Some(self.lex_identifier())),
            _ => self.lex_operator_or_punctuation(ch).map(Some),
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn current_slice(&self) -> &'a str {
        &self.input[self.token_start..self.pos]
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if !ch.is_ascii_whitespace() {
                break;
            }
            self.pos += 1;
        }
    }

    /// Consume the current character if it equals `expected`.
    fn eat(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn lex_number(&mut self) -> Token {
        while matches!(self.current_char(), Some('0'..='9')) {
            self.pos += 1;
        }
        // Conversion to an integer happens in the parser
        Token::number(self.current_slice())
    }

    fn lex_identifier(&mut self) -> Token {
        while matches!(self.current_char(), Some('a'..='z' | 'A'..='Z' | '0'..='9')) {
            self.pos += 1;
        }
        keyword_or_identifier(self.current_slice())
    }

    fn lex_operator_or_punctuation(&mut self, ch: char) -> Result<Token, LexicalError> {
        self.pos += ch.len_utf8();

        let kind = match ch {
            '(' => TokenKind::OpenParenthesis,
            ')' => TokenKind::CloseParenthesis,
            '{' => TokenKind::OpenBrace,
            '}' => TokenKind::CloseBrace,
            '[' => TokenKind::OpenBracket,
            ']' => TokenKind::CloseBracket,
            ';' => TokenKind::Semicolon,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            // Must be doubled
            '|' if self.eat('|') => TokenKind::OrOr,
            '&' if self.eat('&') => TokenKind::AndAnd,
            '|' | '&' => return Err(LexicalError::IncompleteOperator { symbol: ch }),
            // Optionally followed by '='; the peeked character stays put otherwise
            '!' if self.eat('=') => TokenKind::BangEqual,
            '<' if self.eat('=') => TokenKind::LessEqual,
            '>' if self.eat('=') => TokenKind::GreaterEqual,
            '=' if self.eat('=') => TokenKind::EqualEqual,
            '!' => TokenKind::Bang,
            '<' => TokenKind::Less,
            '>' => TokenKind::Greater,
            '=' => TokenKind::Equal,
            _ => return Err(LexicalError::UnexpectedCharacter { symbol: ch }),
        };

        Ok(Token::fixed(kind))
    }
}
