use std::fmt;

/// Closed set of token kinds shared by the lexer and the parser.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    OpenParenthesis,
    CloseParenthesis,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Semicolon,
    // Keywords
    Int,
    Bool,
    If,
    Else,
    While,
    Do,
    Break,
    Print,
    True,
    False,
    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Equal,
    EqualEqual,
    Bang,
    BangEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    AndAnd,
    OrOr,
}

impl TokenKind {
    /// Canonical source spelling of a fixed token. The open classes
    /// (identifiers and numbers) report a description instead.
    pub fn spelling(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::OpenParenthesis => "(",
            TokenKind::CloseParenthesis => ")",
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::Semicolon => ";",
            TokenKind::Int => "int",
            TokenKind::Bool => "bool",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::Break => "break",
            TokenKind::Print => "print",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::Bang => "!",
            TokenKind::BangEqual => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
        }
    }

    /// True for the kinds whose lexeme is not fixed by the kind itself.
    pub fn is_open_class(self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::Number)
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Int
                | TokenKind::Bool
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Do
                | TokenKind::Break
                | TokenKind::Print
                | TokenKind::True
                | TokenKind::False
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_open_class() {
            f.write_str(self.spelling())
        } else {
            write!(f, "'{}'", self.spelling())
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// Token whose lexeme is the kind's canonical spelling (keywords, punctuation).
    pub fn fixed(kind: TokenKind) -> Self {
        Token::new(kind, kind.spelling())
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Token::new(TokenKind::Identifier, name)
    }

    pub fn number(digits: impl Into<String>) -> Self {
        Token::new(TokenKind::Number, digits)
    }

    /// Short description used in diagnostics, e.g. `identifier 'x'` or `';'`.
    pub fn describe(&self) -> String {
        if self.kind.is_open_class() {
            format!("{} '{}'", self.kind.spelling(), self.lexeme)
        } else {
            self.kind.to_string()
        }
    }
}
