use model::{Declaration, Identifier, ScalarType, TokenKind, Type};
use crate::error::ParseError;
use crate::parser::Parser;

/// Declaration parsing: `int x;`, `bool [4] flags;`
pub(crate) trait DeclarationParser {
    fn parse_declarations(&mut self) -> Result<Vec<Declaration>, ParseError>;
    fn parse_type(&mut self) -> Result<Type, ParseError>;
    fn parse_identifier(&mut self) -> Result<Identifier, ParseError>;
}

impl<'a> DeclarationParser for Parser<'a> {
    /// Consecutive declarations up to the first token that cannot start a type.
    fn parse_declarations(&mut self) -> Result<Vec<Declaration>, ParseError> {
        let mut declarations = Vec::new();
        while self.check_is_type() {
            declarations.push(self.parse_declaration()?);
        }
        Ok(declarations)
    }

    fn parse_type(&mut self) -> Result<Type, ParseError> {
        let scalar = match self.peek_kind() {
            Some(TokenKind::Int) => ScalarType::Int,
            Some(TokenKind::Bool) => ScalarType::Bool,
            _ => return Err(ParseError::ExpectedType { found: self.found() }),
        };
        self.advance();

        if !self.match_token(TokenKind::OpenBracket) {
            return Ok(self.factory.scalar_type(scalar));
        }

        let length = self.parse_vector_length()?;
        self.expect(TokenKind::CloseBracket)?;
        Ok(self.factory.vector_type(scalar, length))
    }

    fn parse_identifier(&mut self) -> Result<Identifier, ParseError> {
        match self.peek() {
            Some(token) if token.kind == TokenKind::Identifier => {
                self.advance();
                Ok(self.factory.identifier(token.lexeme.as_str()))
            }
            _ => Err(ParseError::ExpectedIdentifier { found: self.found() }),
        }
    }
}

impl<'a> Parser<'a> {
    pub(crate) fn check_is_type(&self) -> bool {
        matches!(self.peek_kind(), Some(TokenKind::Int | TokenKind::Bool))
    }

    fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        let r#type = self.parse_type()?;
        let name = self.parse_identifier()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(self.factory.declaration(r#type, name))
    }

    fn parse_vector_length(&mut self) -> Result<usize, ParseError> {
        let lexeme = match self.peek() {
            Some(token) if token.kind == TokenKind::Number => token.lexeme.as_str(),
            _ => return Err(ParseError::ExpectedVectorLength { found: self.found() }),
        };
        self.advance();

        let length: usize = lexeme
            .parse()
            .map_err(|_| ParseError::IntegerOutOfRange { lexeme: lexeme.to_string() })?;
        if length == 0 {
            return Err(ParseError::InvalidVectorLength { lexeme: lexeme.to_string() });
        }
        Ok(length)
    }
}
