use model::{Block, StmtId, TokenKind};
use crate::declarations::DeclarationParser;
use crate::error::ParseError;
use crate::expressions::ExpressionParser;
use crate::parser::Parser;

/// Statement parsing functionality
pub(crate) trait StatementParser {
    fn parse_stmt(&mut self) -> Result<StmtId, ParseError>;
    fn parse_block(&mut self) -> Result<Block, ParseError>;
}

impl<'a> StatementParser for Parser<'a> {
    /// `{` declarations statements `}`
    fn parse_block(&mut self) -> Result<Block, ParseError> {
        self.expect(TokenKind::OpenBrace)?;
        let declarations = self.parse_declarations()?;
        let statements = self.parse_statements()?;
        self.expect(TokenKind::CloseBrace)?;
        Ok(self.factory.block(declarations, statements))
    }

    fn parse_stmt(&mut self) -> Result<StmtId, ParseError> {
        self.descend()?;
        let stmt = self.parse_unnested_stmt()?;
        self.ascend();
        Ok(stmt)
    }
}

impl<'a> Parser<'a> {
    fn parse_unnested_stmt(&mut self) -> Result<StmtId, ParseError> {
        match self.peek_kind() {
            Some(TokenKind::Identifier) => self.parse_assignment_stmt(),
            Some(TokenKind::If) => {
                self.advance();
                self.parse_if_stmt()
            }
            Some(TokenKind::While) => {
                self.advance();
                self.parse_while_stmt()
            }
            Some(TokenKind::Do) => {
                self.advance();
                self.parse_do_while_stmt()
            }
            Some(TokenKind::Break) => {
                self.advance();
                self.expect(TokenKind::Semicolon)?;
                Ok(self.factory.break_stmt())
            }
            Some(TokenKind::Print) => {
                self.advance();
                self.parse_print_stmt()
            }
            Some(TokenKind::OpenBrace) => {
                let block = self.parse_block()?;
                Ok(self.factory.block_stmt(block))
            }
            _ => Err(ParseError::ExpectedStatement { found: self.found() }),
        }
    }

    /// Statements up to the closing brace of the enclosing block. Running out
    /// of tokens is left to the caller's `expect('}')`.
    fn parse_statements(&mut self) -> Result<Vec<StmtId>, ParseError> {
        let mut statements = Vec::new();
        while !self.check(TokenKind::CloseBrace) && !self.is_at_end() {
            statements.push(self.parse_stmt()?);
        }
        Ok(statements)
    }

    // x = e;  or  v[i] = e;
    fn parse_assignment_stmt(&mut self) -> Result<StmtId, ParseError> {
        let target = self.parse_identifier()?;

        if self.match_token(TokenKind::OpenBracket) {
            let index = self.parse_expr()?;
            self.expect(TokenKind::CloseBracket)?;
            self.expect(TokenKind::Equal)?;
            let value = self.parse_expr()?;
            self.expect(TokenKind::Semicolon)?;
            return Ok(self.factory.indexed_assign(target, index, value));
        }

        self.expect(TokenKind::Equal)?;
        let value = self.parse_expr()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(self.factory.assign(target, value))
    }

    fn parse_if_stmt(&mut self) -> Result<StmtId, ParseError> {
        let condition = self.parse_condition()?;
        let then_body = self.parse_stmt()?;

        // A dangling else binds to the nearest if
        if self.match_token(TokenKind::Else) {
            let else_body = self.parse_stmt()?;
            return Ok(self.factory.if_else(condition, then_body, else_body));
        }
        Ok(self.factory.if_stmt(condition, then_body))
    }

    fn parse_while_stmt(&mut self) -> Result<StmtId, ParseError> {
        let condition = self.parse_condition()?;
        let body = self.parse_stmt()?;
        Ok(self.factory.while_loop(condition, body))
    }

    fn parse_do_while_stmt(&mut self) -> Result<StmtId, ParseError> {
        let body = self.parse_stmt()?;
        self.expect(TokenKind::While)?;
        let condition = self.parse_condition()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(self.factory.do_while(body, condition))
    }

    fn parse_print_stmt(&mut self) -> Result<StmtId, ParseError> {
        self.expect(TokenKind::OpenParenthesis)?;
        let value = self.parse_expr()?;
        self.expect(TokenKind::CloseParenthesis)?;
        self.expect(TokenKind::Semicolon)?;
        Ok(self.factory.print(value))
    }
}
