use model::{ArithOp, ExprId, RelOp, TokenKind, UnaryOp};
use crate::declarations::DeclarationParser;
use crate::error::ParseError;
use crate::parser::{MAX_NESTING, Parser};

/// Expression parsing functionality using precedence climbing
pub(crate) trait ExpressionParser {
    fn parse_expr(&mut self) -> Result<ExprId, ParseError>;
    /// Parenthesised condition of `if`, `while` and `do ... while`
    fn parse_condition(&mut self) -> Result<ExprId, ParseError>;
}

impl<'a> ExpressionParser for Parser<'a> {
    fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        let expr = self.parse_logical_or()?;
        // Operator chains fold in a loop, so only the finished tree shows their height
        if self.factory.expr_height(expr) > MAX_NESTING {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING });
        }
        Ok(expr)
    }

    fn parse_condition(&mut self) -> Result<ExprId, ParseError> {
        self.expect(TokenKind::OpenParenthesis)?;
        let condition = self.parse_expr()?;
        self.expect(TokenKind::CloseParenthesis)?;
        Ok(condition)
    }
}

fn relational_op(kind: TokenKind) -> Option<RelOp> {
    match kind {
        TokenKind::Less => Some(RelOp::Less),
        TokenKind::LessEqual => Some(RelOp::LessEqual),
        TokenKind::Greater => Some(RelOp::Greater),
        TokenKind::GreaterEqual => Some(RelOp::GreaterEqual),
        _ => None,
    }
}

impl<'a> Parser<'a> {
    // Logical OR (lowest precedence)
    pub(crate) fn parse_logical_or(&mut self) -> Result<ExprId, ParseError> {
        let mut expr = self.parse_logical_and()?;
        while self.match_token(TokenKind::OrOr) {
            let right = self.parse_logical_and()?;
            expr = self.factory.logical_or(expr, right);
        }
        Ok(expr)
    }

    // Logical AND
    pub(crate) fn parse_logical_and(&mut self) -> Result<ExprId, ParseError> {
        let mut expr = self.parse_equality()?;
        while self.match_token(TokenKind::AndAnd) {
            let right = self.parse_equality()?;
            expr = self.factory.logical_and(expr, right);
        }
        Ok(expr)
    }

    // Equality (== !=), built as arithmetic-kind nodes
    pub(crate) fn parse_equality(&mut self) -> Result<ExprId, ParseError> {
        let mut expr = self.parse_relational()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::EqualEqual) => ArithOp::EqualEqual,
                Some(TokenKind::BangEqual) => ArithOp::NotEqual,
                _ => break,
            };
            self.advance();
            let right = self.parse_relational()?;
            expr = self.factory.arithmetic(op, expr, right);
        }
        Ok(expr)
    }

    // Relational (< <= > >=): at most one operator, no chaining
    pub(crate) fn parse_relational(&mut self) -> Result<ExprId, ParseError> {
        let left = self.parse_additive()?;
        let Some(op) = self.peek_kind().and_then(relational_op) else {
            return Ok(left);
        };
        self.advance();
        let right = self.parse_additive()?;

        if let Some(next) = self.peek_kind().filter(|&k| relational_op(k).is_some()) {
            return Err(ParseError::ChainedComparison { operator: next.spelling().to_string() });
        }
        Ok(self.factory.relational(op, left, right))
    }

    // Additive (+ -)
    pub(crate) fn parse_additive(&mut self) -> Result<ExprId, ParseError> {
        let mut expr = self.parse_multiplicative()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Plus) => ArithOp::Add,
                Some(TokenKind::Minus) => ArithOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_multiplicative()?;
            expr = self.factory.arithmetic(op, expr, right);
        }
        Ok(expr)
    }

    // Multiplicative (* /)
    pub(crate) fn parse_multiplicative(&mut self) -> Result<ExprId, ParseError> {
        let mut expr = self.parse_unary()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Star) => ArithOp::Mul,
                Some(TokenKind::Slash) => ArithOp::Div,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            expr = self.factory.arithmetic(op, expr, right);
        }
        Ok(expr)
    }

    // Unary (! -), right-recursive
    pub(crate) fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        if self.match_token(TokenKind::Bang) {
            let operand = self.parse_nested_unary()?;
            return Ok(self.factory.logical_not(operand));
        }
        if self.match_token(TokenKind::Minus) {
            let operand = self.parse_nested_unary()?;
            return Ok(self.factory.unary(UnaryOp::Minus, operand));
        }
        self.parse_factor()
    }

    fn parse_nested_unary(&mut self) -> Result<ExprId, ParseError> {
        self.descend()?;
        let operand = self.parse_unary()?;
        self.ascend();
        Ok(operand)
    }

    /// Full expression one level down: parenthesised or used as an index
    fn parse_nested_expr(&mut self) -> Result<ExprId, ParseError> {
        self.descend()?;
        let expr = self.parse_expr()?;
        self.ascend();
        Ok(expr)
    }

    pub(crate) fn parse_factor(&mut self) -> Result<ExprId, ParseError> {
        let Some(token) = self.peek() else {
            return Err(ParseError::ExpectedFactor { found: self.found() });
        };

        match token.kind {
            TokenKind::OpenParenthesis => {
                self.advance();
                let expr = self.parse_nested_expr()?;
                self.expect(TokenKind::CloseParenthesis)?;
                Ok(expr)
            }
            TokenKind::Identifier => {
                let target = self.parse_identifier()?;
                if self.match_token(TokenKind::OpenBracket) {
                    let index = self.parse_nested_expr()?;
                    self.expect(TokenKind::CloseBracket)?;
                    return Ok(self.factory.indexed_access(target, index));
                }
                Ok(self.factory.identifier_expr(target))
            }
            TokenKind::Number => {
                let value: i64 = token
                    .lexeme
                    .parse()
                    .map_err(|_| ParseError::IntegerOutOfRange { lexeme: token.lexeme.clone() })?;
                self.advance();
                Ok(self.factory.int_literal(value))
            }
            TokenKind::True | TokenKind::False => {
                self.advance();
                Ok(self.factory.bool_literal(token.kind == TokenKind::True))
            }
            _ => Err(ParseError::ExpectedFactor { found: self.found() }),
        }
    }
}
