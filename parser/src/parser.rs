use model::{NodeFactory, Program, Token, TokenKind};
use crate::error::ParseError;
use crate::statements::StatementParser;

/// Deepest nesting of statements and expressions a program may have.
pub const MAX_NESTING: usize = 256;

/// Core parser struct that maintains parsing state
pub(crate) struct Parser<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) pos: usize,
    pub(crate) factory: NodeFactory,
    /// Current nesting, bounded by `MAX_NESTING`
    pub(crate) depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            tokens,
            pos: 0,
            factory: NodeFactory::new(),
            depth: 0,
        }
    }

    /// A program is exactly one block, and it must consume every token.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let block = self.parse_block()?;
        if !self.is_at_end() {
            return Err(ParseError::TrailingInput { found: self.found() });
        }
        Ok(self.factory.finish(block))
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(crate) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    pub(crate) fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.match_token(kind) {
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                expected: kind.to_string(),
                found: self.found(),
            })
        }
    }

    /// Enter one more level of nesting. Every recursive rule goes through
    /// here, so the call stack stays proportional to `MAX_NESTING`.
    pub(crate) fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING });
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Description of the current token for diagnostics.
    pub(crate) fn found(&self) -> String {
        match self.peek() {
            Some(token) => token.describe(),
            None => "end of input".to_string(),
        }
    }
}
