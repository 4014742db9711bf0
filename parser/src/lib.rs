// Parser module: Converts a list of tokens into an abstract syntax tree (AST)
//
// Module organization:
// - parser.rs: Core Parser struct, token helpers and the top-level program rule
// - declarations.rs: Type and declaration parsing (int, bool, vector types)
// - expressions.rs: Expression parsing with precedence climbing
// - statements.rs: Block and statement parsing (if, while, do, print, etc.)

mod declarations;
mod error;
mod expressions;
mod parser;
mod statements;

pub use error::ParseError;
pub use parser::MAX_NESTING;

use model::{Program, Token};
use parser::Parser;

/// Parse a list of tokens into a Program AST
///
/// # Arguments
/// * `tokens` - Slice of tokens from the lexer
///
/// # Returns
/// * `Ok(Program)` - The root node, owning every node of the tree
/// * `Err(ParseError)` - The first grammar violation; no partial tree is produced
pub fn parse_tokens(tokens: &[Token]) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}
