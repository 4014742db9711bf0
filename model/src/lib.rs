// Shared data model for the front end
//
// - token.rs: Token and TokenKind, the contract between lexer and parser
// - ast.rs: node types for programs, blocks, declarations, statements, expressions
// - arena.rs: storage for expression/statement nodes, addressed by typed handles
// - factory.rs: NodeFactory, the single construction path for AST nodes

mod arena;
mod ast;
mod factory;
mod token;

pub use arena::{ExprId, NodeArena, StmtId};
pub use ast::{
    ArithOp, Block, Declaration, Expr, Identifier, NodeKind, Program, RelOp, ScalarType, Stmt,
    Type, UnaryOp,
};
pub use factory::NodeFactory;
pub use token::{Token, TokenKind};
