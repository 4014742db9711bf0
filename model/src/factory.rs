use crate::arena::{ExprId, NodeArena, StmtId};
use crate::ast::{
    ArithOp, Block, Declaration, Expr, Identifier, Program, RelOp, ScalarType, Stmt, Type,
    UnaryOp,
};

/// The only construction path for AST nodes.
///
/// Each method takes already-built children and returns the new node (or a
/// handle to it). No validation happens here beyond what the argument types
/// guarantee. [`NodeFactory::finish`] hands the arena over to the resulting
/// [`Program`].
#[derive(Debug, Default)]
pub struct NodeFactory {
    arena: NodeArena,
}

impl NodeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self, block: Block) -> Program {
        Program::new(self.arena, block)
    }

    /// Height of the expression subtree built so far under `id`.
    pub fn expr_height(&self, id: ExprId) -> usize {
        self.arena.expr_height(id).unwrap_or(0)
    }

    // Leaves and structural nodes held by value

    pub fn identifier(&self, name: impl Into<String>) -> Identifier {
        Identifier { name: name.into() }
    }

    pub fn scalar_type(&self, scalar: ScalarType) -> Type {
        Type::Scalar(scalar)
    }

    pub fn vector_type(&self, element: ScalarType, length: usize) -> Type {
        Type::Vector { element, length }
    }

    pub fn declaration(&self, r#type: Type, name: Identifier) -> Declaration {
        Declaration { r#type, name }
    }

    pub fn block(&self, declarations: Vec<Declaration>, statements: Vec<StmtId>) -> Block {
        Block {
            declarations,
            statements,
        }
    }

    // Expressions

    pub fn identifier_expr(&mut self, name: Identifier) -> ExprId {
        self.arena.push_expr(Expr::Identifier(name))
    }

    pub fn int_literal(&mut self, value: i64) -> ExprId {
        self.arena.push_expr(Expr::IntLiteral(value))
    }

    pub fn bool_literal(&mut self, value: bool) -> ExprId {
        self.arena.push_expr(Expr::BoolLiteral(value))
    }

    pub fn unary(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        self.arena.push_expr(Expr::Unary { op, operand })
    }

    pub fn arithmetic(&mut self, op: ArithOp, left: ExprId, right: ExprId) -> ExprId {
        self.arena.push_expr(Expr::Arithmetic { op, left, right })
    }

    pub fn relational(&mut self, op: RelOp, left: ExprId, right: ExprId) -> ExprId {
        self.arena.push_expr(Expr::Relational { op, left, right })
    }

    pub fn logical_not(&mut self, operand: ExprId) -> ExprId {
        self.arena.push_expr(Expr::Not { operand })
    }

    pub fn logical_and(&mut self, left: ExprId, right: ExprId) -> ExprId {
        self.arena.push_expr(Expr::And { left, right })
    }

    pub fn logical_or(&mut self, left: ExprId, right: ExprId) -> ExprId {
        self.arena.push_expr(Expr::Or { left, right })
    }

    pub fn indexed_access(&mut self, target: Identifier, index: ExprId) -> ExprId {
        self.arena.push_expr(Expr::IndexedAccess { target, index })
    }

    // Statements

    pub fn if_stmt(&mut self, condition: ExprId, body: StmtId) -> StmtId {
        self.arena.push_stmt(Stmt::If { condition, body })
    }

    pub fn if_else(&mut self, condition: ExprId, then_body: StmtId, else_body: StmtId) -> StmtId {
        self.arena.push_stmt(Stmt::IfElse {
            condition,
            then_body,
            else_body,
        })
    }

    pub fn while_loop(&mut self, condition: ExprId, body: StmtId) -> StmtId {
        self.arena.push_stmt(Stmt::While { condition, body })
    }

    pub fn do_while(&mut self, body: StmtId, condition: ExprId) -> StmtId {
        self.arena.push_stmt(Stmt::DoWhile { body, condition })
    }

    pub fn assign(&mut self, target: Identifier, value: ExprId) -> StmtId {
        self.arena.push_stmt(Stmt::Assign { target, value })
    }

    pub fn indexed_assign(&mut self, target: Identifier, index: ExprId, value: ExprId) -> StmtId {
        self.arena.push_stmt(Stmt::IndexedAssign {
            target,
            index,
            value,
        })
    }

    pub fn break_stmt(&mut self) -> StmtId {
        self.arena.push_stmt(Stmt::Break)
    }

    pub fn print(&mut self, value: ExprId) -> StmtId {
        self.arena.push_stmt(Stmt::Print { value })
    }

    pub fn block_stmt(&mut self, block: Block) -> StmtId {
        self.arena.push_stmt(Stmt::Block(block))
    }
}
