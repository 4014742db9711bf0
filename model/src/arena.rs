use std::fmt;

use crate::ast::{Expr, Stmt};

/// Handle to an expression stored in a [`NodeArena`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct ExprId(usize);

/// Handle to a statement stored in a [`NodeArena`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct StmtId(usize);

impl fmt::Display for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expr#{}", self.0)
    }
}

impl fmt::Display for StmtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stmt#{}", self.0)
    }
}

/// Append-only storage for expression and statement nodes.
///
/// Children are always pushed before their parent, so every handle a node
/// holds points to a lower index than the node itself and the structure
/// cannot contain cycles. Nodes are never removed individually.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct NodeArena {
    exprs: Vec<Expr>,
    /// Height of the subtree rooted at each expression, leaves are 1
    expr_heights: Vec<usize>,
    stmts: Vec<Stmt>,
}

impl NodeArena {
    pub fn expr(&self, id: ExprId) -> Option<&Expr> {
        self.exprs.get(id.0)
    }

    pub fn stmt(&self, id: StmtId) -> Option<&Stmt> {
        self.stmts.get(id.0)
    }

    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    pub fn expr_height(&self, id: ExprId) -> Option<usize> {
        self.expr_heights.get(id.0).copied()
    }

    pub(crate) fn push_expr(&mut self, expr: Expr) -> ExprId {
        let height = |id: &ExprId| self.expr_height(*id).unwrap_or(0);
        let children = match &expr {
            Expr::Identifier(_) | Expr::IntLiteral(_) | Expr::BoolLiteral(_) => 0,
            Expr::Unary { operand, .. } | Expr::Not { operand } => height(operand),
            Expr::IndexedAccess { index, .. } => height(index),
            Expr::Arithmetic { left, right, .. }
            | Expr::Relational { left, right, .. }
            | Expr::And { left, right }
            | Expr::Or { left, right } => height(left).max(height(right)),
        };
        self.expr_heights.push(children + 1);
        self.exprs.push(expr);
        ExprId(self.exprs.len() - 1)
    }

    pub(crate) fn push_stmt(&mut self, stmt: Stmt) -> StmtId {
        self.stmts.push(stmt);
        StmtId(self.stmts.len() - 1)
    }
}
