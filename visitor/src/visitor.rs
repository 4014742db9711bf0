use model::{
    ArithOp, Block, Declaration, Expr, ExprId, Identifier, NodeArena, Program, RelOp, ScalarType,
    Stmt, StmtId, Type, UnaryOp,
};

use crate::error::EvaluationError;

pub type VisitResult = Result<(), EvaluationError>;

/// One operation per concrete node kind.
///
/// Nodes are dispatched to these operations through [`Accept::accept`]. A
/// visitor that wants to descend into children calls `accept` on them with
/// the arena it was handed; nothing descends automatically.
pub trait Visitor {
    fn visit_program(&mut self, arena: &NodeArena, program: &Program) -> VisitResult;
    fn visit_block(&mut self, arena: &NodeArena, block: &Block) -> VisitResult;
    fn visit_type(&mut self, arena: &NodeArena, scalar: ScalarType) -> VisitResult;
    fn visit_vector_type(
        &mut self,
        arena: &NodeArena,
        element: ScalarType,
        length: usize,
    ) -> VisitResult;
    /// May be empty.
    fn visit_declarations(&mut self, arena: &NodeArena, declarations: &[Declaration]) -> VisitResult;
    fn visit_declaration(&mut self, arena: &NodeArena, declaration: &Declaration) -> VisitResult;
    fn visit_identifier(&mut self, arena: &NodeArena, identifier: &Identifier) -> VisitResult;
    /// May be empty.
    fn visit_statements(&mut self, arena: &NodeArena, statements: &[StmtId]) -> VisitResult;

    fn visit_int_literal(&mut self, arena: &NodeArena, value: i64) -> VisitResult;
    fn visit_bool_literal(&mut self, arena: &NodeArena, value: bool) -> VisitResult;
    fn visit_binary_arithmetic(
        &mut self,
        arena: &NodeArena,
        op: ArithOp,
        left: ExprId,
        right: ExprId,
    ) -> VisitResult;
    fn visit_unary_op(&mut self, arena: &NodeArena, op: UnaryOp, operand: ExprId) -> VisitResult;
    fn visit_indexed_access(
        &mut self,
        arena: &NodeArena,
        target: &Identifier,
        index: ExprId,
    ) -> VisitResult;

    fn visit_if(&mut self, arena: &NodeArena, condition: ExprId, body: StmtId) -> VisitResult;
    fn visit_if_else(
        &mut self,
        arena: &NodeArena,
        condition: ExprId,
        then_body: StmtId,
        else_body: StmtId,
    ) -> VisitResult;
    fn visit_while(&mut self, arena: &NodeArena, condition: ExprId, body: StmtId) -> VisitResult;
    fn visit_do_while(&mut self, arena: &NodeArena, body: StmtId, condition: ExprId) -> VisitResult;
    fn visit_assign(&mut self, arena: &NodeArena, target: &Identifier, value: ExprId) -> VisitResult;
    fn visit_indexed_assign(
        &mut self,
        arena: &NodeArena,
        target: &Identifier,
        index: ExprId,
        value: ExprId,
    ) -> VisitResult;
    fn visit_break(&mut self, arena: &NodeArena) -> VisitResult;
    fn visit_print(&mut self, arena: &NodeArena, value: ExprId) -> VisitResult;

    fn visit_logical_not(&mut self, arena: &NodeArena, operand: ExprId) -> VisitResult;
    fn visit_logical_and(&mut self, arena: &NodeArena, left: ExprId, right: ExprId) -> VisitResult;
    fn visit_logical_or(&mut self, arena: &NodeArena, left: ExprId, right: ExprId) -> VisitResult;
    fn visit_relational(
        &mut self,
        arena: &NodeArena,
        op: RelOp,
        left: ExprId,
        right: ExprId,
    ) -> VisitResult;
}

/// Double dispatch: each node picks the visitor operation matching its own
/// concrete kind.
pub trait Accept {
    fn accept<V: Visitor + ?Sized>(&self, arena: &NodeArena, visitor: &mut V) -> VisitResult;
}

/// Run `visitor` over the whole tree, starting at the root.
pub fn traverse<V: Visitor + ?Sized>(program: &Program, visitor: &mut V) -> VisitResult {
    program.accept(program.arena(), visitor)
}

impl Accept for Program {
    fn accept<V: Visitor + ?Sized>(&self, arena: &NodeArena, visitor: &mut V) -> VisitResult {
        visitor.visit_program(arena, self)
    }
}

impl Accept for Block {
    fn accept<V: Visitor + ?Sized>(&self, arena: &NodeArena, visitor: &mut V) -> VisitResult {
        visitor.visit_block(arena, self)
    }
}

impl Accept for Type {
    fn accept<V: Visitor + ?Sized>(&self, arena: &NodeArena, visitor: &mut V) -> VisitResult {
        match *self {
            Type::Scalar(scalar) => visitor.visit_type(arena, scalar),
            Type::Vector { element, length } => visitor.visit_vector_type(arena, element, length),
        }
    }
}

impl Accept for [Declaration] {
    fn accept<V: Visitor + ?Sized>(&self, arena: &NodeArena, visitor: &mut V) -> VisitResult {
        visitor.visit_declarations(arena, self)
    }
}

impl Accept for Declaration {
    fn accept<V: Visitor + ?Sized>(&self, arena: &NodeArena, visitor: &mut V) -> VisitResult {
        visitor.visit_declaration(arena, self)
    }
}

impl Accept for Identifier {
    fn accept<V: Visitor + ?Sized>(&self, arena: &NodeArena, visitor: &mut V) -> VisitResult {
        visitor.visit_identifier(arena, self)
    }
}

impl Accept for [StmtId] {
    fn accept<V: Visitor + ?Sized>(&self, arena: &NodeArena, visitor: &mut V) -> VisitResult {
        visitor.visit_statements(arena, self)
    }
}

/// A handle that does not resolve in `arena` has no concrete kind to
/// dispatch on.
impl Accept for StmtId {
    fn accept<V: Visitor + ?Sized>(&self, arena: &NodeArena, visitor: &mut V) -> VisitResult {
        match arena.stmt(*self) {
            Some(stmt) => stmt.accept(arena, visitor),
            None => Err(EvaluationError::UnresolvedStatement { id: *self }),
        }
    }
}

impl Accept for ExprId {
    fn accept<V: Visitor + ?Sized>(&self, arena: &NodeArena, visitor: &mut V) -> VisitResult {
        match arena.expr(*self) {
            Some(expr) => expr.accept(arena, visitor),
            None => Err(EvaluationError::UnresolvedExpression { id: *self }),
        }
    }
}

impl Accept for Stmt {
    fn accept<V: Visitor + ?Sized>(&self, arena: &NodeArena, visitor: &mut V) -> VisitResult {
        match self {
            Stmt::If { condition, body } => visitor.visit_if(arena, *condition, *body),
            Stmt::IfElse {
                condition,
                then_body,
                else_body,
            } => visitor.visit_if_else(arena, *condition, *then_body, *else_body),
            Stmt::While { condition, body } => visitor.visit_while(arena, *condition, *body),
            Stmt::DoWhile { body, condition } => visitor.visit_do_while(arena, *body, *condition),
            Stmt::Assign { target, value } => visitor.visit_assign(arena, target, *value),
            Stmt::IndexedAssign {
                target,
                index,
                value,
            } => visitor.visit_indexed_assign(arena, target, *index, *value),
            Stmt::Break => visitor.visit_break(arena),
            Stmt::Print { value } => visitor.visit_print(arena, *value),
            Stmt::Block(block) => visitor.visit_block(arena, block),
        }
    }
}

impl Accept for Expr {
    fn accept<V: Visitor + ?Sized>(&self, arena: &NodeArena, visitor: &mut V) -> VisitResult {
        match self {
            Expr::Identifier(identifier) => visitor.visit_identifier(arena, identifier),
            Expr::IntLiteral(value) => visitor.visit_int_literal(arena, *value),
            Expr::BoolLiteral(value) => visitor.visit_bool_literal(arena, *value),
            Expr::Unary { op, operand } => visitor.visit_unary_op(arena, *op, *operand),
            Expr::Arithmetic { op, left, right } => {
                visitor.visit_binary_arithmetic(arena, *op, *left, *right)
            }
            Expr::Relational { op, left, right } => {
                visitor.visit_relational(arena, *op, *left, *right)
            }
            Expr::Not { operand } => visitor.visit_logical_not(arena, *operand),
            Expr::And { left, right } => visitor.visit_logical_and(arena, *left, *right),
            Expr::Or { left, right } => visitor.visit_logical_or(arena, *left, *right),
            Expr::IndexedAccess { target, index } => {
                visitor.visit_indexed_access(arena, target, *index)
            }
        }
    }
}
