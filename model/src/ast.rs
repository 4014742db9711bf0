use std::fmt;

use crate::arena::{ExprId, NodeArena, StmtId};

/// Every concrete node kind a traversal can be dispatched to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum NodeKind {
    Program,
    Block,
    Type,
    VectorType,
    Declarations,
    Declaration,
    Identifier,
    Statements,
    IntLiteral,
    BoolLiteral,
    BinaryArithmetic,
    UnaryOp,
    IndexedAccess,
    If,
    IfElse,
    While,
    DoWhile,
    Assign,
    IndexedAssign,
    Break,
    Print,
    LogicalNot,
    LogicalAnd,
    LogicalOr,
    Relational,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ScalarType {
    Int,
    Bool,
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarType::Int => f.write_str("int"),
            ScalarType::Bool => f.write_str("bool"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Type {
    Scalar(ScalarType),
    /// `int [10]`: element type plus a positive element count.
    Vector { element: ScalarType, length: usize },
}

impl Type {
    pub fn kind(&self) -> NodeKind {
        match self {
            Type::Scalar(_) => NodeKind::Type,
            Type::Vector { .. } => NodeKind::VectorType,
        }
    }
}

/// A bare name. Binding to a declaration is left to later passes.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Identifier {
    pub name: String,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Declaration {
    pub r#type: Type,
    pub name: Identifier,
}

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Block {
    pub declarations: Vec<Declaration>,
    pub statements: Vec<StmtId>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Stmt {
    If {
        condition: ExprId,
        body: StmtId,
    },
    IfElse {
        condition: ExprId,
        then_body: StmtId,
        else_body: StmtId,
    },
    While {
        condition: ExprId,
        body: StmtId,
    },
    DoWhile {
        body: StmtId,
        condition: ExprId,
    },
    Assign {
        target: Identifier,
        value: ExprId,
    },
    IndexedAssign {
        target: Identifier,
        index: ExprId,
        value: ExprId,
    },
    Break,
    Print {
        value: ExprId,
    },
    Block(Block),
}

impl Stmt {
    pub fn kind(&self) -> NodeKind {
        match self {
            Stmt::If { .. } => NodeKind::If,
            Stmt::IfElse { .. } => NodeKind::IfElse,
            Stmt::While { .. } => NodeKind::While,
            Stmt::DoWhile { .. } => NodeKind::DoWhile,
            Stmt::Assign { .. } => NodeKind::Assign,
            Stmt::IndexedAssign { .. } => NodeKind::IndexedAssign,
            Stmt::Break => NodeKind::Break,
            Stmt::Print { .. } => NodeKind::Print,
            Stmt::Block(_) => NodeKind::Block,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Expr {
    Identifier(Identifier),
    IntLiteral(i64),
    BoolLiteral(bool),
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Arithmetic {
        op: ArithOp,
        left: ExprId,
        right: ExprId,
    },
    Relational {
        op: RelOp,
        left: ExprId,
        right: ExprId,
    },
    Not {
        operand: ExprId,
    },
    And {
        left: ExprId,
        right: ExprId,
    },
    Or {
        left: ExprId,
        right: ExprId,
    },
    IndexedAccess {
        target: Identifier,
        index: ExprId,
    },
}

impl Expr {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Identifier(_) => NodeKind::Identifier,
            Expr::IntLiteral(_) => NodeKind::IntLiteral,
            Expr::BoolLiteral(_) => NodeKind::BoolLiteral,
            Expr::Unary { .. } => NodeKind::UnaryOp,
            Expr::Arithmetic { .. } => NodeKind::BinaryArithmetic,
            Expr::Relational { .. } => NodeKind::Relational,
            Expr::Not { .. } => NodeKind::LogicalNot,
            Expr::And { .. } => NodeKind::LogicalAnd,
            Expr::Or { .. } => NodeKind::LogicalOr,
            Expr::IndexedAccess { .. } => NodeKind::IndexedAccess,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnaryOp {
    Minus,
}

/// Binary operators folded into arithmetic-kind nodes. Equality lives here
/// too: `==` and `!=` produce `Expr::Arithmetic`, not `Expr::Relational`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    EqualEqual,
    NotEqual,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RelOp {
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Minus => "-",
        }
    }
}

impl ArithOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::EqualEqual => "==",
            ArithOp::NotEqual => "!=",
        }
    }
}

impl RelOp {
    pub fn symbol(self) -> &'static str {
        match self {
            RelOp::Less => "<",
            RelOp::LessEqual => "<=",
            RelOp::Greater => ">",
            RelOp::GreaterEqual => ">=",
        }
    }
}

/// Root of a parsed program. Owns the arena holding every expression and
/// statement node, so the whole tree is released together.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Program {
    arena: NodeArena,
    block: Block,
}

impl Program {
    pub(crate) fn new(arena: NodeArena, block: Block) -> Self {
        Program { arena, block }
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn expr(&self, id: ExprId) -> Option<&Expr> {
        self.arena.expr(id)
    }

    pub fn stmt(&self, id: StmtId) -> Option<&Stmt> {
        self.arena.stmt(id)
    }
}
