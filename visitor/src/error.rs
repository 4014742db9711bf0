use model::{ExprId, StmtId};
use snafu::Snafu;

/// Raised by a traversal, never by the parser.
#[derive(Debug, Snafu, PartialEq, Eq, Clone)]
pub enum EvaluationError {
    #[snafu(display("{id} does not resolve to a specialised expression node"))]
    UnresolvedExpression { id: ExprId },

    #[snafu(display("{id} does not resolve to a specialised statement node"))]
    UnresolvedStatement { id: StmtId },
}
