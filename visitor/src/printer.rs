use model::{
    ArithOp, Block, Declaration, ExprId, Identifier, NodeArena, Program, RelOp, ScalarType, StmtId,
    UnaryOp,
};

use crate::error::EvaluationError;
use crate::visitor::{Accept, VisitResult, Visitor, traverse};

/// Renders a tree as nested `Kind(child, child, ...)` terms, pre-order.
/// Empty declaration or statement sequences render as `NULL`.
#[derive(Debug, Default)]
pub struct StructurePrinter {
    out: String,
}

/// Structural rendering of a whole program on a single line.
pub fn render(program: &Program) -> Result<String, EvaluationError> {
    let mut printer = StructurePrinter::new();
    traverse(program, &mut printer)?;
    Ok(printer.finish())
}

impl StructurePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn open(&mut self, kind: &str) {
        self.out.push_str(kind);
        self.out.push('(');
    }

    fn separator(&mut self) {
        self.out.push_str(", ");
    }

    fn close(&mut self) {
        self.out.push(')');
    }

    /// `NULL` tail followed by one `)` per sequence element.
    fn close_sequence(&mut self, len: usize) {
        self.out.push_str("NULL");
        self.out.extend(std::iter::repeat_n(')', len));
    }

    fn word(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// `Kind(a, b)` for any two children.
    fn binary<L, R>(&mut self, arena: &NodeArena, kind: &str, left: &L, right: &R) -> VisitResult
    where
        L: Accept + ?Sized,
        R: Accept + ?Sized,
    {
        self.open(kind);
        left.accept(arena, self)?;
        self.separator();
        right.accept(arena, self)?;
        self.close();
        Ok(())
    }

    /// `Kind(op, left, right)` for operator nodes.
    fn operator(
        &mut self,
        arena: &NodeArena,
        kind: &str,
        symbol: &str,
        left: ExprId,
        right: ExprId,
    ) -> VisitResult {
        self.open(kind);
        self.word(symbol);
        self.separator();
        left.accept(arena, self)?;
        self.separator();
        right.accept(arena, self)?;
        self.close();
        Ok(())
    }
}

impl Visitor for StructurePrinter {
    fn visit_program(&mut self, arena: &NodeArena, program: &Program) -> VisitResult {
        self.open("Program");
        program.block().accept(arena, self)?;
        self.close();
        Ok(())
    }

    fn visit_block(&mut self, arena: &NodeArena, block: &Block) -> VisitResult {
        self.binary(
            arena,
            "Block",
            block.declarations.as_slice(),
            block.statements.as_slice(),
        )
    }

    fn visit_type(&mut self, _arena: &NodeArena, scalar: ScalarType) -> VisitResult {
        self.open("Type");
        self.word(&scalar.to_string());
        self.close();
        Ok(())
    }

    fn visit_vector_type(
        &mut self,
        _arena: &NodeArena,
        element: ScalarType,
        length: usize,
    ) -> VisitResult {
        self.open("VectorType");
        self.word(&format!("{element}, [{length}]"));
        self.close();
        Ok(())
    }

    // Sequences render right-leaning, Decls(first, Decls(second, NULL)), but are
    // written in one pass so long sequences do not deepen the call stack
    fn visit_declarations(&mut self, arena: &NodeArena, declarations: &[Declaration]) -> VisitResult {
        for declaration in declarations {
            self.open("Decls");
            declaration.accept(arena, self)?;
            self.separator();
        }
        self.close_sequence(declarations.len());
        Ok(())
    }

    fn visit_declaration(&mut self, arena: &NodeArena, declaration: &Declaration) -> VisitResult {
        self.binary(arena, "Decl", &declaration.r#type, &declaration.name)
    }

    fn visit_identifier(&mut self, _arena: &NodeArena, identifier: &Identifier) -> VisitResult {
        self.open("Id");
        self.word(&identifier.name);
        self.close();
        Ok(())
    }

    fn visit_statements(&mut self, arena: &NodeArena, statements: &[StmtId]) -> VisitResult {
        for statement in statements {
            self.open("Stmts");
            statement.accept(arena, self)?;
            self.separator();
        }
        self.close_sequence(statements.len());
        Ok(())
    }

    fn visit_int_literal(&mut self, _arena: &NodeArena, value: i64) -> VisitResult {
        self.open("IntConstant");
        self.word(&value.to_string());
        self.close();
        Ok(())
    }

    fn visit_bool_literal(&mut self, _arena: &NodeArena, value: bool) -> VisitResult {
        self.open("BoolConstant");
        self.word(if value { "true" } else { "false" });
        self.close();
        Ok(())
    }

    fn visit_binary_arithmetic(
        &mut self,
        arena: &NodeArena,
        op: ArithOp,
        left: ExprId,
        right: ExprId,
    ) -> VisitResult {
        self.operator(arena, "Arithm", op.symbol(), left, right)
    }

    fn visit_unary_op(&mut self, arena: &NodeArena, op: UnaryOp, operand: ExprId) -> VisitResult {
        self.open("Unary");
        self.word(op.symbol());
        self.separator();
        operand.accept(arena, self)?;
        self.close();
        Ok(())
    }

    fn visit_indexed_access(
        &mut self,
        arena: &NodeArena,
        target: &Identifier,
        index: ExprId,
    ) -> VisitResult {
        self.open("Access");
        target.accept(arena, self)?;
        self.separator();
        self.word("[");
        index.accept(arena, self)?;
        self.word("]");
        self.close();
        Ok(())
    }

    fn visit_if(&mut self, arena: &NodeArena, condition: ExprId, body: StmtId) -> VisitResult {
        self.binary(arena, "If", &condition, &body)
    }

    fn visit_if_else(
        &mut self,
        arena: &NodeArena,
        condition: ExprId,
        then_body: StmtId,
        else_body: StmtId,
    ) -> VisitResult {
        self.open("Else");
        condition.accept(arena, self)?;
        self.separator();
        then_body.accept(arena, self)?;
        self.separator();
        else_body.accept(arena, self)?;
        self.close();
        Ok(())
    }

    fn visit_while(&mut self, arena: &NodeArena, condition: ExprId, body: StmtId) -> VisitResult {
        self.binary(arena, "While", &condition, &body)
    }

    fn visit_do_while(&mut self, arena: &NodeArena, body: StmtId, condition: ExprId) -> VisitResult {
        self.binary(arena, "Do", &body, &condition)
    }

    fn visit_assign(&mut self, arena: &NodeArena, target: &Identifier, value: ExprId) -> VisitResult {
        self.binary(arena, "Set", target, &value)
    }

    fn visit_indexed_assign(
        &mut self,
        arena: &NodeArena,
        target: &Identifier,
        index: ExprId,
        value: ExprId,
    ) -> VisitResult {
        self.open("SetElem");
        target.accept(arena, self)?;
        self.separator();
        self.word("[");
        index.accept(arena, self)?;
        self.word("]");
        self.separator();
        value.accept(arena, self)?;
        self.close();
        Ok(())
    }

    fn visit_break(&mut self, _arena: &NodeArena) -> VisitResult {
        self.open("Break");
        self.close();
        Ok(())
    }

    fn visit_print(&mut self, arena: &NodeArena, value: ExprId) -> VisitResult {
        self.open("Print");
        value.accept(arena, self)?;
        self.close();
        Ok(())
    }

    fn visit_logical_not(&mut self, arena: &NodeArena, operand: ExprId) -> VisitResult {
        self.open("Not");
        operand.accept(arena, self)?;
        self.close();
        Ok(())
    }

    fn visit_logical_and(&mut self, arena: &NodeArena, left: ExprId, right: ExprId) -> VisitResult {
        self.binary(arena, "And", &left, &right)
    }

    fn visit_logical_or(&mut self, arena: &NodeArena, left: ExprId, right: ExprId) -> VisitResult {
        self.binary(arena, "Or", &left, &right)
    }

    fn visit_relational(
        &mut self,
        arena: &NodeArena,
        op: RelOp,
        left: ExprId,
        right: ExprId,
    ) -> VisitResult {
        self.operator(arena, "Rel", op.symbol(), left, right)
    }
}
