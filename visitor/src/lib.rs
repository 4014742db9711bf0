// Traversal of a parsed program
//
// - visitor.rs: Visitor (one operation per concrete node kind), Accept (double dispatch), traverse
// - printer.rs: StructurePrinter, the structural `Kind(child, ...)` rendering
// - error.rs: EvaluationError, raised when traversal meets a handle with no node behind it

mod error;
mod printer;
mod visitor;

pub use error::EvaluationError;
pub use printer::{StructurePrinter, render};
pub use visitor::{Accept, VisitResult, Visitor, traverse};

#[cfg(test)]
mod tests {
    use super::*;
    use lexer::lex;
    use model::{
        ArithOp, Block, Declaration, ExprId, Identifier, NodeArena, NodeKind, Program, RelOp,
        ScalarType, StmtId, UnaryOp,
    };
    use parser::parse_tokens;

    fn parse(src: &str) -> Program {
        let tokens = lex(src).unwrap();
        parse_tokens(&tokens).unwrap()
    }

    fn rendered(src: &str) -> String {
        render(&parse(src)).unwrap()
    }

    /// Renders the single statement of `{ <stmt> }`
    fn stmt_rendering(stmt: &str) -> String {
        let full = rendered(&format!("{{ {stmt} }}"));
        full.strip_prefix("Program(Block(NULL, Stmts(")
            .and_then(|rest| rest.strip_suffix(", NULL)))"))
            .unwrap_or_else(|| panic!("unexpected shape: {full}"))
            .to_string()
    }

    /// Renders `e` as the value of `x = e;`
    fn expr_rendering(expr: &str) -> String {
        let stmt = stmt_rendering(&format!("x = {expr};"));
        stmt.strip_prefix("Set(Id(x), ")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or_else(|| panic!("unexpected shape: {stmt}"))
            .to_string()
    }

    #[test]
    fn empty_block() {
        assert_eq!(rendered("{ }"), "Program(Block(NULL, NULL))");
    }

    #[test]
    fn declarations_only() {
        assert_eq!(
            rendered("{ int x; bool b; }"),
            "Program(Block(Decls(Decl(Type(int), Id(x)), Decls(Decl(Type(bool), Id(b)), NULL)), NULL))"
        );
    }

    #[test]
    fn vector_declaration() {
        assert_eq!(
            rendered("{ int [10] v; }"),
            "Program(Block(Decls(Decl(VectorType(int, [10]), Id(v)), NULL), NULL))"
        );
    }

    #[test]
    fn statements_without_declarations() {
        assert_eq!(
            rendered("{ x = 1; print(x); }"),
            "Program(Block(NULL, Stmts(Set(Id(x), IntConstant(1)), Stmts(Print(Id(x)), NULL))))"
        );
    }

    #[test]
    fn precedence_of_multiplication() {
        assert_eq!(
            expr_rendering("2 + 3 * 4"),
            "Arithm(+, IntConstant(2), Arithm(*, IntConstant(3), IntConstant(4)))"
        );
    }

    #[test]
    fn left_associative_subtraction() {
        assert_eq!(
            expr_rendering("a - b - c"),
            "Arithm(-, Arithm(-, Id(a), Id(b)), Id(c))"
        );
    }

    #[test]
    fn equality_renders_as_arithmetic() {
        assert_eq!(
            expr_rendering("a == b != c"),
            "Arithm(!=, Arithm(==, Id(a), Id(b)), Id(c))"
        );
    }

    #[test]
    fn logical_operators() {
        assert_eq!(
            expr_rendering("a || b && !c"),
            "Or(Id(a), And(Id(b), Not(Id(c))))"
        );
        assert_eq!(
            expr_rendering("a < b && c >= d"),
            "And(Rel(<, Id(a), Id(b)), Rel(>=, Id(c), Id(d)))"
        );
    }

    #[test]
    fn unary_minus_and_literals() {
        assert_eq!(expr_rendering("-5"), "Unary(-, IntConstant(5))");
        assert_eq!(expr_rendering("- -x"), "Unary(-, Unary(-, Id(x)))");
        assert_eq!(expr_rendering("true"), "BoolConstant(true)");
        assert_eq!(expr_rendering("false"), "BoolConstant(false)");
    }

    #[test]
    fn indexed_access_and_assignment() {
        assert_eq!(expr_rendering("v[i + 1]"), "Access(Id(v), [Arithm(+, Id(i), IntConstant(1))])");
        assert_eq!(
            stmt_rendering("v[2] = v[1] * 3;"),
            "SetElem(Id(v), [IntConstant(2)], Arithm(*, Access(Id(v), [IntConstant(1)]), IntConstant(3)))"
        );
    }

    #[test]
    fn control_flow_statements() {
        assert_eq!(
            stmt_rendering("if (x > 0) print(x);"),
            "If(Rel(>, Id(x), IntConstant(0)), Print(Id(x)))"
        );
        assert_eq!(
            stmt_rendering("if (b) x = 1; else x = 2;"),
            "Else(Id(b), Set(Id(x), IntConstant(1)), Set(Id(x), IntConstant(2)))"
        );
        assert_eq!(
            stmt_rendering("while (true) break;"),
            "While(BoolConstant(true), Break())"
        );
        assert_eq!(
            stmt_rendering("do x = x - 1; while (x > 0);"),
            "Do(Set(Id(x), Arithm(-, Id(x), IntConstant(1))), Rel(>, Id(x), IntConstant(0)))"
        );
    }

    #[test]
    fn nested_block_statement() {
        assert_eq!(
            stmt_rendering("{ int y; y = 1; }"),
            "Block(Decls(Decl(Type(int), Id(y)), NULL), Stmts(Set(Id(y), IntConstant(1)), NULL))"
        );
        assert_eq!(stmt_rendering("{ }"), "Block(NULL, NULL)");
    }

    #[test]
    fn rendering_is_deterministic() {
        let src = "{ int [3] v; int i; i = 0; while (i < 3) { v[i] = i * i; i = i + 1; } print(v[2]); }";
        let first = rendered(src);
        for _ in 0..5 {
            assert_eq!(rendered(src), first);
        }
        assert_eq!(render(&parse(src)).unwrap(), first);
    }

    #[test]
    fn long_statement_list_renders() {
        let count = 50_000;
        let out = rendered(&format!("{{ {} }}", "break; ".repeat(count)));
        assert!(out.starts_with("Program(Block(NULL, Stmts(Break(), Stmts(Break(), "));
        assert!(out.ends_with(&format!("Break(), NULL{}))", ")".repeat(count))));
        assert_eq!(out.matches("Stmts(").count(), count);
    }

    #[test]
    fn tallest_accepted_expression_renders() {
        let depth = parser::MAX_NESTING - 1;
        let out = expr_rendering(&format!("{}1", "1 + ".repeat(depth)));
        assert_eq!(out.matches("Arithm(+, ").count(), depth);
        // Left-folded: every Arithm opens before the first operand
        let head = format!("{}IntConstant(1), IntConstant(1))", "Arithm(+, ".repeat(depth));
        assert!(out.starts_with(&head));
    }

    #[test]
    fn unresolved_expression_handle_is_an_evaluation_error() {
        let larger = parse("{ x = 1 + 2 + 3; }");
        let empty = parse("{ }");
        let id = match larger.stmt(larger.block().statements[0]) {
            Some(model::Stmt::Assign { value, .. }) => *value,
            other => panic!("Expected Assign, got {:?}", other),
        };

        let mut printer = StructurePrinter::new();
        let err = id.accept(empty.arena(), &mut printer).unwrap_err();
        assert_eq!(err, EvaluationError::UnresolvedExpression { id });
    }

    #[test]
    fn unresolved_statement_handle_is_an_evaluation_error() {
        let larger = parse("{ break; }");
        let empty = parse("{ }");
        let id = larger.block().statements[0];

        let mut printer = StructurePrinter::new();
        let err = larger.block().statements.as_slice().accept(empty.arena(), &mut printer).unwrap_err();
        assert_eq!(err, EvaluationError::UnresolvedStatement { id });
        assert!(err.to_string().contains("stmt#0"));
    }

    /// Records the kind of every node it is dispatched to, descending into all children.
    #[derive(Default)]
    struct KindRecorder {
        kinds: Vec<NodeKind>,
    }

    impl KindRecorder {
        fn pair(
            &mut self,
            arena: &NodeArena,
            kind: NodeKind,
            left: ExprId,
            right: ExprId,
        ) -> VisitResult {
            self.kinds.push(kind);
            left.accept(arena, self)?;
            right.accept(arena, self)
        }
    }

    impl Visitor for KindRecorder {
        fn visit_program(&mut self, arena: &NodeArena, program: &Program) -> VisitResult {
            self.kinds.push(NodeKind::Program);
            program.block().accept(arena, self)
        }

        fn visit_block(&mut self, arena: &NodeArena, block: &Block) -> VisitResult {
            self.kinds.push(NodeKind::Block);
            block.declarations.accept(arena, self)?;
            block.statements.accept(arena, self)
        }

        fn visit_type(&mut self, _arena: &NodeArena, _scalar: ScalarType) -> VisitResult {
            self.kinds.push(NodeKind::Type);
            Ok(())
        }

        fn visit_vector_type(&mut self, _: &NodeArena, _: ScalarType, _: usize) -> VisitResult {
            self.kinds.push(NodeKind::VectorType);
            Ok(())
        }

        fn visit_declarations(&mut self, arena: &NodeArena, declarations: &[Declaration]) -> VisitResult {
            self.kinds.push(NodeKind::Declarations);
            declarations.iter().try_for_each(|decl| decl.accept(arena, self))
        }

        fn visit_declaration(&mut self, arena: &NodeArena, declaration: &Declaration) -> VisitResult {
            self.kinds.push(NodeKind::Declaration);
            declaration.r#type.accept(arena, self)?;
            declaration.name.accept(arena, self)
        }

        fn visit_identifier(&mut self, _arena: &NodeArena, _identifier: &Identifier) -> VisitResult {
            self.kinds.push(NodeKind::Identifier);
            Ok(())
        }

        fn visit_statements(&mut self, arena: &NodeArena, statements: &[StmtId]) -> VisitResult {
            self.kinds.push(NodeKind::Statements);
            statements.iter().try_for_each(|stmt| stmt.accept(arena, self))
        }

        fn visit_int_literal(&mut self, _arena: &NodeArena, _value: i64) -> VisitResult {
            self.kinds.push(NodeKind::IntLiteral);
            Ok(())
        }

        fn visit_bool_literal(&mut self, _arena: &NodeArena, _value: bool) -> VisitResult {
            self.kinds.push(NodeKind::BoolLiteral);
            Ok(())
        }

        fn visit_binary_arithmetic(&mut self, arena: &NodeArena, _: ArithOp, l: ExprId, r: ExprId) -> VisitResult {
            self.pair(arena, NodeKind::BinaryArithmetic, l, r)
        }

        fn visit_unary_op(&mut self, arena: &NodeArena, _op: UnaryOp, operand: ExprId) -> VisitResult {
            self.kinds.push(NodeKind::UnaryOp);
            operand.accept(arena, self)
        }

        fn visit_indexed_access(&mut self, arena: &NodeArena, target: &Identifier, index: ExprId) -> VisitResult {
            self.kinds.push(NodeKind::IndexedAccess);
            target.accept(arena, self)?;
            index.accept(arena, self)
        }

        fn visit_if(&mut self, arena: &NodeArena, condition: ExprId, body: StmtId) -> VisitResult {
            self.kinds.push(NodeKind::If);
            condition.accept(arena, self)?;
            body.accept(arena, self)
        }

        fn visit_if_else(&mut self, arena: &NodeArena, condition: ExprId, then_body: StmtId, else_body: StmtId) -> VisitResult {
            self.kinds.push(NodeKind::IfElse);
            condition.accept(arena, self)?;
            then_body.accept(arena, self)?;
            else_body.accept(arena, self)
        }

        fn visit_while(&mut self, arena: &NodeArena, condition: ExprId, body: StmtId) -> VisitResult {
            self.kinds.push(NodeKind::While);
            condition.accept(arena, self)?;
            body.accept(arena, self)
        }

        fn visit_do_while(&mut self, arena: &NodeArena, body: StmtId, condition: ExprId) -> VisitResult {
            self.kinds.push(NodeKind::DoWhile);
            body.accept(arena, self)?;
            condition.accept(arena, self)
        }

        fn visit_assign(&mut self, arena: &NodeArena, target: &Identifier, value: ExprId) -> VisitResult {
            self.kinds.push(NodeKind::Assign);
            target.accept(arena, self)?;
            value.accept(arena, self)
        }

        fn visit_indexed_assign(&mut self, arena: &NodeArena, target: &Identifier, index: ExprId, value: ExprId) -> VisitResult {
            self.kinds.push(NodeKind::IndexedAssign);
            target.accept(arena, self)?;
            index.accept(arena, self)?;
            value.accept(arena, self)
        }

        fn visit_break(&mut self, _arena: &NodeArena) -> VisitResult {
            self.kinds.push(NodeKind::Break);
            Ok(())
        }

        fn visit_print(&mut self, arena: &NodeArena, value: ExprId) -> VisitResult {
            self.kinds.push(NodeKind::Print);
            value.accept(arena, self)
        }

        fn visit_logical_not(&mut self, arena: &NodeArena, operand: ExprId) -> VisitResult {
            self.kinds.push(NodeKind::LogicalNot);
            operand.accept(arena, self)
        }

        fn visit_logical_and(&mut self, arena: &NodeArena, left: ExprId, right: ExprId) -> VisitResult {
            self.pair(arena, NodeKind::LogicalAnd, left, right)
        }

        fn visit_logical_or(&mut self, arena: &NodeArena, left: ExprId, right: ExprId) -> VisitResult {
            self.pair(arena, NodeKind::LogicalOr, left, right)
        }

        fn visit_relational(&mut self, arena: &NodeArena, _: RelOp, l: ExprId, r: ExprId) -> VisitResult {
            self.pair(arena, NodeKind::Relational, l, r)
        }
    }

    #[test]
    fn dispatch_reaches_the_operation_of_each_concrete_kind() {
        let program = parse("{ bool b; b = !(1 < 2) || true && false; }");
        let mut recorder = KindRecorder::default();
        traverse(&program, &mut recorder).unwrap();

        assert_eq!(
            recorder.kinds,
            vec![
                NodeKind::Program,
                NodeKind::Block,
                NodeKind::Declarations,
                NodeKind::Declaration,
                NodeKind::Type,
                NodeKind::Identifier,
                NodeKind::Statements,
                NodeKind::Assign,
                NodeKind::Identifier,
                NodeKind::LogicalOr,
                NodeKind::LogicalNot,
                NodeKind::Relational,
                NodeKind::IntLiteral,
                NodeKind::IntLiteral,
                NodeKind::LogicalAnd,
                NodeKind::BoolLiteral,
                NodeKind::BoolLiteral,
            ]
        );
    }

    #[test]
    fn recorded_kinds_match_node_kinds() {
        let program = parse("{ int [4] v; v[0] = -1; do { if (v[0] == 1) break; else print(v[0] / 2); } while (false); }");
        let mut recorder = KindRecorder::default();
        traverse(&program, &mut recorder).unwrap();

        for kind in [
            NodeKind::VectorType,
            NodeKind::IndexedAssign,
            NodeKind::UnaryOp,
            NodeKind::DoWhile,
            NodeKind::IfElse,
            NodeKind::BinaryArithmetic,
            NodeKind::IndexedAccess,
            NodeKind::Break,
            NodeKind::Print,
        ] {
            assert!(recorder.kinds.contains(&kind), "missing {kind}");
        }

        let stmt = program.stmt(program.block().statements[0]).unwrap();
        assert_eq!(stmt.kind(), NodeKind::IndexedAssign);
    }

    #[test]
    fn concurrent_read_only_traversals_agree() {
        let program = parse("{ int i; i = 0; while (i < 10) { if (i == 5) break; i = i + 1; } print(i); }");
        let expected = render(&program).unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| render(&program))).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap().unwrap(), expected);
            }
        });
    }
}
