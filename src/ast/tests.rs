//! Unit tests for the AST canonical string forms.

use super::*;
use crate::token::Span;

fn span() -> Span {
    Span::new(0, 0, 1, 1)
}

fn expr(kind: ExprKind) -> Expr {
    Expr::new(kind, span())
}

fn ident(name: &str) -> Expr {
    expr(ExprKind::Identifier(name.to_string()))
}

fn int(value: i64) -> Expr {
    expr(ExprKind::IntLiteral(value))
}

#[test]
fn test_let_statement_string() {
    let stmt = Stmt::new(
        StmtKind::Let {
            name: "myVar".to_string(),
            value: ident("anotherVar"),
        },
        span(),
    );
    assert_eq!(stmt.to_string(), "let myVar = anotherVar;");
}

#[test]
fn test_return_statement_string() {
    let stmt = Stmt::new(StmtKind::Return(int(5)), span());
    assert_eq!(stmt.to_string(), "return 5;");
}

#[test]
fn test_program_concatenates_statements() {
    let program = Program {
        statements: vec![
            Stmt::new(
                StmtKind::Let {
                    name: "x".to_string(),
                    value: int(1),
                },
                span(),
            ),
            Stmt::new(StmtKind::Expr(ident("x")), span()),
        ],
    };
    assert_eq!(program.to_string(), "let x = 1;x");
}

#[test]
fn test_prefix_expression_string() {
    let e = expr(ExprKind::Prefix {
        op: PrefixOperator::Neg,
        right: Box::new(ident("x")),
    });
    assert_eq!(e.to_string(), "(-x)");
}

#[test]
fn test_infix_expression_string() {
    let e = expr(ExprKind::Infix {
        left: Box::new(int(1)),
        op: InfixOperator::Add,
        right: Box::new(int(2)),
    });
    assert_eq!(e.to_string(), "(1 + 2)");
}

#[test]
fn test_nested_infix_makes_grouping_visible() {
    let product = expr(ExprKind::Infix {
        left: Box::new(int(2)),
        op: InfixOperator::Mul,
        right: Box::new(int(3)),
    });
    let sum = expr(ExprKind::Infix {
        left: Box::new(int(1)),
        op: InfixOperator::Add,
        right: Box::new(product),
    });
    assert_eq!(sum.to_string(), "(1 + (2 * 3))");
}

#[test]
fn test_if_expression_string() {
    let e = expr(ExprKind::If {
        condition: Box::new(expr(ExprKind::Infix {
            left: Box::new(ident("x")),
            op: InfixOperator::Lt,
            right: Box::new(ident("y")),
        })),
        consequence: Block::new(vec![Stmt::new(StmtKind::Expr(ident("x")), span())], span()),
        alternative: Some(Block::new(
            vec![Stmt::new(StmtKind::Expr(ident("y")), span())],
            span(),
        )),
    });
    assert_eq!(e.to_string(), "if (x < y) x else y");
}

#[test]
fn test_function_literal_string() {
    let e = expr(ExprKind::Function {
        parameters: vec!["x".to_string(), "y".to_string()],
        body: Block::new(
            vec![Stmt::new(
                StmtKind::Expr(expr(ExprKind::Infix {
                    left: Box::new(ident("x")),
                    op: InfixOperator::Add,
                    right: Box::new(ident("y")),
                })),
                span(),
            )],
            span(),
        ),
    });
    assert_eq!(e.to_string(), "fn(x, y) (x + y)");
}

#[test]
fn test_call_expression_string() {
    let e = expr(ExprKind::Call {
        function: Box::new(ident("add")),
        arguments: vec![int(1), int(2)],
    });
    assert_eq!(e.to_string(), "add(1, 2)");
}

#[test]
fn test_array_and_index_strings() {
    let array = expr(ExprKind::Array(vec![int(1), int(2)]));
    assert_eq!(array.to_string(), "[1, 2]");

    let index = expr(ExprKind::Index {
        left: Box::new(ident("myArray")),
        index: Box::new(int(0)),
    });
    assert_eq!(index.to_string(), "(myArray[0])");
}

#[test]
fn test_hash_literal_string() {
    let e = expr(ExprKind::Hash(vec![
        (
            expr(ExprKind::StringLiteral("one".to_string())),
            int(1),
        ),
        (
            expr(ExprKind::StringLiteral("two".to_string())),
            int(2),
        ),
    ]));
    assert_eq!(e.to_string(), "{one: 1, two: 2}");
}

#[test]
fn test_empty_hash_string() {
    let e = expr(ExprKind::Hash(vec![]));
    assert_eq!(e.to_string(), "{}");
}
