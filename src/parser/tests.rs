//! Unit tests for parsing.

use super::*;
use crate::ast::{ExprKind, StmtKind};
use crate::lexer::Lexer;

fn parse(input: &str) -> (Vec<crate::ast::Stmt>, Vec<ParseError>) {
    let tokens = Lexer::new(input).tokenize();
    Parser::new(tokens).parse()
}

fn parse_ok(input: &str) -> Vec<crate::ast::Stmt> {
    let (statements, errors) = parse(input);
    assert!(errors.is_empty(), "unexpected parse errors for {:?}: {:?}", input, errors);
    statements
}

#[test]
fn var_declaration_without_initializer_binds_nil() {
    let statements = parse_ok("var x;");
    assert_eq!(statements.len(), 1);
    assert!(matches!(
        &statements[0].kind,
        StmtKind::Var { initializer: None, .. }
    ));
}

#[test]
fn var_declaration_with_initializer() {
    let statements = parse_ok("var x = 1 + 2;");
    assert!(matches!(
        &statements[0].kind,
        StmtKind::Var { initializer: Some(_), .. }
    ));
}

#[test]
fn arithmetic_precedence_groups_multiplication_tighter() {
    let statements = parse_ok("1 + 2 * 3;");
    let StmtKind::Expression(expr) = &statements[0].kind else {
        panic!("expected expression statement");
    };
    let ExprKind::Binary { op, right, .. } = &expr.kind else {
        panic!("expected top-level binary");
    };
    assert_eq!(op.lexeme, "+");
    assert!(matches!(right.kind, ExprKind::Binary { .. }));
}

#[test]
fn unary_minus_binds_tighter_than_binary_minus() {
    let statements = parse_ok("-1 - 2;");
    let StmtKind::Expression(expr) = &statements[0].kind else {
        panic!("expected expression statement");
    };
    let ExprKind::Binary { left, .. } = &expr.kind else {
        panic!("expected top-level binary");
    };
    assert!(matches!(left.kind, ExprKind::Unary { .. }));
}

#[test]
fn comparison_chain_is_left_associative() {
    let statements = parse_ok("1 < 2 == true;");
    let StmtKind::Expression(expr) = &statements[0].kind else {
        panic!("expected expression statement");
    };
    assert!(matches!(expr.kind, ExprKind::Binary { .. }));
}

#[test]
fn assignment_to_variable_is_right_associative() {
    let statements = parse_ok("a = b = 3;");
    let StmtKind::Expression(expr) = &statements[0].kind else {
        panic!("expected expression statement");
    };
    let ExprKind::Assignment { value, .. } = &expr.kind else {
        panic!("expected assignment");
    };
    assert!(matches!(value.kind, ExprKind::Assignment { .. }));
}

#[test]
fn assignment_to_non_variable_is_a_parse_error() {
    let (_, errors) = parse("1 + 2 = 3;");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Invalid assignment target.");
}

#[test]
fn if_without_else_parses() {
    let statements = parse_ok("if (true) print 1;");
    assert!(matches!(
        &statements[0].kind,
        StmtKind::If { else_branch: None, .. }
    ));
}

#[test]
fn if_with_else_attaches_to_nearest_if() {
    let statements = parse_ok("if (true) if (false) print 1; else print 2;");
    let StmtKind::If { then_branch, .. } = &statements[0].kind else {
        panic!("expected if statement");
    };
    assert!(matches!(
        then_branch.kind,
        StmtKind::If {
            else_branch: Some(_),
            ..
        }
    ));
}

#[test]
fn block_collects_its_own_declarations() {
    let statements = parse_ok("{ var a = 1; print a; }");
    let StmtKind::Block(inner) = &statements[0].kind else {
        panic!("expected block");
    };
    assert_eq!(inner.len(), 2);
}

#[test]
fn function_declaration_with_parameters() {
    let statements = parse_ok("fun add(a, b) { return a + b; }");
    let StmtKind::Function { name, params, body } = &statements[0].kind else {
        panic!("expected function declaration");
    };
    assert_eq!(name.lexeme, "add");
    assert_eq!(params.len(), 2);
    assert_eq!(body.len(), 1);
}

#[test]
fn call_expression_parses_arguments() {
    let statements = parse_ok("add(1, 2 + 3);");
    let StmtKind::Expression(expr) = &statements[0].kind else {
        panic!("expected expression statement");
    };
    let ExprKind::Call { arguments, .. } = &expr.kind else {
        panic!("expected call expression");
    };
    assert_eq!(arguments.len(), 2);
}

#[test]
fn for_loop_desugars_to_block_while_block() {
    let statements = parse_ok("for (var i = 0; i < 3; i = i + 1) print i;");
    assert!(matches!(&statements[0].kind, StmtKind::Block(_)));
    let StmtKind::Block(outer) = &statements[0].kind else {
        unreachable!()
    };
    assert!(matches!(outer[1].kind, StmtKind::While { .. }));
}

#[test]
fn for_loop_with_omitted_clauses_defaults_condition_to_true() {
    let statements = parse_ok("for (;;) print 1;");
    let StmtKind::While { condition, .. } = &statements[0].kind else {
        panic!("expected desugared while");
    };
    assert!(matches!(condition.kind, ExprKind::Literal(crate::value::Value::Boolean(true))));
}

#[test]
fn parse_error_recovers_at_the_next_statement_boundary() {
    let (statements, errors) = parse("print 1 + ; print 2;");
    assert_eq!(errors.len(), 1);
    assert_eq!(statements.len(), 1);
}

#[test]
fn unclosed_paren_reports_expected_right_paren() {
    let (_, errors) = parse("print (1 + 2;");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("')'"));
}

#[test]
fn return_outside_any_function_is_a_parse_error() {
    let (_, errors) = parse("return 1;");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Can't return from top-level code.");
}

#[test]
fn return_inside_nested_block_within_a_function_is_allowed() {
    let statements = parse_ok("fun f() { { return 1; } }");
    assert!(matches!(&statements[0].kind, StmtKind::Function { .. }));
}

#[test]
fn return_after_a_function_declaration_ends_is_rejected_again() {
    let (_, errors) = parse("fun f() { return 1; } return 2;");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Can't return from top-level code.");
}

#[test]
fn grouping_preserves_explicit_precedence() {
    let statements = parse_ok("(1 + 2) * 3;");
    let StmtKind::Expression(expr) = &statements[0].kind else {
        panic!("expected expression statement");
    };
    let ExprKind::Binary { left, .. } = &expr.kind else {
        panic!("expected top-level binary");
    };
    assert!(matches!(left.kind, ExprKind::Grouping(_)));
}
