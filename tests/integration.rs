//! Integration tests exercising the tokenizer, parser, and evaluator
//! together through the public library API.

use loxo::ast::{ExprKind, StmtKind};
use loxo::interpreter::{Interpreter, RuntimeErrorKind};
use loxo::lexer::Lexer;
use loxo::parser::Parser;
use loxo::printer;
use loxo::token::TokenKind;
use loxo::value::Value;

fn tokenize(source: &str) -> (Vec<loxo::token::Token>, Vec<loxo::lexer::LexError>) {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize();
    (tokens, lexer.errors().to_vec())
}

fn parse(source: &str) -> (Vec<loxo::ast::Stmt>, Vec<loxo::parser::ParseError>) {
    let (tokens, lex_errors) = tokenize(source);
    assert!(lex_errors.is_empty(), "unexpected lex errors: {:?}", lex_errors);
    Parser::new(tokens).parse()
}

fn parse_ok(source: &str) -> Vec<loxo::ast::Stmt> {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "unexpected parse errors: {:?}", errors);
    program
}

#[test]
fn tokenize_simple_program() {
    let (tokens, errors) = tokenize(r#"var language = "lox";"#);
    assert!(errors.is_empty());

    let kinds: Vec<&TokenKind> = tokens.iter().map(|t| &t.kind).collect();
    assert!(matches!(kinds[0], TokenKind::Var));
    assert!(matches!(kinds[1], TokenKind::Identifier(name) if name == "language"));
    assert!(matches!(kinds[2], TokenKind::Equal));
    assert!(matches!(kinds[3], TokenKind::StringLiteral(s) if s == "lox"));
    assert!(matches!(kinds[4], TokenKind::Semicolon));
    assert!(matches!(kinds[5], TokenKind::Eof));
}

#[test]
fn tokenize_number_literal_keeps_canonical_form() {
    let (tokens, _) = tokenize("42");
    assert!(matches!(tokens[0].kind, TokenKind::NumberLiteral(n) if n == 42.0));
    assert_eq!(tokens[0].lexeme, "42");
}

#[test]
fn lex_error_on_unexpected_character_reports_its_line() {
    let (tokens, errors) = tokenize("var a = 1;\n@\n");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].span.line, 2);
    assert!(tokens.iter().any(|t| matches!(t.kind, TokenKind::Error(_))));
}

#[test]
fn parse_prints_fully_parenthesized_form() {
    let (tokens, _) = tokenize("(1 + 2) * -3");
    let expr = Parser::new(tokens).parse_expression_only().unwrap();
    assert_eq!(
        printer::print_expr(&expr),
        "(* (group (+ 1.0 2.0)) (- 3.0))"
    );
}

#[test]
fn evaluate_arithmetic_expression() {
    let (tokens, _) = tokenize("1 + 2 * 3");
    let expr = Parser::new(tokens).parse_expression_only().unwrap();
    let value = Interpreter::new().evaluate_expression(&expr).unwrap();
    assert_eq!(value, Value::Number(7.0));
}

#[test]
fn runtime_error_reading_an_undefined_variable() {
    let program = parse_ok("print missing;");
    let error = Interpreter::new().interpret(&program).unwrap_err();
    assert_eq!(error.kind, RuntimeErrorKind::UndefinedVariable);
    assert_eq!(error.line, 1);
}

#[test]
fn assignment_updates_the_enclosing_scopes_binding() {
    let program = parse_ok("var a = 1; { a = 2; }");
    let mut interpreter = Interpreter::new();
    interpreter.interpret(&program).unwrap();

    let final_value_program = parse_ok("a;");
    let StmtKind::Expression(expr) = &final_value_program[0].kind else {
        panic!("expected expression statement");
    };
    let value = interpreter.evaluate_expression(expr).unwrap();
    assert_eq!(value, Value::Number(2.0));
}

#[test]
fn block_scoped_variable_does_not_leak_into_parent() {
    let program = parse_ok("var a = 1; { var a = 2; }");
    let mut interpreter = Interpreter::new();
    interpreter.interpret(&program).unwrap();

    let final_value_program = parse_ok("a;");
    let StmtKind::Expression(expr) = &final_value_program[0].kind else {
        panic!("expected expression statement");
    };
    let value = interpreter.evaluate_expression(expr).unwrap();
    assert_eq!(value, Value::Number(1.0));
}

#[test]
fn closures_keep_their_defining_environment_alive() {
    let declare = parse_ok(
        "fun make_counter() { var count = 0; fun increment() { count = count + 1; return count; } return increment; } var counter = make_counter();",
    );
    let mut interpreter = Interpreter::new();
    interpreter.interpret(&declare).unwrap();

    let (tokens, _) = tokenize("counter()");
    let call_expr = Parser::new(tokens).parse_expression_only().unwrap();
    assert!(matches!(call_expr.kind, ExprKind::Call { .. }));

    let first = interpreter.evaluate_expression(&call_expr).unwrap();
    let second = interpreter.evaluate_expression(&call_expr).unwrap();
    assert_eq!(first, Value::Number(1.0));
    assert_eq!(second, Value::Number(2.0));
}

#[test]
fn calling_with_wrong_number_of_arguments_is_a_runtime_error() {
    let declare = parse_ok("fun add(a, b) { return a + b; }");
    let mut interpreter = Interpreter::new();
    interpreter.interpret(&declare).unwrap();

    let (tokens, _) = tokenize("add(1)");
    let call_expr = Parser::new(tokens).parse_expression_only().unwrap();
    let error = interpreter.evaluate_expression(&call_expr).unwrap_err();
    assert_eq!(error.kind, RuntimeErrorKind::ArityMismatch);
}
