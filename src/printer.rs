//! Renders a parsed AST in the fully-parenthesized prefix form used by the
//! `parse` subcommand: `(+ 1 2)`, `(group (- 3))`, and so on.

use crate::ast::{Expr, ExprKind, Stmt, StmtKind};
use crate::value::{format_number_literal, Value};

/// Prints every statement in `program`, one rendering per statement,
/// matching how `parse` lists top-level declarations one per line.
pub fn print_program(program: &[Stmt]) -> Vec<String> {
    program.iter().map(print_stmt).collect()
}

pub fn print_stmt(stmt: &Stmt) -> String {
    match &stmt.kind {
        StmtKind::Expression(expr) => print_expr(expr),
        StmtKind::Print(expr) => parenthesize("print", &[expr]),
        StmtKind::Var {
            name,
            initializer: Some(init),
        } => format!("(var {} {})", name.lexeme, print_expr(init)),
        StmtKind::Var { name, initializer: None } => format!("(var {})", name.lexeme),
        StmtKind::Block(statements) => {
            let rendered: Vec<String> = statements.iter().map(print_stmt).collect();
            format!("(block {})", rendered.join(" "))
        }
        StmtKind::If {
            condition,
            then_branch,
            else_branch: Some(else_branch),
        } => format!(
            "(if {} {} {})",
            print_expr(condition),
            print_stmt(then_branch),
            print_stmt(else_branch)
        ),
        StmtKind::If {
            condition,
            then_branch,
            else_branch: None,
        } => format!("(if {} {})", print_expr(condition), print_stmt(then_branch)),
        StmtKind::While { condition, body } => {
            format!("(while {} {})", print_expr(condition), print_stmt(body))
        }
        StmtKind::Function { name, params, body } => {
            let param_names: Vec<&str> = params.iter().map(|p| p.lexeme.as_str()).collect();
            let rendered_body: Vec<String> = body.iter().map(print_stmt).collect();
            format!(
                "(fun {}({}) {})",
                name.lexeme,
                param_names.join(" "),
                rendered_body.join(" ")
            )
        }
        StmtKind::Return { value: Some(value), .. } => format!("(return {})", print_expr(value)),
        StmtKind::Return { value: None, .. } => "(return)".to_string(),
    }
}

pub fn print_expr(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Literal(value) => print_literal(value),
        ExprKind::Grouping(inner) => format!("(group {})", print_expr(inner)),
        ExprKind::Unary { op, operand } => parenthesize(&op.lexeme, &[operand]),
        ExprKind::Binary { left, op, right } => parenthesize(&op.lexeme, &[left, right]),
        ExprKind::Logical { left, op, right } => parenthesize(&op.lexeme, &[left, right]),
        ExprKind::Variable(name) => name.lexeme.clone(),
        ExprKind::Assignment { name, value } => {
            format!("(= {} {})", name.lexeme, print_expr(value))
        }
        ExprKind::Call {
            callee, arguments, ..
        } => {
            let rendered_args: Vec<String> = arguments.iter().map(print_expr).collect();
            if rendered_args.is_empty() {
                format!("(call {})", print_expr(callee))
            } else {
                format!("(call {} {})", print_expr(callee), rendered_args.join(" "))
            }
        }
    }
}

fn print_literal(value: &Value) -> String {
    match value {
        Value::Nil => "nil".to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Number(n) => format_number_literal(*n),
        Value::String(s) => s.clone(),
        Value::Callable(callable) => format!("<fn {}>", callable.name()),
    }
}

fn parenthesize(name: &str, exprs: &[&Expr]) -> String {
    let rendered: Vec<String> = exprs.iter().map(|e| print_expr(e)).collect();
    format!("({} {})", name, rendered.join(" "))
}
