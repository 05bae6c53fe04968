//! The tree-walking evaluator.
//!
//! Executes a parsed Lox program directly over the AST: statements produce
//! effects (print output, environment mutation, control flow), expressions
//! reduce to a [`Value`]. There is no separate compilation step and no
//! bytecode.

use std::fmt;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::ast::{Expr, ExprKind, Stmt, StmtKind};
use crate::environment::Environment;
use crate::token::TokenKind;
use crate::value::{Callable, Value};

/// The taxonomy of errors that can occur while running a Lox program,
/// matching the runtime error kinds named in the error-handling design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    UndefinedVariable,
    OperandTypeMismatch,
    NotCallable,
    ArityMismatch,
}

/// A runtime error, carrying the line it occurred on so the CLI can print
/// `<message>\n[line L]` to stderr.
#[derive(Debug, Clone)]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub message: String,
    pub line: usize,
}

impl RuntimeError {
    fn new(kind: RuntimeErrorKind, message: impl Into<String>, line: usize) -> Self {
        RuntimeError {
            kind,
            message: message.into(),
            line,
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n[line {}]", self.message, self.line)
    }
}

impl std::error::Error for RuntimeError {}

/// Why execution of a statement sequence stopped early.
///
/// `return` is modeled as a non-local exit distinct from an error: it is
/// not a failure, just a signal that unwinds to the nearest enclosing
/// function call.
enum Unwind {
    Error(RuntimeError),
    Return(Value),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Unwind::Error(error)
    }
}

type ExecResult = Result<(), Unwind>;
type EvalResult = Result<Value, RuntimeError>;

pub struct Interpreter {
    globals: Environment,
    environment: Environment,
}

impl Interpreter {
    pub fn new() -> Self {
        let globals = Environment::global();
        globals.define("clock", Value::Callable(Rc::new(NativeClock)));
        Interpreter {
            environment: globals.clone(),
            globals,
        }
    }

    /// Runs a full program: every top-level statement in order.
    ///
    /// A `return` reaching the top level has no enclosing call to unwind
    /// to; the parser rejects `return` outside a function, so this can only
    /// happen for an internally constructed AST and is treated as a no-op.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            match self.execute(statement) {
                Ok(()) => {}
                Err(Unwind::Error(error)) => return Err(error),
                Err(Unwind::Return(_)) => {}
            }
        }
        Ok(())
    }

    /// Evaluates a single expression (used by the `evaluate` subcommand).
    pub fn evaluate_expression(&mut self, expr: &Expr) -> EvalResult {
        self.evaluate(expr)
    }

    fn execute(&mut self, stmt: &Stmt) -> ExecResult {
        match &stmt.kind {
            StmtKind::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(())
            }
            StmtKind::Print(expr) => {
                let value = self.evaluate(expr)?;
                println!("{}", value);
                Ok(())
            }
            StmtKind::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.environment.define(identifier_name(name), value);
                Ok(())
            }
            StmtKind::Block(statements) => {
                let child = self.environment.child();
                self.execute_block(statements, child)
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            }
            StmtKind::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    self.execute(body)?;
                }
                Ok(())
            }
            StmtKind::Function { name, params, body } => {
                let function = LoxFunction {
                    name: identifier_name(name),
                    params: params.iter().map(identifier_name).collect(),
                    body: Rc::new(body.clone()),
                    closure: self.environment.clone(),
                };
                self.environment
                    .define(identifier_name(name), Value::Callable(Rc::new(function)));
                Ok(())
            }
            StmtKind::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                Err(Unwind::Return(value))
            }
        }
    }

    /// Executes `statements` in `environment`, always restoring the
    /// interpreter's previous environment before returning — on success, on
    /// a runtime error, and on a `return` unwind alike — so a block never
    /// leaks its scope past its own exit, whichever path it exits by.
    fn execute_block(&mut self, statements: &[Stmt], environment: Environment) -> ExecResult {
        let previous = std::mem::replace(&mut self.environment, environment);
        let result = (|| {
            for statement in statements {
                self.execute(statement)?;
            }
            Ok(())
        })();
        self.environment = previous;
        result
    }

    fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Literal(value) => Ok(value.clone()),
            ExprKind::Grouping(inner) => self.evaluate(inner),
            ExprKind::Variable(name) => self
                .environment
                .get(&identifier_name(name))
                .ok_or_else(|| {
                    RuntimeError::new(
                        RuntimeErrorKind::UndefinedVariable,
                        format!("Undefined variable '{}'.", identifier_name(name)),
                        name.line(),
                    )
                }),
            ExprKind::Assignment { name, value } => {
                let value = self.evaluate(value)?;
                if self.environment.assign(&identifier_name(name), value.clone()) {
                    Ok(value)
                } else {
                    Err(RuntimeError::new(
                        RuntimeErrorKind::UndefinedVariable,
                        format!("Undefined variable '{}'.", identifier_name(name)),
                        name.line(),
                    ))
                }
            }
            ExprKind::Unary { op, operand } => self.evaluate_unary(op, operand),
            ExprKind::Binary { left, op, right } => self.evaluate_binary(left, op, right),
            ExprKind::Logical { left, op, right } => self.evaluate_logical(left, op, right),
            ExprKind::Call {
                callee,
                paren,
                arguments,
            } => self.evaluate_call(callee, paren, arguments),
        }
    }

    fn evaluate_unary(&mut self, op: &crate::token::Token, operand: &Expr) -> EvalResult {
        let value = self.evaluate(operand)?;
        match op.kind {
            TokenKind::Minus => match value {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::new(
                    RuntimeErrorKind::OperandTypeMismatch,
                    "Operand must be a number.",
                    op.line(),
                )),
            },
            TokenKind::Bang => Ok(Value::Boolean(!value.is_truthy())),
            _ => unreachable!("parser only produces Minus/Bang as unary operators"),
        }
    }

    fn evaluate_logical(
        &mut self,
        left: &Expr,
        op: &crate::token::Token,
        right: &Expr,
    ) -> EvalResult {
        let left_value = self.evaluate(left)?;
        match op.kind {
            TokenKind::Or if left_value.is_truthy() => Ok(left_value),
            TokenKind::Or => self.evaluate(right),
            TokenKind::And if !left_value.is_truthy() => Ok(left_value),
            TokenKind::And => self.evaluate(right),
            _ => unreachable!("parser only produces And/Or as logical operators"),
        }
    }

    fn evaluate_binary(
        &mut self,
        left: &Expr,
        op: &crate::token::Token,
        right: &Expr,
    ) -> EvalResult {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;

        match op.kind {
            TokenKind::Plus => match (&left, &right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::String(a), Value::String(b)) => Ok(Value::String(format!("{}{}", a, b))),
                _ => Err(RuntimeError::new(
                    RuntimeErrorKind::OperandTypeMismatch,
                    "Operands must be two numbers or two strings.",
                    op.line(),
                )),
            },
            TokenKind::Minus => numeric(left, right, op.line(), |a, b| Value::Number(a - b)),
            TokenKind::Star => numeric(left, right, op.line(), |a, b| Value::Number(a * b)),
            TokenKind::Slash => numeric(left, right, op.line(), |a, b| Value::Number(a / b)),
            TokenKind::Greater => numeric(left, right, op.line(), |a, b| Value::Boolean(a > b)),
            TokenKind::GreaterEqual => numeric(left, right, op.line(), |a, b| Value::Boolean(a >= b)),
            TokenKind::Less => numeric(left, right, op.line(), |a, b| Value::Boolean(a < b)),
            TokenKind::LessEqual => numeric(left, right, op.line(), |a, b| Value::Boolean(a <= b)),
            TokenKind::EqualEqual => Ok(Value::Boolean(left == right)),
            TokenKind::BangEqual => Ok(Value::Boolean(left != right)),
            _ => unreachable!("parser only produces arithmetic/comparison/equality as binary operators"),
        }
    }

    fn evaluate_call(
        &mut self,
        callee: &Expr,
        paren: &crate::token::Token,
        arguments: &[Expr],
    ) -> EvalResult {
        let callee_value = self.evaluate(callee)?;
        let mut argument_values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            argument_values.push(self.evaluate(argument)?);
        }

        let Value::Callable(function) = callee_value else {
            return Err(RuntimeError::new(
                RuntimeErrorKind::NotCallable,
                "Can only call functions and classes.",
                paren.line(),
            ));
        };

        if argument_values.len() != function.arity() {
            return Err(RuntimeError::new(
                RuntimeErrorKind::ArityMismatch,
                format!(
                    "Expected {} arguments but got {}.",
                    function.arity(),
                    argument_values.len()
                ),
                paren.line(),
            ));
        }

        function.call(self, argument_values)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn numeric(
    left: Value,
    right: Value,
    line: usize,
    op: impl Fn(f64, f64) -> Value,
) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(op(a, b)),
        _ => Err(RuntimeError::new(
            RuntimeErrorKind::OperandTypeMismatch,
            "Operands must be numbers.",
            line,
        )),
    }
}

fn identifier_name(token: &crate::token::Token) -> String {
    match &token.kind {
        TokenKind::Identifier(name) => name.clone(),
        _ => token.lexeme.clone(),
    }
}

/// A user-defined function: its parameter names, body, and the environment
/// it closed over at the point it was declared.
#[derive(Debug)]
struct LoxFunction {
    name: String,
    params: Vec<String>,
    body: Rc<Vec<Stmt>>,
    closure: Environment,
}

impl Callable for LoxFunction {
    fn arity(&self) -> usize {
        self.params.len()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Value>) -> Result<Value, RuntimeError> {
        let call_scope = self.closure.child();
        for (param, argument) in self.params.iter().zip(arguments) {
            call_scope.define(param.clone(), argument);
        }

        match interpreter.execute_block(&self.body, call_scope) {
            Ok(()) => Ok(Value::Nil),
            Err(Unwind::Return(value)) => Ok(value),
            Err(Unwind::Error(error)) => Err(error),
        }
    }
}

/// `clock()`: seconds since an arbitrary epoch, for coarse timing in Lox
/// programs. The only native function seeded into the global scope.
#[derive(Debug)]
struct NativeClock;

impl Callable for NativeClock {
    fn arity(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "clock"
    }

    fn call(&self, _interpreter: &mut Interpreter, _arguments: Vec<Value>) -> Result<Value, RuntimeError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Ok(Value::Number(elapsed.as_secs_f64()))
    }
}

impl fmt::Debug for dyn Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn run(source: &str) -> Result<(), RuntimeError> {
        let tokens = Lexer::new(source).tokenize();
        let (statements, errors) = Parser::new(tokens).parse();
        assert!(errors.is_empty(), "unexpected parse errors: {:?}", errors);
        Interpreter::new().interpret(&statements)
    }

    #[test]
    fn arithmetic_precedence_matches_grammar() {
        // Can't capture stdout here, but a non-erroring run proves the
        // expression evaluates without type errors.
        assert!(run("print 1 + 2 * 3;").is_ok());
    }

    #[test]
    fn concatenation_of_two_strings_succeeds() {
        assert!(run(r#"print "a" + "b";"#).is_ok());
    }

    #[test]
    fn mixed_type_addition_is_a_runtime_error() {
        let error = run(r#"print "a" + 1;"#).unwrap_err();
        assert_eq!(error.kind, RuntimeErrorKind::OperandTypeMismatch);
        assert_eq!(error.message, "Operands must be two numbers or two strings.");
    }

    #[test]
    fn undefined_variable_read_is_a_runtime_error() {
        let error = run("print x;").unwrap_err();
        assert_eq!(error.kind, RuntimeErrorKind::UndefinedVariable);
    }

    #[test]
    fn assignment_to_undefined_variable_does_not_autodeclare() {
        let error = run("x = 1;").unwrap_err();
        assert_eq!(error.kind, RuntimeErrorKind::UndefinedVariable);
    }

    #[test]
    fn block_scope_shadows_and_restores() {
        assert!(run("var a = 1; { var a = 2; } print a;").is_ok());
    }

    #[test]
    fn division_by_zero_yields_infinity_not_an_error() {
        assert!(run("print 1 / 0;").is_ok());
    }

    #[test]
    fn calling_a_non_callable_value_is_a_runtime_error() {
        let error = run("var x = 1; x();").unwrap_err();
        assert_eq!(error.kind, RuntimeErrorKind::NotCallable);
    }

    #[test]
    fn calling_with_wrong_arity_is_a_runtime_error() {
        let error = run("fun f(a, b) { return a + b; } f(1);").unwrap_err();
        assert_eq!(error.kind, RuntimeErrorKind::ArityMismatch);
    }

    #[test]
    fn closures_capture_their_defining_environment() {
        assert!(run(
            "fun mk() { var x = 10; fun g() { return x; } return g; } print mk()();"
        )
        .is_ok());
    }

    #[test]
    fn logical_or_short_circuits_and_returns_operand_value() {
        assert!(run(r#"print "a" or "b";"#).is_ok());
    }

    #[test]
    fn for_loop_desugars_and_runs_to_completion() {
        assert!(run("for (var i = 0; i < 3; i = i + 1) print i;").is_ok());
    }
}
