//! Statement nodes for the Lox AST.

use crate::token::{Span, Token};

use super::expr::Expr;

/// A statement in the Lox language, carrying its source location.
#[derive(Debug, Clone)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

#[derive(Debug, Clone)]
pub enum StmtKind {
    /// An expression evaluated for its side effects; the result is discarded.
    Expression(Expr),

    /// `print expr;`
    Print(Expr),

    /// `var name;` or `var name = init;`. An omitted initializer binds the
    /// name to `nil`.
    Var { name: Token, initializer: Option<Expr> },

    /// `{ statements... }`. Executing a block pushes a new scope before
    /// running its statements and pops it on the way out, including on an
    /// error or a `return` unwind.
    Block(Vec<Stmt>),

    /// `if (cond) then_branch else else_branch`.
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },

    /// `while (cond) body`.
    While { condition: Expr, body: Box<Stmt> },

    /// `fun name(params) body`. The body is always a `Block`.
    Function {
        name: Token,
        params: Vec<Token>,
        body: Vec<Stmt>,
    },

    /// `return expr;` or `return;`. `keyword` is kept for reporting a
    /// `return` used outside a function.
    Return { keyword: Token, value: Option<Expr> },
}
