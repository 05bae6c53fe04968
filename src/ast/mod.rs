//! Abstract Syntax Tree definitions for Lox.
//!
//! This module defines the data structures that represent parsed Lox
//! programs. The AST is produced by the [`crate::parser`] and consumed by
//! the [`crate::interpreter`] and [`crate::printer`].
//!
//! # Structure
//!
//! A Lox program is simply `Vec<Stmt>` at the top level — there is no
//! separate `Program` wrapper type, since nothing besides a flat statement
//! list is needed to describe "what runs when the file is executed".
//!
//! - [`expr`] - Expression nodes and kinds
//! - [`stmt`] - Statement nodes and kinds
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::interpreter`] - Evaluates the AST
//! * [`crate::printer`] - Renders the AST in parenthesized prefix form

mod expr;
mod stmt;

pub use expr::{Expr, ExprKind};
pub use stmt::{Stmt, StmtKind};
