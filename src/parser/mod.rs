//! Parser for the Lox programming language.
//!
//! This module provides the [`Parser`] struct which transforms a token
//! stream into a sequence of statements ([`crate::ast::Stmt`]).
//!
//! # Overview
//!
//! The parser implements a recursive descent strategy with precedence
//! climbing for expressions. It consumes tokens produced by the
//! [`crate::lexer`] and builds an AST suitable for direct tree-walking
//! evaluation.
//!
//! Unlike a parser that aborts on the first syntax error, this one
//! accumulates errors: after a production fails, [`Parser::synchronize`]
//! discards tokens up to the next likely statement boundary and parsing
//! resumes, so [`Parser::parse`] can report more than one error per run.
//!
//! # Grammar
//!
//! ```text
//! program     → declaration* EOF
//! declaration → funDecl | varDecl | statement
//! funDecl     → "fun" IDENTIFIER "(" parameters? ")" block
//! parameters  → IDENTIFIER ( "," IDENTIFIER )*
//! varDecl     → "var" IDENTIFIER ( "=" expression )? ";"
//! statement   → exprStmt | forStmt | ifStmt | printStmt
//!             | returnStmt | whileStmt | block
//! exprStmt    → expression ";"
//! forStmt     → "for" "(" ( varDecl | exprStmt | ";" )
//!               expression? ";" expression? ")" statement
//! ifStmt      → "if" "(" expression ")" statement ( "else" statement )?
//! printStmt   → "print" expression ";"
//! returnStmt  → "return" expression? ";"
//! whileStmt   → "while" "(" expression ")" statement
//! block       → "{" declaration* "}"
//!
//! expression  → assignment
//! assignment  → IDENTIFIER "=" assignment | logic_or
//! logic_or    → logic_and ( "or" logic_and )*
//! logic_and   → equality ( "and" equality )*
//! equality    → comparison ( ( "!=" | "==" ) comparison )*
//! comparison  → term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term        → factor ( ( "-" | "+" ) factor )*
//! factor      → unary ( ( "/" | "*" ) unary )*
//! unary       → ( "!" | "-" ) unary | call
//! call        → primary ( "(" arguments? ")" )*
//! arguments   → expression ( "," expression )*
//! primary     → NUMBER | STRING | "true" | "false" | "nil"
//!             | "(" expression ")" | IDENTIFIER
//! ```
//!
//! `for` has no dedicated AST node: [`Parser::for_statement`] desugars it
//! into the `while`/`block` nodes that already exist.
//!
//! # Module Structure
//!
//! - [`error`] - Parse error types
//! - `helpers` - Token navigation and basic parsing operations
//! - `stmt` - Statement and declaration parsing
//! - `expr` - Expression parsing
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::lexer`] - Produces the token stream consumed by the parser
//! * [`crate::ast`] - Defines the AST types produced by the parser
//! * [`crate::interpreter`] - Evaluates the AST

mod error;
mod expr;
mod helpers;
mod stmt;

#[cfg(test)]
mod tests;

pub use error::ParseError;

use crate::ast::Stmt;
use crate::token::Token;

/// A recursive descent parser for the Lox language.
///
/// The parser maintains a position within the token stream and provides
/// methods to parse various grammar productions.
///
/// # Usage
///
/// Create a parser with [`Parser::new`], then call [`Parser::parse`] to
/// produce a statement list and any accumulated errors.
pub struct Parser {
    /// The token stream to parse.
    tokens: Vec<Token>,
    /// Current position in the token stream.
    pos: usize,
    /// How many function bodies are currently being parsed. `return` is
    /// only legal while this is above zero.
    function_depth: usize,
}

impl Parser {
    /// Creates a new parser from a token list.
    ///
    /// # Panics
    /// Panics if the token list is empty. The lexer should always
    /// produce at least an Eof token.
    pub fn new(tokens: Vec<Token>) -> Self {
        assert!(!tokens.is_empty(), "Token list must not be empty");
        Parser {
            tokens,
            pos: 0,
            function_depth: 0,
        }
    }

    /// Parses the entire token stream into a flat statement list.
    ///
    /// This never fails outright: a `declaration` that can't be parsed is
    /// recorded as a [`ParseError`] and the parser resynchronizes to the
    /// next statement boundary rather than stopping, so the returned error
    /// list may hold more than one entry.
    pub fn parse(&mut self) -> (Vec<Stmt>, Vec<ParseError>) {
        let mut statements = Vec::new();
        let mut errors = Vec::new();

        while !self.is_eof() {
            match self.declaration() {
                Ok(stmt) => statements.push(stmt),
                Err(error) => {
                    errors.push(error);
                    self.synchronize();
                }
            }
        }

        (statements, errors)
    }

    /// Parses a single expression, ignoring one optional trailing `;`.
    ///
    /// Used by the `evaluate` subcommand, which operates on a bare
    /// expression rather than a full program.
    pub fn parse_expression_only(&mut self) -> Result<crate::ast::Expr, ParseError> {
        let expr = self.expression()?;
        if self.check(&crate::token::TokenKind::Semicolon) {
            self.advance();
        }
        Ok(expr)
    }
}
