//! The Lox interpreter library.
//!
//! This library provides the core components of the Lox tree-walking
//! interpreter: lexical analysis, parsing, evaluation, and AST printing.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`parser`] - Recursive descent parser
//! - [`value`] - Runtime value representation
//! - [`environment`] - Lexical scope chain
//! - [`interpreter`] - Tree-walking evaluator
//! - [`printer`] - Parenthesized-prefix AST printer
//! - [`diagnostics`] - CLI error reporting
//!
//! # Example
//!
//! ```
//! use loxo::lexer::Lexer;
//! use loxo::parser::Parser;
//! use loxo::interpreter::Interpreter;
//!
//! let source = r#"print "Hello, world!";"#;
//!
//! let tokens = Lexer::new(source).tokenize();
//! let (program, errors) = Parser::new(tokens).parse();
//! assert!(errors.is_empty());
//!
//! Interpreter::new().interpret(&program).expect("runtime error");
//! ```

pub mod ast;
pub mod diagnostics;
pub mod environment;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token;
pub mod value;
