//! Parse error types.

use crate::token::Span;

/// An error that occurred during parsing.
///
/// `ParseError` contains a human-readable message and the source location
/// where the error occurred, enabling rich error reporting.
///
/// The parser never stops at the first `ParseError`: it records one,
/// [synchronizes](super::Parser::synchronize) to the next likely statement
/// boundary, and keeps parsing, so a single run can surface more than one
/// syntax error.
///
/// # See Also
///
/// * [`crate::lexer::LexError`] - Similar error type for lexical errors
#[derive(Debug, Clone)]
pub struct ParseError {
    /// A human-readable description of the error.
    pub message: String,
    /// The source location where the error occurred.
    pub span: Span,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] Error: {}", self.span.line, self.message)
    }
}

impl std::error::Error for ParseError {}
