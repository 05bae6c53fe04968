//! Lexical analysis error types.

use crate::token::Span;

/// An error that occurred during lexical analysis.
///
/// `LexError` contains a human-readable message and the source location
/// where the error occurred, enabling rich error reporting with tools
/// like [`ariadne`].
///
/// The lexer never aborts on a `LexError`; it records one and emits an
/// [`TokenKind::Error`](crate::token::TokenKind::Error) token in its place
/// so scanning continues.
///
/// [`ariadne`]: https://docs.rs/ariadne
#[derive(Debug, Clone)]
pub struct LexError {
    /// A human-readable description of the error.
    pub message: String,
    /// The source location where the error occurred.
    pub span: Span,
}

impl LexError {
    pub(super) fn unexpected_character(c: char, span: Span) -> Self {
        LexError {
            message: format!("Unexpected character: {}", c),
            span,
        }
    }

    pub(super) fn unterminated_string(span: Span) -> Self {
        LexError {
            message: "Unterminated string.".to_string(),
            span,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] Error: {}", self.span.line, self.message)
    }
}

impl std::error::Error for LexError {}
