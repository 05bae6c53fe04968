//! Lexical analyzer for Lox source code.
//!
//! This module provides the [`Lexer`] struct which converts source code text
//! into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The lexer performs the following tasks:
//! - Scans the input character by character
//! - Recognizes identifiers, keywords, literals, and punctuation
//! - Tracks source positions for error reporting
//! - Skips whitespace and comments
//!
//! Unlike a lexer that aborts on the first bad byte, this one never stops:
//! an unrecognized character or an unterminated string produces a
//! [`TokenKind::Error`] token in the stream and a matching [`LexError`] is
//! recorded, but scanning continues to the end of input. Callers check
//! [`Lexer::errors`] after [`Lexer::tokenize`] to decide whether lexing
//! succeeded.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for lexical analysis
//! - `cursor` - Position tracking and character navigation
//! - `skip` - Whitespace and comment handling
//! - `tokens` - Token recognition and reading
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod error;
mod skip;
mod tokens;

#[cfg(test)]
mod tests;

pub use error::LexError;

use crate::token::{Span, Token, TokenKind};

/// A lexical analyzer that tokenizes Lox source code.
///
/// The `Lexer` maintains its position within the input and tracks line/column
/// numbers for error reporting. It is designed to be used once per source
/// file.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties the lexer to the input string slice,
/// ensuring the input remains valid while the lexer is in use.
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    input: &'a str,
    /// Current byte position in the input.
    pos: usize,
    /// Current line number (1-indexed).
    line: usize,
    /// Current column number (1-indexed).
    column: usize,
    /// Errors observed so far; accumulated rather than returned early.
    errors: Vec<LexError>,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
            errors: Vec::new(),
        }
    }

    /// Tokenizes the entire input and returns a vector of tokens ending with
    /// a single [`TokenKind::Eof`].
    ///
    /// This never fails: lexical errors are accumulated and retrievable via
    /// [`Lexer::errors`] afterwards, each represented in the returned stream
    /// as a [`TokenKind::Error`] token at the point it occurred.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments();

            if self.is_eof() {
                let span = Span::new(self.pos, self.pos, self.line, self.column);
                tokens.push(Token::new(TokenKind::Eof, "", span));
                break;
            }

            tokens.push(self.next_token());
        }

        tokens
    }

    /// Errors observed during the most recent [`Lexer::tokenize`] call.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }
}
