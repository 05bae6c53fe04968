//! Token reading and recognition for the lexer.
//!
//! This module provides methods for reading various token types from the
//! input: punctuation, operators, string and number literals, and
//! identifiers/keywords.

use super::Lexer;
use super::error::LexError;
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Creates a single-character token and advances the lexer.
    fn single_char_token(
        &mut self,
        kind: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        let lexeme = self.input[start_pos..self.pos].to_string();
        Token::new(kind, lexeme, span)
    }

    /// Builds a one- or two-character operator token, consuming a trailing
    /// `=` when present.
    fn one_or_two_char_token(
        &mut self,
        one: TokenKind,
        two: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        let kind = if self.advance_if('=') { two } else { one };
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        let lexeme = self.input[start_pos..self.pos].to_string();
        Token::new(kind, lexeme, span)
    }

    /// Reads and returns the next token from the input.
    ///
    /// This method is called repeatedly by [`tokenize`](super::Lexer::tokenize)
    /// to produce the token stream. It assumes that whitespace and comments
    /// have already been skipped. It never fails: on an unrecognized byte it
    /// returns a [`TokenKind::Error`] token rather than propagating a
    /// [`LexError`], so a single bad character cannot stop tokenization.
    pub(super) fn next_token(&mut self) -> Token {
        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        let c = match self.current_char() {
            Some(c) => c,
            None => {
                let span = Span::new(start_pos, start_pos, start_line, start_column);
                return Token::new(TokenKind::Eof, "", span);
            }
        };

        match c {
            '(' => self.single_char_token(TokenKind::LeftParen, start_pos, start_line, start_column),
            ')' => {
                self.single_char_token(TokenKind::RightParen, start_pos, start_line, start_column)
            }
            '{' => self.single_char_token(TokenKind::LeftBrace, start_pos, start_line, start_column),
            '}' => {
                self.single_char_token(TokenKind::RightBrace, start_pos, start_line, start_column)
            }
            ',' => self.single_char_token(TokenKind::Comma, start_pos, start_line, start_column),
            '.' => self.single_char_token(TokenKind::Dot, start_pos, start_line, start_column),
            '-' => self.single_char_token(TokenKind::Minus, start_pos, start_line, start_column),
            '+' => self.single_char_token(TokenKind::Plus, start_pos, start_line, start_column),
            ';' => {
                self.single_char_token(TokenKind::Semicolon, start_pos, start_line, start_column)
            }
            '*' => self.single_char_token(TokenKind::Star, start_pos, start_line, start_column),
            '/' => self.single_char_token(TokenKind::Slash, start_pos, start_line, start_column),
            '!' => self.one_or_two_char_token(
                TokenKind::Bang,
                TokenKind::BangEqual,
                start_pos,
                start_line,
                start_column,
            ),
            '=' => self.one_or_two_char_token(
                TokenKind::Equal,
                TokenKind::EqualEqual,
                start_pos,
                start_line,
                start_column,
            ),
            '<' => self.one_or_two_char_token(
                TokenKind::Less,
                TokenKind::LessEqual,
                start_pos,
                start_line,
                start_column,
            ),
            '>' => self.one_or_two_char_token(
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                start_pos,
                start_line,
                start_column,
            ),
            '"' => self.read_string(start_pos, start_line, start_column),
            _ if c.is_ascii_digit() => self.read_number(start_pos, start_line, start_column),
            _ if c.is_alphabetic() || c == '_' || c == '`' => {
                self.read_identifier(start_pos, start_line, start_column)
            }
            _ => {
                self.advance();
                let span = Span::new(start_pos, self.pos, start_line, start_column);
                let error = LexError::unexpected_character(c, span);
                let lexeme = self.input[start_pos..self.pos].to_string();
                self.errors.push(error.clone());
                Token::new(TokenKind::Error(error.message), lexeme, span)
            }
        }
    }

    /// Reads a string literal from the input.
    ///
    /// The opening double quote should be at the current position. The
    /// returned token's lexeme includes both quotes; its attached value
    /// (in [`TokenKind::StringLiteral`]) excludes them. A newline inside the
    /// literal is permitted and increments the line counter, matching the
    /// reference Lox scanner.
    fn read_string(&mut self, start_pos: usize, start_line: usize, start_column: usize) -> Token {
        self.advance(); // opening quote

        while let Some(c) = self.current_char() {
            if c == '"' {
                break;
            }
            self.advance();
        }

        if self.is_eof() {
            let span = Span::new(start_pos, self.pos, start_line, start_column);
            let error = LexError::unterminated_string(span);
            let lexeme = self.input[start_pos..self.pos].to_string();
            self.errors.push(error.clone());
            return Token::new(TokenKind::Error(error.message), lexeme, span);
        }

        self.advance(); // closing quote
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        let lexeme = self.input[start_pos..self.pos].to_string();
        let value = self.input[start_pos + 1..self.pos - 1].to_string();
        Token::new(TokenKind::StringLiteral(value), lexeme, span)
    }

    /// Reads a numeric literal: a run of digits, optionally followed by a
    /// `.` and a further run of digits. The dot is only consumed as a
    /// decimal point when followed by at least one digit, so `1.` parses as
    /// `1` followed by a `Dot` token (method-call-style access on a number
    /// literal, as in the reference grammar).
    fn read_number(&mut self, start_pos: usize, start_line: usize, start_column: usize) -> Token {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.current_char() == Some('.') && self.peek_char().is_some_and(|c| c.is_ascii_digit())
        {
            self.advance(); // '.'
            while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let span = Span::new(start_pos, self.pos, start_line, start_column);
        let lexeme = self.input[start_pos..self.pos].to_string();
        let value: f64 = lexeme.parse().expect("scanned digits always parse as f64");
        Token::new(TokenKind::NumberLiteral(value), lexeme, span)
    }

    /// Reads an identifier or keyword from the input.
    ///
    /// Identifiers start with a letter, underscore, or backtick, and
    /// continue with letters, digits, underscores, or backticks. If the
    /// resulting lexeme matches one of the sixteen reserved words, the
    /// corresponding keyword kind is returned instead.
    fn read_identifier(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while let Some(c) = self.current_char() {
            if c.is_alphanumeric() || c == '_' || c == '`' {
                self.advance();
            } else {
                break;
            }
        }

        let lexeme = self.input[start_pos..self.pos].to_string();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        let kind = TokenKind::keyword(&lexeme).unwrap_or_else(|| TokenKind::Identifier(lexeme.clone()));
        Token::new(kind, lexeme, span)
    }
}
