//! Parser helper methods for token navigation and basic operations.

use super::error::ParseError;
use super::Parser;
use crate::token::{Span, Token, TokenKind};

impl Parser {
    /// Returns a user-friendly display string for a token kind, used in
    /// "Expected X, found Y" diagnostics.
    pub(super) fn token_kind_display(kind: &TokenKind) -> String {
        match kind {
            TokenKind::LeftParen => "'('".to_string(),
            TokenKind::RightParen => "')'".to_string(),
            TokenKind::LeftBrace => "'{'".to_string(),
            TokenKind::RightBrace => "'}'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Dot => "'.'".to_string(),
            TokenKind::Minus => "'-'".to_string(),
            TokenKind::Plus => "'+'".to_string(),
            TokenKind::Semicolon => "';'".to_string(),
            TokenKind::Slash => "'/'".to_string(),
            TokenKind::Star => "'*'".to_string(),
            TokenKind::Bang => "'!'".to_string(),
            TokenKind::BangEqual => "'!='".to_string(),
            TokenKind::Equal => "'='".to_string(),
            TokenKind::EqualEqual => "'=='".to_string(),
            TokenKind::Greater => "'>'".to_string(),
            TokenKind::GreaterEqual => "'>='".to_string(),
            TokenKind::Less => "'<'".to_string(),
            TokenKind::LessEqual => "'<='".to_string(),
            TokenKind::Identifier(s) => format!("identifier '{}'", s),
            TokenKind::StringLiteral(s) => {
                if s.len() > 20 {
                    format!("string \"{}...\"", &s[..20])
                } else {
                    format!("string \"{}\"", s)
                }
            }
            TokenKind::NumberLiteral(n) => format!("number '{}'", n),
            TokenKind::And => "'and'".to_string(),
            TokenKind::Class => "'class'".to_string(),
            TokenKind::Else => "'else'".to_string(),
            TokenKind::False => "'false'".to_string(),
            TokenKind::Fun => "'fun'".to_string(),
            TokenKind::For => "'for'".to_string(),
            TokenKind::If => "'if'".to_string(),
            TokenKind::Nil => "'nil'".to_string(),
            TokenKind::Or => "'or'".to_string(),
            TokenKind::Print => "'print'".to_string(),
            TokenKind::Return => "'return'".to_string(),
            TokenKind::Super => "'super'".to_string(),
            TokenKind::This => "'this'".to_string(),
            TokenKind::True => "'true'".to_string(),
            TokenKind::Var => "'var'".to_string(),
            TokenKind::While => "'while'".to_string(),
            TokenKind::Error(message) => format!("invalid token ({})", message),
            TokenKind::Eof => "end of file".to_string(),
        }
    }

    /// Returns a reference to the current token.
    ///
    /// This method is safe to call at any time - if the position is past
    /// the end, it returns the last token (which should be `Eof`).
    pub(super) fn current(&self) -> &Token {
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the kind of the current token.
    pub(super) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Returns the span of the current token.
    pub(super) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Returns `true` if the current token is `Eof`.
    pub(super) fn is_eof(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Advances to the next token, returning the one just left behind.
    ///
    /// Does nothing but return the current token if already at `Eof`.
    pub(super) fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !self.is_eof() {
            self.pos += 1;
        }
        token
    }

    /// Returns `true` and does nothing else if the current token's kind
    /// matches `kind` exactly (ignoring any carried literal value).
    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    /// Consumes the current token and returns `true` if it matches any of
    /// `kinds`; otherwise leaves the cursor untouched and returns `false`.
    pub(super) fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|kind| self.check(kind)) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects the current token to match `expected` and advances.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the current token does not match.
    pub(super) fn expect(&mut self, expected: &TokenKind) -> Result<Token, ParseError> {
        if self.check(expected) {
            Ok(self.advance())
        } else {
            Err(ParseError {
                message: format!(
                    "Expected {}, found {}.",
                    Self::token_kind_display(expected),
                    Self::token_kind_display(self.current_kind())
                ),
                span: self.current_span(),
            })
        }
    }

    /// Expects an identifier token and returns it.
    pub(super) fn expect_identifier(&mut self) -> Result<Token, ParseError> {
        if matches!(self.current_kind(), TokenKind::Identifier(_)) {
            Ok(self.advance())
        } else {
            Err(ParseError {
                message: format!(
                    "Expected identifier, found {}.",
                    Self::token_kind_display(self.current_kind())
                ),
                span: self.current_span(),
            })
        }
    }

    /// Discards tokens until a plausible statement boundary is reached,
    /// after a parse error: either just past a consumed `;`, or right
    /// before a token that starts a new declaration or statement.
    ///
    /// This keeps a single source file's errors from cascading into one
    /// reported error per remaining token.
    pub(super) fn synchronize(&mut self) {
        while !self.is_eof() {
            let previous_kind = self.current_kind().clone();
            self.advance();
            if previous_kind == TokenKind::Semicolon {
                return;
            }
            match self.current_kind() {
                TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return => return,
                _ => {}
            }
        }
    }
}
