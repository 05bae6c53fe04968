//! Whitespace and comment skipping for the lexer.
//!
//! This module provides methods for skipping over whitespace characters
//! and line comments during tokenization.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments in a loop.
    ///
    /// This method handles the case where a comment might be followed by
    /// whitespace, which might be followed by another comment, etc.
    pub(super) fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.skip_whitespace();
            if !self.skip_comment() {
                break;
            }
        }
    }

    /// Skips consecutive whitespace characters, including newlines, vertical
    /// tabs, and form feeds. `advance` bumps the line counter on each of
    /// those three, so no separate bookkeeping is needed here.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char() {
            match c {
                ' ' | '\t' | '\r' | '\n' | '\x0b' | '\x0c' => self.advance(),
                _ => break,
            }
        }
    }

    /// Skips a line comment if one is present at the current position.
    ///
    /// Line comments start with `//` and extend to (but not including) the
    /// end of the line; the trailing newline is left for the whitespace
    /// skipper so line tracking stays in one place.
    ///
    /// # Returns
    ///
    /// `true` if a comment was skipped, `false` otherwise.
    fn skip_comment(&mut self) -> bool {
        if self.current_char() == Some('/') && self.peek_char() == Some('/') {
            while let Some(c) = self.current_char() {
                if c == '\n' {
                    break;
                }
                self.advance();
            }
            true
        } else {
            false
        }
    }
}
