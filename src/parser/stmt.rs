//! Statement and declaration parsing.

use super::error::ParseError;
use super::Parser;
use crate::ast::{Expr, ExprKind, Stmt, StmtKind};
use crate::token::{Span, TokenKind};

fn span_over(start: &Span, end: &Span) -> Span {
    Span::new(start.start, end.end, start.line, start.column)
}

impl Parser {
    /// `declaration → funDecl | varDecl | statement`
    pub(super) fn declaration(&mut self) -> Result<Stmt, ParseError> {
        if self.check(&TokenKind::Fun) {
            self.advance();
            return self.function_declaration();
        }
        if self.check(&TokenKind::Var) {
            self.advance();
            return self.var_declaration();
        }
        self.statement()
    }

    /// `"fun" IDENTIFIER "(" parameters? ")" block`
    fn function_declaration(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current_span();
        let name = self.expect_identifier()?;
        self.expect(&TokenKind::LeftParen)?;

        let mut params = Vec::new();
        if !self.check(&TokenKind::RightParen) {
            loop {
                if params.len() >= 255 {
                    return Err(ParseError {
                        message: "Can't have more than 255 parameters.".to_string(),
                        span: self.current_span(),
                    });
                }
                params.push(self.expect_identifier()?);
                if !self.match_any(&[TokenKind::Comma]) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RightParen)?;
        self.expect(&TokenKind::LeftBrace)?;
        self.function_depth += 1;
        let body = self.block_statements();
        self.function_depth -= 1;
        let body = body?;
        let end = self.previous_span();

        Ok(Stmt::new(
            StmtKind::Function { name, params, body },
            span_over(&start, &end),
        ))
    }

    /// `"var" IDENTIFIER ( "=" expression )? ";"`
    fn var_declaration(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current_span();
        let name = self.expect_identifier()?;

        let initializer = if self.match_any(&[TokenKind::Equal]) {
            Some(self.expression()?)
        } else {
            None
        };

        let end = self.expect(&TokenKind::Semicolon)?.span;
        Ok(Stmt::new(
            StmtKind::Var { name, initializer },
            span_over(&start, &end),
        ))
    }

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        if self.check(&TokenKind::If) {
            self.advance();
            return self.if_statement();
        }
        if self.check(&TokenKind::While) {
            self.advance();
            return self.while_statement();
        }
        if self.check(&TokenKind::For) {
            self.advance();
            return self.for_statement();
        }
        if self.check(&TokenKind::Print) {
            self.advance();
            return self.print_statement();
        }
        if self.check(&TokenKind::Return) {
            let keyword = self.advance();
            return self.return_statement(keyword);
        }
        if self.check(&TokenKind::LeftBrace) {
            let start = self.advance().span;
            let statements = self.block_statements()?;
            let end = self.previous_span();
            return Ok(Stmt::new(StmtKind::Block(statements), span_over(&start, &end)));
        }
        self.expression_statement()
    }

    /// `"{" declaration* "}"`, consuming the opening brace beforehand and the
    /// closing one here.
    pub(super) fn block_statements(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        while !self.check(&TokenKind::RightBrace) && !self.is_eof() {
            statements.push(self.declaration()?);
        }
        self.expect(&TokenKind::RightBrace)?;
        Ok(statements)
    }

    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        let start = self.previous_span();
        self.expect(&TokenKind::LeftParen)?;
        let condition = self.expression()?;
        self.expect(&TokenKind::RightParen)?;
        let then_branch = Box::new(self.statement()?);

        let else_branch = if self.check(&TokenKind::Else) {
            self.advance();
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        let end = self.previous_span();
        Ok(Stmt::new(
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            },
            span_over(&start, &end),
        ))
    }

    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        let start = self.previous_span();
        self.expect(&TokenKind::LeftParen)?;
        let condition = self.expression()?;
        self.expect(&TokenKind::RightParen)?;
        let body = Box::new(self.statement()?);
        let end = self.previous_span();
        Ok(Stmt::new(StmtKind::While { condition, body }, span_over(&start, &end)))
    }

    /// `"for" "(" ( varDecl | exprStmt | ";" ) expression? ";" expression? ")" statement`
    ///
    /// Desugars directly to `while`: there is no `For` AST node. The
    /// initializer, if present, runs once in a wrapping block so a
    /// variable it declares is scoped to the loop; the increment, if
    /// present, is appended to the end of the loop body.
    fn for_statement(&mut self) -> Result<Stmt, ParseError> {
        let start = self.previous_span();
        self.expect(&TokenKind::LeftParen)?;

        let initializer = if self.match_any(&[TokenKind::Semicolon]) {
            None
        } else if self.check(&TokenKind::Var) {
            self.advance();
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(&TokenKind::Semicolon)?;

        let increment = if self.check(&TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(&TokenKind::RightParen)?;

        let mut body = self.statement()?;
        let end = self.previous_span();

        if let Some(increment) = increment {
            let increment_span = increment.span;
            body = Stmt::new(
                StmtKind::Block(vec![body, Stmt::new(StmtKind::Expression(increment), increment_span)]),
                span_over(&start, &end),
            );
        }

        let condition = condition.unwrap_or_else(|| {
            Expr::new(ExprKind::Literal(crate::value::Value::Boolean(true)), start)
        });
        body = Stmt::new(
            StmtKind::While {
                condition,
                body: Box::new(body),
            },
            span_over(&start, &end),
        );

        if let Some(initializer) = initializer {
            body = Stmt::new(StmtKind::Block(vec![initializer, body]), span_over(&start, &end));
        }

        Ok(body)
    }

    fn print_statement(&mut self) -> Result<Stmt, ParseError> {
        let start = self.previous_span();
        let value = self.expression()?;
        let end = self.expect(&TokenKind::Semicolon)?.span;
        Ok(Stmt::new(StmtKind::Print(value), span_over(&start, &end)))
    }

    fn return_statement(&mut self, keyword: crate::token::Token) -> Result<Stmt, ParseError> {
        if self.function_depth == 0 {
            return Err(ParseError {
                message: "Can't return from top-level code.".to_string(),
                span: keyword.span,
            });
        }
        let start = keyword.span;
        let value = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        let end = self.expect(&TokenKind::Semicolon)?.span;
        Ok(Stmt::new(
            StmtKind::Return { keyword, value },
            span_over(&start, &end),
        ))
    }

    fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.expression()?;
        let start = expr.span;
        let end = self.expect(&TokenKind::Semicolon)?.span;
        Ok(Stmt::new(StmtKind::Expression(expr), span_over(&start, &end)))
    }

    /// The span of the token just consumed. Used after `advance`/`expect`
    /// calls to anchor the end of a multi-token production.
    fn previous_span(&self) -> Span {
        let idx = self.pos.saturating_sub(1);
        self.tokens[idx.min(self.tokens.len() - 1)].span
    }
}
