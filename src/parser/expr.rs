//! Expression parsing: precedence climbing from assignment down to
//! primary expressions.

use super::error::ParseError;
use super::Parser;
use crate::ast::{Expr, ExprKind};
use crate::token::{Span, TokenKind};
use crate::value::Value;

fn span_over(start: &Span, end: &Span) -> Span {
    Span::new(start.start, end.end, start.line, start.column)
}

impl Parser {
    pub(super) fn expression(&mut self) -> Result<Expr, ParseError> {
        self.assignment()
    }

    /// `IDENTIFIER "=" assignment | logic_or`
    ///
    /// The left-hand side is parsed as an ordinary expression first; only
    /// once `=` is seen is it checked for being a valid assignment target.
    /// This matches how Lox reports "Invalid assignment target" as a
    /// semantic check rather than baking the restriction into the grammar
    /// itself, so `a + b = c` parses far enough to produce that specific
    /// error instead of a generic "expected expression".
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.logic_or()?;

        if self.check(&TokenKind::Equal) {
            let equals = self.advance();
            let value = self.assignment()?;

            return match expr.kind {
                ExprKind::Variable(name) => {
                    let span = span_over(&name.span, &value.span);
                    Ok(Expr::new(
                        ExprKind::Assignment {
                            name,
                            value: Box::new(value),
                        },
                        span,
                    ))
                }
                _ => Err(ParseError {
                    message: "Invalid assignment target.".to_string(),
                    span: equals.span,
                }),
            };
        }

        Ok(expr)
    }

    fn logic_or(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.logic_and()?;
        while self.check(&TokenKind::Or) {
            let op = self.advance();
            let right = self.logic_and()?;
            let span = span_over(&expr.span, &right.span);
            expr = Expr::new(
                ExprKind::Logical {
                    left: Box::new(expr),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(expr)
    }

    fn logic_and(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.equality()?;
        while self.check(&TokenKind::And) {
            let op = self.advance();
            let right = self.equality()?;
            let span = span_over(&expr.span, &right.span);
            expr = Expr::new(
                ExprKind::Logical {
                    left: Box::new(expr),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        self.binary_left_assoc(
            Self::comparison,
            &[TokenKind::BangEqual, TokenKind::EqualEqual],
        )
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        self.binary_left_assoc(
            Self::term,
            &[
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::Less,
                TokenKind::LessEqual,
            ],
        )
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        self.binary_left_assoc(Self::factor, &[TokenKind::Minus, TokenKind::Plus])
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        self.binary_left_assoc(Self::unary, &[TokenKind::Slash, TokenKind::Star])
    }

    /// Shared left-associative binary operator climb: parses one operand
    /// with `operand`, then repeatedly consumes any operator in `kinds`
    /// followed by another operand.
    fn binary_left_assoc(
        &mut self,
        operand: fn(&mut Self) -> Result<Expr, ParseError>,
        kinds: &[TokenKind],
    ) -> Result<Expr, ParseError> {
        let mut expr = operand(self)?;
        while kinds.iter().any(|kind| self.check(kind)) {
            let op = self.advance();
            let right = operand(self)?;
            let span = span_over(&expr.span, &right.span);
            expr = Expr::new(
                ExprKind::Binary {
                    left: Box::new(expr),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.check(&TokenKind::Bang) || self.check(&TokenKind::Minus) {
            let op = self.advance();
            let operand = self.unary()?;
            let span = span_over(&op.span, &operand.span);
            return Ok(Expr::new(
                ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                },
                span,
            ));
        }
        self.call()
    }

    fn call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;

        loop {
            if self.check(&TokenKind::LeftParen) {
                self.advance();
                expr = self.finish_call(expr)?;
            } else {
                break;
            }
        }

        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let mut arguments = Vec::new();

        if !self.check(&TokenKind::RightParen) {
            loop {
                if arguments.len() >= 255 {
                    return Err(ParseError {
                        message: "Can't have more than 255 arguments.".to_string(),
                        span: self.current_span(),
                    });
                }
                arguments.push(self.expression()?);
                if !self.match_any(&[TokenKind::Comma]) {
                    break;
                }
            }
        }

        let paren = self.expect(&TokenKind::RightParen)?;
        let span = span_over(&callee.span, &paren.span);
        Ok(Expr::new(
            ExprKind::Call {
                callee: Box::new(callee),
                paren,
                arguments,
            },
            span,
        ))
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let span = self.current_span();
        match self.current_kind().clone() {
            TokenKind::False => {
                self.advance();
                Ok(Expr::new(ExprKind::Literal(Value::Boolean(false)), span))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expr::new(ExprKind::Literal(Value::Boolean(true)), span))
            }
            TokenKind::Nil => {
                self.advance();
                Ok(Expr::new(ExprKind::Literal(Value::Nil), span))
            }
            TokenKind::NumberLiteral(n) => {
                self.advance();
                Ok(Expr::new(ExprKind::Literal(Value::Number(n)), span))
            }
            TokenKind::StringLiteral(s) => {
                self.advance();
                Ok(Expr::new(ExprKind::Literal(Value::String(s)), span))
            }
            TokenKind::Identifier(_) => {
                let name = self.advance();
                Ok(Expr::new(ExprKind::Variable(name), span))
            }
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.expression()?;
                let closing = self.expect(&TokenKind::RightParen)?;
                let full_span = span_over(&span, &closing.span);
                Ok(Expr::new(ExprKind::Grouping(Box::new(inner)), full_span))
            }
            other => Err(ParseError {
                message: format!("Expected expression, found {}.", Self::token_kind_display(&other)),
                span,
            }),
        }
    }
}
