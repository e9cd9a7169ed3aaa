//! Expression parsing
//!
//! `expr` and `term` follow the right-recursive grammar. Their operands are
//! read in a loop and folded into chains with [`ChainBuilder::from_source`].

use super::chain::ChainBuilder;
use super::Parser;
use crate::ast::*;
use crate::error::SyntaxError;
use crate::token::TokenKind;

impl Parser {
    /// `expr := term (addop expr)?`
    pub(super) fn parse_expr(&mut self) -> Result<Expr, SyntaxError> {
        let first = self.parse_term()?;
        let mut rest = Vec::new();
        while let Some(op) = self.parse_addop()? {
            rest.push((op, self.parse_term()?));
        }
        Ok(ChainBuilder::from_source(first, rest).finish())
    }

    /// `term := fact (mulop term)?`
    pub(super) fn parse_term(&mut self) -> Result<Term, SyntaxError> {
        let first = self.parse_fact()?;
        let mut rest = Vec::new();
        while let Some(op) = self.parse_mulop()? {
            rest.push((op, self.parse_fact()?));
        }
        Ok(ChainBuilder::from_source(first, rest).finish())
    }

    /// `fact := '(' expr ')' | id | '-' fact | num`
    pub(super) fn parse_fact(&mut self) -> Result<Factor, SyntaxError> {
        let start = self.curr()?.span.start;

        if self.check(TokenKind::LeftParen) {
            self.advance()?;
            let inner = self.parse_expr()?;
            self.consume(TokenKind::RightParen)?;
            return Ok(Factor::Group(Box::new(inner), self.span_from(start)));
        }

        if self.check(TokenKind::Identifier) {
            return Ok(Factor::Ident(self.parse_ident()?));
        }

        if self.check(TokenKind::Minus) {
            self.advance()?;
            // Binds to the next factor only
            let operand = self.parse_fact()?;
            return Ok(Factor::Negate(Box::new(operand), self.span_from(start)));
        }

        let token = self.consume(TokenKind::Number)?;
        Ok(Factor::Number(NumberLit {
            lexeme: token.lexeme,
            span: token.span,
        }))
    }

    /// `expr relop expr`
    pub(super) fn parse_condition(&mut self) -> Result<Condition, SyntaxError> {
        let left = self.parse_expr()?;
        let token = self.curr()?;
        if !token.kind.is_relop() {
            return Err(SyntaxError::MissingRelop {
                found: token.kind,
                span: token.span,
            });
        }
        let op = self.parse_relop()?;
        let right = self.parse_expr()?;
        Ok(Condition { left, op, right })
    }

    pub(super) fn parse_ident(&mut self) -> Result<Ident, SyntaxError> {
        let token = self.consume(TokenKind::Identifier)?;
        Ok(Ident {
            name: token.lexeme,
            span: token.span,
        })
    }

    // === Operators ===

    fn parse_addop(&mut self) -> Result<Option<Operator<AddOp>>, SyntaxError> {
        let kind = match self.curr()?.kind {
            TokenKind::Plus => AddOp::Plus,
            TokenKind::Minus => AddOp::Minus,
            _ => return Ok(None),
        };
        let token = self.advance()?;
        Ok(Some(Operator::new(kind, token.span)))
    }

    fn parse_mulop(&mut self) -> Result<Option<Operator<MulOp>>, SyntaxError> {
        let kind = match self.curr()?.kind {
            TokenKind::Star => MulOp::Star,
            TokenKind::Slash => MulOp::Slash,
            _ => return Ok(None),
        };
        let token = self.advance()?;
        Ok(Some(Operator::new(kind, token.span)))
    }

    /// Consume a token already known to satisfy [`TokenKind::is_relop`]
    fn parse_relop(&mut self) -> Result<Operator<RelOp>, SyntaxError> {
        let token = self.advance()?;
        let kind = match token.kind {
            TokenKind::Less => RelOp::Less,
            TokenKind::LessEqual => RelOp::LessEqual,
            TokenKind::Greater => RelOp::Greater,
            TokenKind::GreaterEqual => RelOp::GreaterEqual,
            TokenKind::LessGreater => RelOp::NotEqual,
            TokenKind::EqualEqual => RelOp::Equal,
            found => {
                return Err(SyntaxError::MissingRelop {
                    found,
                    span: token.span,
                })
            }
        };
        Ok(Operator::new(kind, token.span))
    }
}
