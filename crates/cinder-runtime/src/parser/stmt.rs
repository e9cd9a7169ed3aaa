//! Statement parsing

use super::Parser;
use crate::ast::*;
use crate::error::SyntaxError;
use crate::token::TokenKind;

impl Parser {
    /// `block := stmt (';' stmt)*`, with a trailing `;` before `end` tolerated
    ///
    /// Statements are read in a loop and linked from the back, so a long
    /// program does not deepen the call stack.
    pub(super) fn parse_block(&mut self) -> Result<Block, SyntaxError> {
        let first_start = self.curr()?.span.start;
        let first = self.parse_stmt()?;

        let mut more = Vec::new();
        while self.check(TokenKind::Semicolon) {
            self.advance()?;
            if self.check(TokenKind::End) {
                break;
            }
            let start = self.curr()?.span.start;
            more.push((start, self.parse_stmt()?));
        }

        let mut rest = None;
        for (start, stmt) in more.into_iter().rev() {
            rest = Some(Box::new(Block {
                stmt: Box::new(stmt),
                rest,
                span: self.span_from(start),
            }));
        }

        Ok(Block {
            stmt: Box::new(first),
            rest,
            span: self.span_from(first_start),
        })
    }

    pub(super) fn parse_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        match self.curr()?.kind {
            TokenKind::Rd => self.parse_read(),
            TokenKind::Wr => self.parse_write(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Begin => self.parse_begin(),
            _ => self.parse_assign(),
        }
    }

    /// `id = expr`
    fn parse_assign(&mut self) -> Result<Stmt, SyntaxError> {
        let start = self.curr()?.span.start;
        let target = self.parse_ident()?;
        self.consume(TokenKind::Equal)?;
        let value = self.parse_expr()?;
        Ok(Stmt::Assign(Assign {
            target,
            value,
            span: self.span_from(start),
        }))
    }

    /// `rd id`
    fn parse_read(&mut self) -> Result<Stmt, SyntaxError> {
        let start = self.consume(TokenKind::Rd)?.span.start;
        let target = self.parse_ident()?;
        Ok(Stmt::Read(ReadStmt {
            target,
            span: self.span_from(start),
        }))
    }

    /// `wr expr`
    fn parse_write(&mut self) -> Result<Stmt, SyntaxError> {
        let start = self.consume(TokenKind::Wr)?.span.start;
        let value = self.parse_expr()?;
        Ok(Stmt::Write(WriteStmt {
            value,
            span: self.span_from(start),
        }))
    }

    /// `if cond then stmt [else stmt]`
    fn parse_if(&mut self) -> Result<Stmt, SyntaxError> {
        let start = self.consume(TokenKind::If)?.span.start;
        let cond = self.parse_condition()?;
        self.consume(TokenKind::Then)?;
        let then_branch = Box::new(self.parse_stmt()?);

        let else_branch = if self.check(TokenKind::Else) {
            self.advance()?;
            Some(Box::new(self.parse_stmt()?))
        } else {
            None
        };

        Ok(Stmt::If(IfStmt {
            cond,
            then_branch,
            else_branch,
            span: self.span_from(start),
        }))
    }

    /// `while cond do stmt`
    fn parse_while(&mut self) -> Result<Stmt, SyntaxError> {
        let start = self.consume(TokenKind::While)?.span.start;
        let cond = self.parse_condition()?;
        self.consume(TokenKind::Do)?;
        let body = Box::new(self.parse_stmt()?);
        Ok(Stmt::While(WhileStmt {
            cond,
            body,
            span: self.span_from(start),
        }))
    }

    /// `begin block end`
    fn parse_begin(&mut self) -> Result<Stmt, SyntaxError> {
        let start = self.consume(TokenKind::Begin)?.span.start;
        let mut block = self.parse_block()?;
        self.consume(TokenKind::End)?;
        block.span = self.span_from(start);
        Ok(Stmt::Block(block))
    }
}
