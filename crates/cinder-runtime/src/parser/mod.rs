//! Parsing (program text to AST)
//!
//! Single-pass recursive descent with one token of lookahead: the scanner's
//! current token. There is no backtracking and no error recovery; the first
//! mismatch aborts the whole parse.

mod chain;
mod expr;
mod stmt;

use crate::ast::*;
use crate::diagnostic::Diagnostic;
use crate::error::SyntaxError;
use crate::scanner::Scanner;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Parser state; owns the scanner for the program being parsed
pub struct Parser {
    pub(super) scanner: Scanner,
    /// End offset of the last consumed token
    pub(super) last_end: usize,
}

impl Parser {
    /// Create a new parser for the given program text
    pub fn new(source: &str) -> Self {
        Self {
            scanner: Scanner::new(source),
            last_end: 0,
        }
    }

    /// Parse a complete program: a block followed by end of input
    pub fn parse(&mut self) -> Result<Program, SyntaxError> {
        self.scanner.next();
        let body = self.parse_block()?;
        self.consume(TokenKind::Eof)?;

        tracing::debug!(statements = body.statements().count(), "parsed program");
        Ok(Program { body })
    }

    /// Parse a lone expression followed by end of input
    pub fn parse_expression(&mut self) -> Result<Expr, SyntaxError> {
        self.scanner.next();
        let expr = self.parse_expr()?;
        self.consume(TokenKind::Eof)?;
        Ok(expr)
    }

    /// Illegal-character warnings raised by the scanner so far
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.scanner.take_diagnostics()
    }

    // === Token helpers ===

    pub(super) fn curr(&self) -> Result<&Token, SyntaxError> {
        self.scanner.curr()
    }

    /// Does the current token have this kind?
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.scanner.curr().is_ok_and(|token| token.is(kind))
    }

    /// Take the current token and scan the next one
    pub(super) fn advance(&mut self) -> Result<Token, SyntaxError> {
        let token = self.curr()?.clone();
        self.last_end = token.span.end;
        self.scanner.next();
        Ok(token)
    }

    /// Require the current token to be of `kind`, then advance past it
    pub(super) fn consume(&mut self, kind: TokenKind) -> Result<Token, SyntaxError> {
        let token = self.curr()?;
        if !token.is(kind) {
            return Err(SyntaxError::Unexpected {
                expected: kind,
                found: token.kind,
                span: token.span,
            });
        }
        self.advance()
    }

    /// Span from `start` to the end of the last consumed token
    pub(super) fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.last_end.max(start))
    }
}

/// Parse a complete program
pub fn parse_program(source: &str) -> Result<Program, SyntaxError> {
    Parser::new(source).parse()
}

/// Parse a single expression
pub fn parse_expr_source(source: &str) -> Result<Expr, SyntaxError> {
    Parser::new(source).parse_expression()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_end_of_input() {
        let err = parse_program("x = 1 y = 2").unwrap_err();
        assert_eq!(
            err,
            SyntaxError::Unexpected {
                expected: TokenKind::Eof,
                found: TokenKind::Identifier,
                span: Span::new(6, 7),
            }
        );
    }

    #[test]
    fn test_empty_program_is_a_syntax_error() {
        let err = parse_program("").unwrap_err();
        assert!(matches!(
            err,
            SyntaxError::Unexpected {
                expected: TokenKind::Identifier,
                found: TokenKind::Eof,
                ..
            }
        ));
    }

    #[test]
    fn test_illegal_characters_surface_as_warnings() {
        let mut parser = Parser::new("x = 1 $");
        assert!(parser.parse().is_ok());
        let warnings = parser.take_diagnostics();
        assert_eq!(warnings.len(), 1);
        assert!(!warnings[0].is_error());
    }
}
