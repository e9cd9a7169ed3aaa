//! Lexical analysis (scanning)
//!
//! The scanner turns Cinder program text into tokens on demand, one token
//! buffered at a time. Illegal characters are reported as warnings and
//! skipped; scanning itself never fails.

use crate::diagnostic::{error_codes, Diagnostic};
use crate::error::SyntaxError;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Scanner state over a fully materialized program
pub struct Scanner {
    /// Characters of the program text
    chars: Vec<char>,
    /// Index of the next unread character
    pos: usize,
    /// Most recently produced token
    token: Option<Token>,
    /// Illegal-character warnings
    diagnostics: Vec<Diagnostic>,
}

impl Scanner {
    /// Create a new scanner for the given program text
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            token: None,
            diagnostics: Vec::new(),
        }
    }

    /// Advance past whitespace and produce exactly one token.
    ///
    /// Returns `false` once the end of input is reached; the `EOF` token is
    /// produced again on every further call.
    pub fn next(&mut self) -> bool {
        loop {
            self.skip_whitespace();
            let start = self.pos;

            let Some(c) = self.peek() else {
                self.token = Some(Token::new(TokenKind::Eof, "", Span::point(start)));
                return false;
            };

            let token = if c.is_ascii_digit() {
                self.number()
            } else if c.is_ascii_alphabetic() {
                self.keyword_or_identifier()
            } else if TokenKind::single_operator(c).is_some() {
                self.operator()
            } else {
                self.illegal(c);
                continue;
            };

            self.token = Some(token);
            return true;
        }
    }

    /// The most recently produced token
    pub fn curr(&self) -> Result<&Token, SyntaxError> {
        self.token.as_ref().ok_or(SyntaxError::NoCurrentToken {
            span: Span::point(self.pos),
        })
    }

    /// Zero-based offset of the scan head
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Warnings collected so far
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Drain the whole program, returning every token up to and including `EOF`
    pub fn tokenize(&mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();
        loop {
            let more = self.next();
            if let Some(token) = self.token.clone() {
                tokens.push(token);
            }
            if !more {
                break;
            }
        }
        (tokens, self.take_diagnostics())
    }

    // === Lexeme scanners ===

    /// Digits, optionally one decimal point, then more digits.
    /// A bare trailing point (`3.`) is accepted; validation happens at evaluation.
    fn number(&mut self) -> Token {
        let start = self.pos;
        self.many(|c| c.is_ascii_digit());
        if self.peek() == Some('.') {
            self.pos += 1;
            self.many(|c| c.is_ascii_digit());
        }
        self.make_token(TokenKind::Number, start)
    }

    /// A letter, then letters or digits; keywords get their own kind
    fn keyword_or_identifier(&mut self) -> Token {
        let start = self.pos;
        self.many(|c| c.is_ascii_alphabetic());
        self.many(|c| c.is_ascii_alphanumeric());
        let lexeme: String = self.chars[start..self.pos].iter().collect();
        let kind = TokenKind::keyword(&lexeme).unwrap_or(TokenKind::Identifier);
        Token::new(kind, lexeme, Span::new(start, self.pos))
    }

    /// Greedy: a two-character operator wins over its one-character prefix
    fn operator(&mut self) -> Token {
        let start = self.pos;
        let first = self.chars[start];

        if let Some(second) = self.chars.get(start + 1) {
            if let Some(kind) = TokenKind::double_operator(first, *second) {
                self.pos += 2;
                return self.make_token(kind, start);
            }
        }

        self.pos += 1;
        // Callers only dispatch here for characters in the operator set
        let kind = TokenKind::single_operator(first).unwrap_or(TokenKind::Eof);
        self.make_token(kind, start)
    }

    fn illegal(&mut self, c: char) {
        let span = Span::new(self.pos, self.pos + 1);
        tracing::warn!(position = self.pos, character = %c.escape_debug(), "illegal character");
        self.diagnostics.push(
            Diagnostic::warning_with_code(
                error_codes::ILLEGAL_CHARACTER,
                format!("illegal character '{}' at position {}", c.escape_debug(), self.pos),
                span,
            )
            .with_label("skipped"),
        );
        self.pos += 1;
    }

    // === Character navigation ===

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn many(&mut self, accept: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !accept(c) {
                break;
            }
            self.pos += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        self.many(|c| matches!(c, ' ' | '\t' | '\n' | '\r'));
    }

    fn make_token(&self, kind: TokenKind, start: usize) -> Token {
        let lexeme: String = self.chars[start..self.pos].iter().collect();
        Token::new(kind, lexeme, Span::new(start, self.pos))
    }
}
