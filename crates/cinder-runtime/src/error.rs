//! Error types for parsing, evaluation and emission
//!
//! Every error carries the span it was raised at. Converting to a
//! [`Diagnostic`] is how the driver hands them to presentation code.

use crate::diagnostic::{error_codes, Diagnostic};
use crate::span::Span;
use crate::token::TokenKind;
use std::path::PathBuf;
use thiserror::Error;

/// Raised by the parser; always fatal to the current parse
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SyntaxError {
    /// The current token's kind differs from what the grammar expects
    #[error("expected `{expected}`, found `{found}`")]
    Unexpected {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },
    /// A boolean expression without a relational operator
    #[error("expected a relational operator, found `{found}`")]
    MissingRelop { found: TokenKind, span: Span },
    /// `curr()` was called before the first `next()`
    #[error("no current token")]
    NoCurrentToken { span: Span },
}

impl SyntaxError {
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::Unexpected { span, .. } => *span,
            SyntaxError::MissingRelop { span, .. } => *span,
            SyntaxError::NoCurrentToken { span } => *span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let code = match self {
            SyntaxError::Unexpected { .. } => error_codes::SYNTAX_ERROR,
            SyntaxError::MissingRelop { .. } => error_codes::MISSING_RELOP,
            SyntaxError::NoCurrentToken { .. } => error_codes::NO_CURRENT_TOKEN,
        };
        let diag = Diagnostic::error_with_code(code, self.to_string(), self.span())
            .with_label("syntax error");
        match error_codes::help_for(code) {
            Some(help) => diag.with_help(help),
            None => diag,
        }
    }
}

/// Raised while evaluating; fatal to the current run
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String, span: Span },
    /// A numeric literal the scanner accepted but which is not a number
    #[error("invalid number format: {lexeme}")]
    MalformedNumber { lexeme: String, span: Span },
    /// `rd` found no number on the input stream
    #[error("read error: {msg}")]
    Read { msg: String, span: Span },
    /// `wr` could not write its line
    #[error("write error: {msg}")]
    Io { msg: String, span: Span },
}

impl EvalError {
    pub fn span(&self) -> Span {
        match self {
            EvalError::UndefinedVariable { span, .. } => *span,
            EvalError::MalformedNumber { span, .. } => *span,
            EvalError::Read { span, .. } => *span,
            EvalError::Io { span, .. } => *span,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            EvalError::UndefinedVariable { .. } => error_codes::UNDEFINED_VARIABLE,
            EvalError::MalformedNumber { .. } => error_codes::MALFORMED_NUMBER,
            EvalError::Read { .. } => error_codes::READ_ERROR,
            EvalError::Io { .. } => error_codes::OUTPUT_ERROR,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error_with_code(self.code(), self.to_string(), self.span())
            .with_label("runtime error");
        match error_codes::help_for(self.code()) {
            Some(help) => diag.with_help(help),
            None => diag,
        }
    }
}

/// Any failure the driver can report
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("failed to write {}: {source}", .path.display())]
    Emit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Syntax(e) => e.to_diagnostic(),
            Error::Eval(e) => e.to_diagnostic(),
            Error::Emit { .. } => Diagnostic::error_with_code(
                error_codes::EMIT_WRITE_ERROR,
                self.to_string(),
                Span::dummy(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_message() {
        let err = SyntaxError::Unexpected {
            expected: TokenKind::Then,
            found: TokenKind::Do,
            span: Span::new(9, 11),
        };
        assert_eq!(err.to_string(), "expected `then`, found `do`");
        let diag = err.to_diagnostic();
        assert_eq!(diag.code, "CN1000");
        assert_eq!(diag.column, 10);
    }

    #[test]
    fn test_eval_error_carries_span() {
        let err = EvalError::UndefinedVariable {
            name: "z".to_string(),
            span: Span::new(4, 5),
        };
        assert_eq!(err.span(), Span::new(4, 5));
        assert_eq!(err.to_string(), "undefined variable: z");
        assert!(err.to_diagnostic().help.is_some());
    }

    #[test]
    fn test_umbrella_conversion() {
        let err: Error = SyntaxError::MissingRelop {
            found: TokenKind::Then,
            span: Span::new(5, 9),
        }
        .into();
        assert_eq!(err.to_diagnostic().code, "CN1001");
    }
}
