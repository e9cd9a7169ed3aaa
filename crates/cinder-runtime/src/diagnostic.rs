//! Diagnostic system for errors and warnings
//!
//! Scanner warnings, syntax errors and evaluation errors all flow through the
//! unified Diagnostic type, so the driver presents them the same way.

pub mod error_codes;
pub mod formatter;

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// Diagnostic schema version
pub const DIAG_VERSION: u32 = 1;

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    /// Fatal to the current parse or run
    Error,
    /// Reported and skipped
    Warning,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Error => write!(f, "error"),
            DiagnosticLevel::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message (error or warning)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Diagnostic schema version
    pub diag_version: u32,
    /// Severity level
    pub level: DiagnosticLevel,
    /// Error code (e.g., "CN1000")
    pub code: String,
    /// Main diagnostic message
    pub message: String,
    /// File path
    pub file: String,
    /// Zero-based character offset of the span start
    pub offset: usize,
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
    /// Length of error span
    pub length: usize,
    /// Source line string
    pub snippet: String,
    /// Short label for caret range
    pub label: String,
    /// Suggested fix (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Diagnostic {
    fn with_level(
        level: DiagnosticLevel,
        code: impl Into<String>,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            diag_version: DIAG_VERSION,
            level,
            code: code.into(),
            message: message.into(),
            file: "<input>".to_string(),
            offset: span.start,
            line: 1,
            column: span.start + 1,
            length: span.len(),
            snippet: String::new(),
            label: String::new(),
            help: None,
        }
    }

    /// Create a new error diagnostic with code
    pub fn error_with_code(
        code: impl Into<String>,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::with_level(DiagnosticLevel::Error, code, message, span)
    }

    /// Create a new warning diagnostic with code
    pub fn warning_with_code(
        code: impl Into<String>,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::with_level(DiagnosticLevel::Warning, code, message, span)
    }

    pub fn is_error(&self) -> bool {
        self.level == DiagnosticLevel::Error
    }

    /// Set the file path
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Set the label (caret description)
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Add a help message
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Resolve line, column and snippet against the program text
    pub fn enrich(mut self, source: &str) -> Self {
        let (line, column) = formatter::offset_to_line_col(source, self.offset);
        self.line = line;
        self.column = column;
        self.snippet = formatter::extract_snippet(source, line).unwrap_or_default();
        self
    }

    /// Format as human-readable string
    pub fn to_human_string(&self) -> String {
        let mut output = String::new();

        // Header: error[CN1000]: expected `then`, found `do`
        output.push_str(&format!(
            "{}[{}]: {}\n",
            self.level, self.code, self.message
        ));

        output.push_str(&format!(
            "  --> {}:{}:{}\n",
            self.file, self.line, self.column
        ));

        if !self.snippet.is_empty() {
            output.push_str("   |\n");
            output.push_str(&format!("{:>2} | {}\n", self.line, self.snippet));

            if self.length > 0 {
                let padding = " ".repeat(self.column - 1);
                let carets = "^".repeat(self.length);
                output.push_str(&format!("   | {}{}", padding, carets));

                if !self.label.is_empty() {
                    output.push_str(&format!(" {}", self.label));
                }
                output.push('\n');
            }
        }

        if let Some(help) = &self.help {
            output.push_str(&format!("   = help: {}\n", help));
        }

        output
    }

    /// Format as compact JSON string
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}: {}",
            self.line, self.column, self.level, self.message
        )
    }
}

/// Sort diagnostics by level (errors first), then by location
pub fn sort_diagnostics(diagnostics: &mut [Diagnostic]) {
    diagnostics.sort_by(|a, b| match (a.level, b.level) {
        (DiagnosticLevel::Error, DiagnosticLevel::Warning) => std::cmp::Ordering::Less,
        (DiagnosticLevel::Warning, DiagnosticLevel::Error) => std::cmp::Ordering::Greater,
        _ => a.offset.cmp(&b.offset),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrich_finds_second_line() {
        let source = "x = 1;\ny = z";
        let diag = Diagnostic::error_with_code("CN2000", "undefined variable: z", Span::new(11, 12)).enrich(source);
        assert_eq!(diag.line, 2);
        assert_eq!(diag.column, 5);
        assert_eq!(diag.snippet, "y = z");
    }

    #[test]
    fn test_human_string_has_caret() {
        let diag = Diagnostic::error_with_code("CN1000", "bad", Span::new(4, 5))
            .with_label("here")
            .enrich("x = + 1");
        let text = diag.to_human_string();
        assert!(text.starts_with("error[CN1000]: bad\n"));
        assert!(text.contains("  --> <input>:1:5\n"));
        assert!(text.contains("   |     ^ here\n"));
    }

    #[test]
    fn test_errors_sort_before_warnings() {
        let mut diags = vec![
            Diagnostic::warning_with_code("CN0001", "w", Span::new(0, 1)),
            Diagnostic::error_with_code("CN1000", "e", Span::new(5, 6)),
        ];
        sort_diagnostics(&mut diags);
        assert!(diags[0].is_error());
    }

    #[test]
    fn test_json_round_trip_fields() {
        let diag = Diagnostic::error_with_code("CN2000", "undefined variable: z", Span::new(3, 4));
        let json = diag.to_json_compact().unwrap();
        assert!(json.contains("\"code\":\"CN2000\""));
        assert!(json.contains("\"level\":\"error\""));
        assert!(!json.contains("\"help\""));
    }
}
