//! Color-aware diagnostic formatter
//!
//! Formats diagnostics with source snippets, caret indicators, and optional
//! terminal colors. Respects NO_COLOR.

use crate::diagnostic::{Diagnostic, DiagnosticLevel};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Color mode for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Always,
    Never,
    /// Auto-detect terminal capabilities
    Auto,
}

impl ColorMode {
    /// Resolve to a termcolor ColorChoice
    pub fn to_color_choice(self) -> ColorChoice {
        // Always respect NO_COLOR (https://no-color.org)
        if std::env::var("NO_COLOR").is_ok() {
            return ColorChoice::Never;
        }
        match self {
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto => ColorChoice::Auto,
        }
    }
}

/// Diagnostic formatter with color support
pub struct DiagnosticFormatter {
    color_mode: ColorMode,
}

impl DiagnosticFormatter {
    pub fn new(color_mode: ColorMode) -> Self {
        Self { color_mode }
    }

    /// Create a plain (no color) formatter
    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }

    /// Format a diagnostic with colors to stderr
    pub fn emit(&self, diag: &Diagnostic) {
        let mut stream = StandardStream::stderr(self.color_mode.to_color_choice());
        let _ = self.write_diagnostic(&mut stream, diag);
    }

    /// Format multiple diagnostics
    pub fn emit_all(&self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Format a diagnostic to a WriteColor sink
    pub fn write_diagnostic(
        &self,
        w: &mut impl WriteColor,
        diag: &Diagnostic,
    ) -> std::io::Result<()> {
        self.write_header(w, diag)?;
        self.write_location(w, diag)?;

        if !diag.snippet.is_empty() {
            self.write_snippet(w, diag)?;
        }

        if let Some(help) = &diag.help {
            self.write_trailer(w, "help", Color::Green, help)?;
        }

        writeln!(w)?;
        Ok(())
    }

    /// Format a diagnostic to a buffer (for testing)
    pub fn format_to_buffer(&self, diag: &Diagnostic) -> Vec<u8> {
        let mut buf = termcolor::Buffer::no_color();
        let _ = self.write_diagnostic(&mut buf, diag);
        buf.into_inner()
    }

    fn level_color(level: DiagnosticLevel) -> Color {
        match level {
            DiagnosticLevel::Error => Color::Red,
            DiagnosticLevel::Warning => Color::Yellow,
        }
    }

    fn write_header(&self, w: &mut impl WriteColor, diag: &Diagnostic) -> std::io::Result<()> {
        w.set_color(
            ColorSpec::new()
                .set_fg(Some(Self::level_color(diag.level)))
                .set_bold(true),
        )?;
        write!(w, "{}[{}]", diag.level, diag.code)?;
        w.reset()?;

        w.set_color(ColorSpec::new().set_bold(true))?;
        write!(w, ": {}", diag.message)?;
        w.reset()?;
        writeln!(w)?;
        Ok(())
    }

    fn write_location(&self, w: &mut impl WriteColor, diag: &Diagnostic) -> std::io::Result<()> {
        w.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        write!(w, "  --> ")?;
        w.reset()?;
        writeln!(w, "{}:{}:{}", diag.file, diag.line, diag.column)?;
        Ok(())
    }

    fn write_snippet(&self, w: &mut impl WriteColor, diag: &Diagnostic) -> std::io::Result<()> {
        let gutter_width = diag.line.to_string().len() + 1;
        let gutter = ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true).clone();

        w.set_color(&gutter)?;
        write!(w, "{:>width$}|", "", width = gutter_width)?;
        w.reset()?;
        writeln!(w)?;

        w.set_color(&gutter)?;
        write!(w, "{:>width$}| ", diag.line, width = gutter_width)?;
        w.reset()?;
        writeln!(w, "{}", diag.snippet)?;

        if diag.length > 0 {
            w.set_color(&gutter)?;
            write!(w, "{:>width$}| ", "", width = gutter_width)?;
            w.reset()?;

            let col = diag.column.saturating_sub(1);
            write!(w, "{}", " ".repeat(col))?;

            let caret_len = diag
                .length
                .min(diag.snippet.chars().count().saturating_sub(col).max(1));

            w.set_color(
                ColorSpec::new()
                    .set_fg(Some(Self::level_color(diag.level)))
                    .set_bold(true),
            )?;
            write!(w, "{}", "^".repeat(caret_len))?;
            if !diag.label.is_empty() {
                write!(w, " {}", diag.label)?;
            }
            w.reset()?;
            writeln!(w)?;
        }

        Ok(())
    }

    fn write_trailer(
        &self,
        w: &mut impl WriteColor,
        kind: &str,
        color: Color,
        text: &str,
    ) -> std::io::Result<()> {
        w.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        write!(w, "   = ")?;
        w.reset()?;

        w.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(w, "{}", kind)?;
        w.reset()?;

        writeln!(w, ": {}", text)?;
        Ok(())
    }
}

/// Source line for a 1-based line number
pub fn extract_snippet(source: &str, line: usize) -> Option<String> {
    source.lines().nth(line.saturating_sub(1)).map(String::from)
}

/// Compute 1-based line and column from a character offset
pub fn offset_to_line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;
    for ch in source.chars().take(offset) {
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    #[test]
    fn test_offset_to_line_col() {
        assert_eq!(offset_to_line_col("abc", 0), (1, 1));
        assert_eq!(offset_to_line_col("ab\ncd", 3), (2, 1));
        assert_eq!(offset_to_line_col("ab\ncd", 4), (2, 2));
    }

    #[test]
    fn test_offsets_count_characters() {
        // `é` is two bytes but one character
        assert_eq!(offset_to_line_col("é x", 2), (1, 3));
    }

    #[test]
    fn test_plain_buffer_output() {
        let diag = Diagnostic::error_with_code("CN2000", "undefined variable: z", Span::new(8, 9))
            .with_label("never assigned")
            .enrich("y = 1 + z");
        let text = String::from_utf8(DiagnosticFormatter::plain().format_to_buffer(&diag)).unwrap();
        assert!(text.starts_with("error[CN2000]: undefined variable: z\n"));
        assert!(text.contains(" 1| y = 1 + z\n"));
        assert!(text.contains("^ never assigned"));
    }
}
