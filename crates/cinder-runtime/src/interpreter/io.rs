//! Console I/O for `rd` and `wr`

use super::Interpreter;
use crate::error::EvalError;
use crate::span::Span;
use std::io::{BufRead, Write};

/// Format a value the way `wr` prints it: integral values without a
/// fractional part, everything else in the default float rendering
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        // Also covers -0
        "0".to_string()
    } else if n.fract() == 0.0 && n.is_finite() {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Next whitespace-delimited token from the input, parsed as a number
    pub(super) fn read_number(&mut self, span: Span) -> Result<f64, EvalError> {
        let token = self.next_input_token(span)?;
        token.parse::<f64>().map_err(|_| EvalError::Read {
            msg: format!("expected a number, found `{}`", token),
            span,
        })
    }

    fn next_input_token(&mut self, span: Span) -> Result<String, EvalError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| EvalError::Read {
                    msg: e.to_string(),
                    span,
                })?;
            if read == 0 {
                return Err(EvalError::Read {
                    msg: "unexpected end of input".to_string(),
                    span,
                });
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    pub(super) fn write_number(&mut self, value: f64, span: Span) -> Result<(), EvalError> {
        writeln!(self.output, "{}", format_number(value)).map_err(|e| EvalError::Io {
            msg: e.to_string(),
            span,
        })
    }

    pub(super) fn flush(&mut self, span: Span) -> Result<(), EvalError> {
        self.output.flush().map_err(|e| EvalError::Io {
            msg: e.to_string(),
            span,
        })
    }
}
