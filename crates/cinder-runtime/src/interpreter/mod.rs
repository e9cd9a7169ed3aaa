//! AST interpreter (tree-walking)
//!
//! Pure nodes (expressions, terms, factors, conditions) evaluate against a
//! borrowed [`Environment`] through the [`Evaluate`] trait. Statements need
//! the input and output streams as well, so they run on an [`Interpreter`].

mod expr;
mod io;
mod stmt;

pub use expr::Evaluate;
pub use io::format_number;

use crate::ast::Program;
use crate::environment::Environment;
use crate::error::EvalError;
use std::collections::VecDeque;
use std::io::{BufRead, Stdin, StdinLock, Stdout, Write};

/// Interpreter state: the variables of one run plus its I/O streams
pub struct Interpreter<R, W> {
    pub(super) env: Environment,
    pub(super) input: R,
    pub(super) output: W,
    /// Whitespace-delimited input tokens not yet consumed by `rd`
    pub(super) pending: VecDeque<String>,
}

impl Interpreter<StdinLock<'static>, Stdout> {
    /// Interpreter reading from stdin and writing to stdout
    pub fn stdio() -> Self {
        let stdin: Stdin = std::io::stdin();
        Self::with_io(stdin.lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Interpreter over arbitrary streams
    pub fn with_io(input: R, output: W) -> Self {
        Self {
            env: Environment::new(),
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Run a whole program. The value is that of the last top-level statement.
    pub fn run(&mut self, program: &Program) -> Result<f64, EvalError> {
        let value = self.exec_block(&program.body)?;
        self.flush(program.body.span)?;
        tracing::debug!(value, variables = self.env.len(), "program finished");
        Ok(value)
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn into_env(self) -> Environment {
        self.env
    }

    /// Give back the output stream, e.g. to inspect what `wr` produced
    pub fn into_output(self) -> W {
        self.output
    }
}
