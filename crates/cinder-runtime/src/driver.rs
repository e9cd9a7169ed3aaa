//! Cinder driver API for embedding
//!
//! The driver ties the pipeline together under an explicit [`DriverConfig`]:
//! parse, interpret when enabled, and emit a C translation unit when a
//! target is configured. It reads no process state of its own.

use crate::ast::Program;
use crate::codegen;
use crate::diagnostic::{sort_diagnostics, Diagnostic};
use crate::environment::Environment;
use crate::error::Error;
use crate::interpreter::Interpreter;
use crate::parser::Parser;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub use cinder_config::DriverConfig;

/// Result type for driver operations
pub type DriverResult<T> = Result<T, Vec<Diagnostic>>;

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outcome {
    /// Value of the last top-level statement, when the program was interpreted
    pub value: Option<f64>,
    /// The C translation unit, when emission was requested
    pub emitted: Option<String>,
    /// Non-fatal scanner warnings
    pub warnings: Vec<Diagnostic>,
}

/// Cinder driver instance
///
/// # Examples
///
/// ```
/// use cinder_runtime::{Driver, DriverConfig, Interpreter};
///
/// let driver = Driver::new(DriverConfig::default());
/// let mut interp = Interpreter::with_io(std::io::empty(), Vec::new());
/// let outcome = driver.run_with("x = 2; wr x * 3", &mut interp).unwrap();
/// assert_eq!(outcome.value, Some(6.0));
/// assert_eq!(interp.into_output(), b"6\n");
/// ```
pub struct Driver {
    config: DriverConfig,
}

impl Driver {
    pub fn new(config: DriverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Path of the emitted C file: the target base with `.c` appended
    pub fn emit_path(&self) -> Option<PathBuf> {
        self.config.emit_target.as_ref().map(|base| {
            let mut path = base.clone().into_os_string();
            path.push(".c");
            PathBuf::from(path)
        })
    }

    /// Run `source` against the process's stdin and stdout
    pub fn run_source(&self, source: &str) -> DriverResult<Outcome> {
        let mut interp = Interpreter::stdio();
        self.run_with(source, &mut interp)
    }

    /// Run `source` on a caller-supplied interpreter
    pub fn run_with<R: BufRead, W: Write>(
        &self,
        source: &str,
        interp: &mut Interpreter<R, W>,
    ) -> DriverResult<Outcome> {
        let (program, warnings) = self.parse(source)?;

        let value = if self.config.interpret {
            match interp.run(&program) {
                Ok(value) => Some(value),
                Err(e) => return Err(fail(Error::from(e), source, warnings)),
            }
        } else {
            None
        };

        let emitted = match self.emit_path() {
            Some(path) => {
                let mut env = Environment::declarations(&program);
                env.declare_all(interp.env());
                let code = codegen::emit(&program, &env);
                if let Err(source_err) = write_emitted(&path, &code) {
                    let err = Error::Emit {
                        path,
                        source: source_err,
                    };
                    return Err(fail(err, source, warnings));
                }
                tracing::info!(path = %path.display(), "wrote C translation unit");
                Some(code)
            }
            None => None,
        };

        Ok(Outcome {
            value,
            emitted,
            warnings,
        })
    }

    /// Parse and render without interpreting or touching the filesystem
    pub fn translate(&self, source: &str) -> DriverResult<Outcome> {
        let (program, warnings) = self.parse(source)?;
        let env = Environment::declarations(&program);
        Ok(Outcome {
            value: None,
            emitted: Some(codegen::emit(&program, &env)),
            warnings,
        })
    }

    /// Parse `source`, returning the tree and any scanner warnings
    pub fn parse(&self, source: &str) -> DriverResult<(Program, Vec<Diagnostic>)> {
        let mut parser = Parser::new(source);
        let result = parser.parse();
        let warnings: Vec<Diagnostic> = parser
            .take_diagnostics()
            .into_iter()
            .map(|d| d.enrich(source))
            .collect();

        match result {
            Ok(program) => Ok((program, warnings)),
            Err(e) => Err(fail(Error::from(e), source, warnings)),
        }
    }
}

/// Write the translation unit, creating missing parent directories
fn write_emitted(path: &Path, code: &str) -> std::io::Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    std::fs::write(path, code)
}

/// The error's diagnostic followed by the warnings gathered before it
fn fail(err: Error, source: &str, warnings: Vec<Diagnostic>) -> Vec<Diagnostic> {
    tracing::debug!(error = %err, "driver run failed");
    let mut diagnostics = vec![err.to_diagnostic().enrich(source)];
    diagnostics.extend(warnings);
    sort_diagnostics(&mut diagnostics);
    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{empty, sink};

    #[test]
    fn test_emit_path_appends_extension() {
        let driver = Driver::new(DriverConfig {
            interpret: true,
            emit_target: Some(PathBuf::from("out/prog")),
        });
        assert_eq!(driver.emit_path(), Some(PathBuf::from("out/prog.c")));
        assert_eq!(Driver::new(DriverConfig::default()).emit_path(), None);
    }

    #[test]
    fn test_interpret_only() {
        let driver = Driver::new(DriverConfig::default());
        let mut interp = Interpreter::with_io(empty(), sink());
        let outcome = driver.run_with("x = 1; y = x + 1", &mut interp).unwrap();
        assert_eq!(outcome.value, Some(2.0));
        assert_eq!(outcome.emitted, None);
    }

    #[test]
    fn test_syntax_error_reports_position() {
        let driver = Driver::new(DriverConfig::default());
        let mut interp = Interpreter::with_io(empty(), sink());
        let diagnostics = driver.run_with("x = + 1", &mut interp).unwrap_err();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "CN1000");
        assert_eq!(diagnostics[0].offset, 4);
        assert_eq!(diagnostics[0].line, 1);
        assert_eq!(diagnostics[0].column, 5);
    }

    #[test]
    fn test_translate_does_not_run() {
        let driver = Driver::new(DriverConfig::default());
        let outcome = driver.translate("rd x; wr x").unwrap();
        assert_eq!(outcome.value, None);
        assert!(outcome.emitted.unwrap().contains("double x;\nx=0;\n"));
    }
}
