//! Cinder Runtime - Core language implementation
//!
//! This library provides the complete Cinder toolchain core:
//! - Scanning and recursive-descent parsing
//! - Tree-walking interpretation over `f64` variables
//! - C code generation for the same tree
//! - Diagnostics and the driver tying these together

/// Cinder runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod ast;
pub mod codegen;
pub mod diagnostic;
pub mod driver;
pub mod environment;
pub mod error;
pub mod interpreter;
pub mod parser;
pub mod scanner;
pub mod span;
pub mod token;

// Re-export commonly used types
pub use ast::{Program, VersionedProgram, AST_VERSION};
pub use codegen::{emit, Render, EPILOGUE, PROLOGUE};
pub use diagnostic::{error_codes, sort_diagnostics, Diagnostic, DiagnosticLevel, DIAG_VERSION};
pub use driver::{Driver, DriverConfig, DriverResult, Outcome};
pub use environment::Environment;
pub use error::{Error, EvalError, SyntaxError};
pub use interpreter::{format_number, Evaluate, Interpreter};
pub use parser::{parse_expr_source, parse_program, Parser};
pub use scanner::Scanner;
pub use span::Span;
pub use token::{Token, TokenKind};
