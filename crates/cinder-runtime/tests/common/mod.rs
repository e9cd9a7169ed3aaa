//! Shared test utilities for the Cinder runtime tests

#![allow(dead_code)]

use cinder_runtime::{
    parse_expr_source, parse_program, Environment, EvalError, Evaluate, Interpreter, Program,
    Span,
};
use std::io::Cursor;

/// Parse a program, panicking with the syntax error on failure
pub fn parse_ok(source: &str) -> Program {
    match parse_program(source) {
        Ok(program) => program,
        Err(e) => panic!("{:?} failed to parse: {} at {:?}", source, e, e.span()),
    }
}

/// Result of running a program on a canned input
pub struct Run {
    pub result: Result<f64, EvalError>,
    pub stdout: String,
    pub env: Environment,
}

impl Run {
    /// Value of `name`, panicking when it is not set
    pub fn var(&self, name: &str) -> f64 {
        self.env
            .get(Span::dummy(), name)
            .unwrap_or_else(|e| panic!("{}", e))
    }
}

/// Run `source` with `input` as stdin
pub fn run_with_input(source: &str, input: &str) -> Run {
    let program = parse_ok(source);
    let mut interp = Interpreter::with_io(Cursor::new(input.to_string()), Vec::new());
    let result = interp.run(&program);
    let env = interp.env().clone();
    let stdout = String::from_utf8(interp.into_output()).expect("utf-8 output");
    Run {
        result,
        stdout,
        env,
    }
}

/// Run `source` with empty stdin
pub fn run(source: &str) -> Run {
    run_with_input(source, "")
}

/// Assert that a program evaluates to a number
pub fn assert_program_value(source: &str, expected: f64) {
    match run(source).result {
        Ok(n) => assert_eq!(n, expected, "program {:?}", source),
        Err(e) => panic!("program {:?} failed: {}", source, e),
    }
}

/// Evaluate an expression against `vars`
pub fn eval_expr(source: &str, vars: &[(&str, f64)]) -> Result<f64, EvalError> {
    let mut env = Environment::new();
    for (name, value) in vars {
        env.put(name, *value);
    }
    let expr = parse_expr_source(source).unwrap_or_else(|e| panic!("{:?}: {}", source, e));
    expr.evaluate(&env)
}
