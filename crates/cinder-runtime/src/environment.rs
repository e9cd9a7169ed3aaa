//! Variable storage for one interpretation run

use crate::ast::Program;
use crate::error::EvalError;
use crate::span::Span;
use std::collections::BTreeMap;

/// Name to value mapping. Names are kept sorted, which fixes the order of
/// the emitted C declarations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: BTreeMap<String, f64>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-valued environment holding every assignment and read target in
    /// `program`, whether or not that statement would ever execute
    pub fn declarations(program: &Program) -> Self {
        let mut env = Self::new();
        for target in program.targets() {
            env.put(&target.name, 0.0);
        }
        env
    }

    /// Insert or overwrite, returning the stored value
    pub fn put(&mut self, name: &str, value: f64) -> f64 {
        self.variables.insert(name.to_string(), value);
        value
    }

    /// Look up `name`; `span` is where the reference occurs
    pub fn get(&self, span: Span, name: &str) -> Result<f64, EvalError> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::UndefinedVariable {
                name: name.to_string(),
                span,
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.variables.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Add every name from `other` not already present here, zero-valued
    pub fn declare_all(&mut self, other: &Environment) {
        for name in other.variables.keys() {
            self.variables.entry(name.clone()).or_insert(0.0);
        }
    }

    /// C declaration block: one `double` declaration naming every variable,
    /// then a zero initialization for each. Empty when there are no variables.
    pub fn to_c(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let names: Vec<&str> = self.variables.keys().map(String::as_str).collect();
        let mut out = format!("double {};\n", names.join(","));
        for name in &names {
            out.push_str(name);
            out.push_str("=0;");
        }
        out.push('\n');
        out
    }
}
