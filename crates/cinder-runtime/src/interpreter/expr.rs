//! Expression evaluation

use crate::ast::*;
use crate::environment::Environment;
use crate::error::EvalError;

/// Nodes whose value depends only on the variables in scope
pub trait Evaluate {
    fn evaluate(&self, env: &Environment) -> Result<f64, EvalError>;
}

/// Operands are folded in source order, each combined with the value so far
/// on the left.
impl<T: Evaluate, O: BinaryOperator> Evaluate for Chain<T, O> {
    fn evaluate(&self, env: &Environment) -> Result<f64, EvalError> {
        let (first, pairs) = self.source_order();
        let mut value = first.evaluate(env)?;
        for (op, operand) in pairs {
            value = op.apply(value, operand.evaluate(env)?);
        }
        Ok(value)
    }
}

impl Evaluate for Factor {
    fn evaluate(&self, env: &Environment) -> Result<f64, EvalError> {
        match self {
            Factor::Group(inner, _) => inner.evaluate(env),
            Factor::Ident(ident) => env.get(ident.span, &ident.name),
            Factor::Number(num) => num.evaluate(env),
            Factor::Negate(inner, _) => Ok(-inner.evaluate(env)?),
        }
    }
}

impl Evaluate for NumberLit {
    fn evaluate(&self, _env: &Environment) -> Result<f64, EvalError> {
        self.lexeme
            .parse::<f64>()
            .map_err(|_| EvalError::MalformedNumber {
                lexeme: self.lexeme.clone(),
                span: self.span,
            })
    }
}

impl Evaluate for Condition {
    fn evaluate(&self, env: &Environment) -> Result<f64, EvalError> {
        let left = self.left.evaluate(env)?;
        let right = self.right.evaluate(env)?;
        Ok(self.op.apply(left, right))
    }
}
