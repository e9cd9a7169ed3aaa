//! Expression rendering

use super::Render;
use crate::ast::*;

/// Operands are written in source order.
/// No parentheses are added; the source grouping is reproduced as written.
impl<T: Render, O: BinaryOperator> Render for Chain<T, O> {
    fn render(&self) -> String {
        let (first, pairs) = self.source_order();
        let mut out = first.render();
        for (op, operand) in pairs {
            out.push_str(op.kind.symbol());
            out.push_str(&operand.render());
        }
        out
    }
}

impl Render for Factor {
    fn render(&self) -> String {
        match self {
            Factor::Group(inner, _) => format!("({})", inner.render()),
            Factor::Ident(ident) => ident.name.clone(),
            Factor::Number(num) => num.lexeme.clone(),
            Factor::Negate(inner, _) => format!("(-{})", inner.render()),
        }
    }
}

impl RelOp {
    /// Spelling in C
    pub fn c_symbol(self) -> &'static str {
        match self {
            RelOp::NotEqual => "!=",
            other => other.symbol(),
        }
    }
}

impl Render for Condition {
    fn render(&self) -> String {
        format!(
            "({}{}{})",
            self.left.render(),
            self.op.kind.c_symbol(),
            self.right.render()
        )
    }
}
