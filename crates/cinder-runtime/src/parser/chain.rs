//! Build-time representation of operator chains
//!
//! `expr` and `term` are right-recursive in the grammar, so parsing
//! `a - b - c` naturally yields `a - (b - c)`. Instead of nesting the first
//! operand in front of the chain parsed for the rest, the parser appends it
//! at the chain's tail. The finished chain then runs from the textually last
//! operand back to the first, which is what evaluation and rendering rely on.
//!
//! Nothing here recurses, so chain length is bounded by memory, not stack.

use crate::ast::{Chain, Operator};

pub(super) struct ChainBuilder<T, O> {
    /// The textually last operand
    head: T,
    /// Appended nodes, head side first. Each operator links the node before
    /// it to the operand stored with it.
    links: Vec<(Operator<O>, T)>,
}

impl<T, O> ChainBuilder<T, O> {
    /// A single operand with no operator
    pub(super) fn leaf(operand: T) -> Self {
        Self {
            head: operand,
            links: Vec::new(),
        }
    }

    /// Fold operands given in source order the way the grammar nests them:
    /// the last operand becomes the head and each earlier one is appended
    /// after it. `rest` pairs each operator with the operand that follows it.
    pub(super) fn from_source(first: T, rest: Vec<(Operator<O>, T)>) -> Self {
        // Re-pair each operand with the operator that follows it
        let mut pending = first;
        let mut trailing = Vec::with_capacity(rest.len());
        for (op, operand) in rest {
            trailing.push((op, std::mem::replace(&mut pending, operand)));
        }

        let mut chain = Self::leaf(pending);
        for (op, operand) in trailing.into_iter().rev() {
            chain.append(operand, op);
        }
        chain
    }

    /// Attach `operand` after the tail. `op` is the operator that followed
    /// it in the source and becomes the link from the old tail.
    pub(super) fn append(&mut self, operand: T, op: Operator<O>) {
        self.links.push((op, operand));
    }

    /// Freeze into the immutable AST form, building from the tail up
    pub(super) fn finish(self) -> Chain<T, O> {
        let mut built: Option<(Operator<O>, Chain<T, O>)> = None;
        for (op, operand) in self.links.into_iter().rev() {
            let rest = built.map(|(next_op, chain)| (next_op, Box::new(chain)));
            built = Some((op, Chain { operand, rest }));
        }
        Chain {
            operand: self.head,
            rest: built.map(|(op, chain)| (op, Box::new(chain))),
        }
    }
}
