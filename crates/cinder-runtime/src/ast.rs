//! Abstract Syntax Tree (AST) definitions
//!
//! Every node is a closed sum type or a plain struct owning its children.
//! The interpreter and the code generator each match exhaustively over these
//! types, so a new node kind cannot be added without giving it both a value
//! and a C rendering.

use crate::span::Span;
use serde::Serialize;

/// AST schema version, included in JSON dumps
pub const AST_VERSION: u32 = 1;

/// A parsed program: the top-level statement sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub body: Block,
}

impl Program {
    /// Every variable assigned or read into, in source order, duplicates included
    pub fn targets(&self) -> Vec<&Ident> {
        let mut out = Vec::new();
        for stmt in self.body.statements() {
            stmt.collect_targets(&mut out);
        }
        out
    }
}

/// Versioned AST wrapper for JSON serialization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionedProgram<'a> {
    pub ast_version: u32,
    #[serde(flatten)]
    pub program: &'a Program,
}

impl<'a> VersionedProgram<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self {
            ast_version: AST_VERSION,
            program,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// === Operators ===

/// An operator together with the position it was scanned at
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Operator<K> {
    pub kind: K,
    pub span: Span,
}

impl<K: BinaryOperator> Operator<K> {
    pub fn new(kind: K, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn apply(&self, left: f64, right: f64) -> f64 {
        self.kind.apply(left, right)
    }
}

/// Operators that combine two numbers
pub trait BinaryOperator: Copy {
    fn apply(self, left: f64, right: f64) -> f64;

    /// Spelling in Cinder source
    fn symbol(self) -> &'static str;
}

/// `+` and `-`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AddOp {
    Plus,
    Minus,
}

impl BinaryOperator for AddOp {
    fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            AddOp::Plus => left + right,
            AddOp::Minus => left - right,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            AddOp::Plus => "+",
            AddOp::Minus => "-",
        }
    }
}

/// `*` and `/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MulOp {
    Star,
    Slash,
}

impl BinaryOperator for MulOp {
    fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            MulOp::Star => left * right,
            MulOp::Slash => left / right,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            MulOp::Star => "*",
            MulOp::Slash => "/",
        }
    }
}

/// Relational operators; `apply` yields 1.0 for true and 0.0 for false
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RelOp {
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    NotEqual,
    Equal,
}

impl BinaryOperator for RelOp {
    fn apply(self, left: f64, right: f64) -> f64 {
        let holds = match self {
            RelOp::Less => left < right,
            RelOp::LessEqual => left <= right,
            RelOp::Greater => left > right,
            RelOp::GreaterEqual => left >= right,
            RelOp::NotEqual => left != right,
            RelOp::Equal => left == right,
        };
        if holds {
            1.0
        } else {
            0.0
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            RelOp::Less => "<",
            RelOp::LessEqual => "<=",
            RelOp::Greater => ">",
            RelOp::GreaterEqual => ">=",
            RelOp::NotEqual => "<>",
            RelOp::Equal => "==",
        }
    }
}

// === Expressions ===

/// A binary operator chain, linked from the textually last operand back to
/// the first.
///
/// `a - b + c` is stored as `c` whose `rest` is (`+`, `b` whose `rest` is
/// (`-`, `a`)). The continuation is always the earlier part of the source,
/// so walking it first yields left-associative values and left-to-right text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chain<T, O> {
    pub operand: T,
    pub rest: Option<(Operator<O>, Box<Chain<T, O>>)>,
}

/// `term (addop term)*`
pub type Expr = Chain<Term, AddOp>;

/// `fact (mulop fact)*`
pub type Term = Chain<Factor, MulOp>;

impl<T, O> Chain<T, O> {
    /// A chain with a single operand
    pub fn leaf(operand: T) -> Self {
        Self {
            operand,
            rest: None,
        }
    }

    /// The first operand and each following `(operator, operand)` pair,
    /// in source order. Walks the links in a loop.
    pub fn source_order(&self) -> (&T, Vec<(&Operator<O>, &T)>) {
        let mut pairs = Vec::new();
        let mut node = self;
        while let Some((op, rest)) = &node.rest {
            pairs.push((op, &node.operand));
            node = &**rest;
        }
        pairs.reverse();
        (&node.operand, pairs)
    }

    /// Operands in source order
    pub fn operands(&self) -> Vec<&T> {
        let (first, pairs) = self.source_order();
        std::iter::once(first)
            .chain(pairs.into_iter().map(|(_, operand)| operand))
            .collect()
    }

    /// Operators in source order
    pub fn operators(&self) -> Vec<&Operator<O>> {
        let (_, pairs) = self.source_order();
        pairs.into_iter().map(|(op, _)| op).collect()
    }

    pub fn len(&self) -> usize {
        let mut len = 1;
        let mut node = self;
        while let Some((_, rest)) = &node.rest {
            len += 1;
            node = &**rest;
        }
        len
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<T, O> Drop for Chain<T, O> {
    // Unlink one node at a time; the derived drop would recurse per operand
    fn drop(&mut self) {
        let mut next = self.rest.take();
        while let Some((_, mut chain)) = next {
            next = chain.rest.take();
        }
    }
}

/// The tightest-binding expression unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Factor {
    /// `( expr )`
    Group(Box<Expr>, Span),
    /// Variable reference
    Ident(Ident),
    /// Numeric literal, kept as scanned
    Number(NumberLit),
    /// `- fact`
    Negate(Box<Factor>, Span),
}

impl Factor {
    pub fn span(&self) -> Span {
        match self {
            Factor::Group(_, span) => *span,
            Factor::Ident(ident) => ident.span,
            Factor::Number(num) => num.span,
            Factor::Negate(_, span) => *span,
        }
    }
}

/// Identifier with source location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

/// Numeric literal; the lexeme is only validated when evaluated
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberLit {
    pub lexeme: String,
    pub span: Span,
}

/// `expr relop expr`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    pub left: Expr,
    pub op: Operator<RelOp>,
    pub right: Expr,
}

// === Statements ===

/// Exactly one statement alternative
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    Assign(Assign),
    Read(ReadStmt),
    Write(WriteStmt),
    If(IfStmt),
    While(WhileStmt),
    /// `begin block end`
    Block(Block),
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Assign(s) => s.span,
            Stmt::Read(s) => s.span,
            Stmt::Write(s) => s.span,
            Stmt::If(s) => s.span,
            Stmt::While(s) => s.span,
            Stmt::Block(s) => s.span,
        }
    }

    fn collect_targets<'a>(&'a self, out: &mut Vec<&'a Ident>) {
        match self {
            Stmt::Assign(assign) => out.push(&assign.target),
            Stmt::Read(read) => out.push(&read.target),
            Stmt::Write(_) => {}
            Stmt::If(if_stmt) => {
                if_stmt.then_branch.collect_targets(out);
                if let Some(else_branch) = &if_stmt.else_branch {
                    else_branch.collect_targets(out);
                }
            }
            Stmt::While(while_stmt) => while_stmt.body.collect_targets(out),
            Stmt::Block(block) => {
                for stmt in block.statements() {
                    stmt.collect_targets(out);
                }
            }
        }
    }
}

/// `id = expr`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assign {
    pub target: Ident,
    pub value: Expr,
    pub span: Span,
}

/// `rd id`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadStmt {
    pub target: Ident,
    pub span: Span,
}

/// `wr expr`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WriteStmt {
    pub value: Expr,
    pub span: Span,
}

/// `if cond then stmt [else stmt]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfStmt {
    pub cond: Condition,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
    pub span: Span,
}

/// `while cond do stmt`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhileStmt {
    pub cond: Condition,
    pub body: Box<Stmt>,
    pub span: Span,
}

/// A statement followed by an optional continuation block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub stmt: Box<Stmt>,
    pub rest: Option<Box<Block>>,
    pub span: Span,
}

impl Block {
    /// Statements in source order
    pub fn statements(&self) -> Statements<'_> {
        Statements { next: Some(self) }
    }
}

impl Drop for Block {
    fn drop(&mut self) {
        let mut next = self.rest.take();
        while let Some(mut block) = next {
            next = block.rest.take();
        }
    }
}

/// Iterator over the statements of a [`Block`] chain
pub struct Statements<'a> {
    next: Option<&'a Block>,
}

impl<'a> Iterator for Statements<'a> {
    type Item = &'a Stmt;

    fn next(&mut self) -> Option<Self::Item> {
        let block = self.next?;
        self.next = block.rest.as_deref();
        Some(&block.stmt)
    }
}
