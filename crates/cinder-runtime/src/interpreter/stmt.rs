//! Statement execution

use super::expr::Evaluate;
use super::Interpreter;
use crate::ast::*;
use crate::error::EvalError;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Execute one statement and return its value
    pub fn exec(&mut self, stmt: &Stmt) -> Result<f64, EvalError> {
        tracing::trace!(span = ?stmt.span(), "exec");
        match stmt {
            Stmt::Assign(assign) => {
                let value = assign.value.evaluate(&self.env)?;
                Ok(self.env.put(&assign.target.name, value))
            }
            Stmt::Read(read) => {
                let value = self.read_number(read.span)?;
                Ok(self.env.put(&read.target.name, value))
            }
            Stmt::Write(write) => {
                let value = write.value.evaluate(&self.env)?;
                self.write_number(value, write.span)?;
                Ok(value)
            }
            Stmt::If(if_stmt) => self.exec_if(if_stmt),
            Stmt::While(while_stmt) => self.exec_while(while_stmt),
            Stmt::Block(block) => self.exec_block(block),
        }
    }

    /// Run each statement in order; the value is the last one's
    pub(super) fn exec_block(&mut self, block: &Block) -> Result<f64, EvalError> {
        let mut value = 0.0;
        for stmt in block.statements() {
            value = self.exec(stmt)?;
        }
        Ok(value)
    }

    fn exec_if(&mut self, if_stmt: &IfStmt) -> Result<f64, EvalError> {
        if if_stmt.cond.evaluate(&self.env)? != 0.0 {
            self.exec(&if_stmt.then_branch)
        } else if let Some(else_branch) = &if_stmt.else_branch {
            self.exec(else_branch)
        } else {
            Ok(0.0)
        }
    }

    /// Value of the last body run, or 0 if the body never ran
    fn exec_while(&mut self, while_stmt: &WhileStmt) -> Result<f64, EvalError> {
        let mut value = 0.0;
        while while_stmt.cond.evaluate(&self.env)? != 0.0 {
            value = self.exec(&while_stmt.body)?;
        }
        Ok(value)
    }
}
