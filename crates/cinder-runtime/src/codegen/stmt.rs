//! Statement rendering

use super::Render;
use crate::ast::*;

impl Render for Stmt {
    fn render(&self) -> String {
        match self {
            Stmt::Assign(assign) => {
                format!("{}={};", assign.target.name, assign.value.render())
            }
            Stmt::Read(read) => format!("scanf(\"%lf\", &{});", read.target.name),
            Stmt::Write(write) => {
                format!("printf(\"%g\\n\", (double)({}));", write.value.render())
            }
            Stmt::If(if_stmt) => {
                let mut out = format!(
                    "if ({}) {{{}}}",
                    if_stmt.cond.render(),
                    if_stmt.then_branch.render()
                );
                if let Some(else_branch) = &if_stmt.else_branch {
                    out.push_str(&format!(" else {{{}}}", else_branch.render()));
                }
                out
            }
            Stmt::While(while_stmt) => format!(
                "while ({}) {{{}}}",
                while_stmt.cond.render(),
                while_stmt.body.render()
            ),
            Stmt::Block(block) => block.render(),
        }
    }
}

impl Render for Block {
    fn render(&self) -> String {
        self.statements().map(Render::render).collect()
    }
}
