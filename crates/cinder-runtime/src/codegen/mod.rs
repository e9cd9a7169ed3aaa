//! C code generation
//!
//! Every node renders to C source text with the same meaning as its
//! evaluation. A program is wrapped in a fixed translation unit:
//! [`PROLOGUE`], the environment's declaration block, the rendered body and
//! [`EPILOGUE`].

mod expr;
mod stmt;

use crate::ast::Program;
use crate::environment::Environment;

/// Includes and the opening of `main`
pub const PROLOGUE: &str = "#include <stdio.h>\nint main() {\n";

/// Return from `main` and close it
pub const EPILOGUE: &str = "return 0;\n}\n";

/// Nodes that can be spelled out as C source
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Program {
    fn render(&self) -> String {
        self.body.render()
    }
}

/// Complete C translation unit for `program`, declaring the variables in `env`
pub fn emit(program: &Program, env: &Environment) -> String {
    let body = program.render();
    let declarations = env.to_c();

    let mut out = String::with_capacity(
        PROLOGUE.len() + declarations.len() + body.len() + EPILOGUE.len(),
    );
    out.push_str(PROLOGUE);
    out.push_str(&declarations);
    out.push_str(&body);
    out.push_str(EPILOGUE);

    tracing::debug!(bytes = out.len(), variables = env.len(), "emitted translation unit");
    out
}
