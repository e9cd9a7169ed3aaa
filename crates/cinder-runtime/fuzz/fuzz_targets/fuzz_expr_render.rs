//! Expression render/reparse fuzzer
//!
//! Rendered expressions are valid Cinder expressions again and evaluate to
//! the same value as the original.

#![no_main]

use libfuzzer_sys::fuzz_target;

use cinder_runtime::{parse_expr_source, Environment, Evaluate, Render};

fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };
    let Ok(expr) = parse_expr_source(input) else {
        return;
    };

    let rendered = expr.render();
    let reparsed = match parse_expr_source(&rendered) {
        Ok(e) => e,
        Err(e) => panic!("rendered expression `{rendered}` does not parse: {e}"),
    };

    let mut env = Environment::new();
    for name in ["a", "b", "c", "x", "y", "z"] {
        env.put(name, 3.0);
    }
    let before = expr.evaluate(&env).ok().map(f64::to_bits);
    let after = reparsed.evaluate(&env).ok().map(f64::to_bits);
    assert_eq!(before, after, "`{input}` and `{rendered}` disagree");
});
