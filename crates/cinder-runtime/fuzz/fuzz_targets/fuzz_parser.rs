//! Scanner and parser stability fuzzer
//!
//! No input may panic the scanner or the parser, and parsing the same text
//! twice must give the same answer.

#![no_main]

use libfuzzer_sys::fuzz_target;

use cinder_runtime::{Parser, Render, Scanner, TokenKind};

fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };

    let (tokens, _) = Scanner::new(input).tokenize();
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    for pair in tokens.windows(2) {
        assert!(pair[0].span.end <= pair[1].span.start);
    }

    let first = Parser::new(input).parse();
    let second = Parser::new(input).parse();
    assert_eq!(first, second, "parser is non-deterministic");

    // Rendering walks the whole tree
    if let Ok(program) = first {
        let _ = program.render();
    }
});
