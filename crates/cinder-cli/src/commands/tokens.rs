//! Token dump command - output the token stream as JSON

use super::read_source;
use anyhow::Result;
use cinder_runtime::Scanner;
use std::path::Path;

/// Dump tokens to JSON, up to and including `EOF`
///
/// Illegal characters do not stop the dump; their warnings go to stderr.
pub fn run(file_path: &Path) -> Result<()> {
    let source = read_source(file_path)?;
    let (tokens, warnings) = Scanner::new(&source).tokenize();

    for diag in warnings {
        eprintln!("{}", diag.enrich(&source).to_json_compact()?);
    }

    println!("{}", serde_json::to_string_pretty(&tokens)?);
    Ok(())
}
