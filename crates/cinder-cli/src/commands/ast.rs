//! AST dump command - output AST as JSON

use super::read_source;
use anyhow::{anyhow, Result};
use cinder_runtime::{Driver, DriverConfig, VersionedProgram};
use std::path::Path;

/// Dump AST to JSON
///
/// Parses the source file and outputs the AST as JSON to stdout.
/// Diagnostics go to stderr as JSON lines.
pub fn run(file_path: &Path) -> Result<()> {
    let source = read_source(file_path)?;

    let driver = Driver::new(DriverConfig::default());
    let (program, warnings) = match driver.parse(&source) {
        Ok(parsed) => parsed,
        Err(diagnostics) => {
            for diag in &diagnostics {
                eprintln!("{}", diag.to_json_compact()?);
            }
            return Err(anyhow!("Parse errors"));
        }
    };

    for diag in &warnings {
        eprintln!("{}", diag.to_json_compact()?);
    }

    let versioned = VersionedProgram::new(&program);
    println!("{}", versioned.to_json()?);
    Ok(())
}
