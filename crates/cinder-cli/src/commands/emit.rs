//! Emit command - translate a Cinder program to C without running it

use super::{load_project_config, read_source, report_diagnostics};
use crate::config::Config;
use anyhow::{bail, Result};
use cinder_runtime::{Driver, DriverConfig};
use std::path::{Path, PathBuf};

/// Write `<output>.c`, or print the translation when no output is given
pub fn run(
    file_path: &Path,
    output: Option<PathBuf>,
    json: bool,
    cli_config: &Config,
) -> Result<()> {
    let source = read_source(file_path)?;
    let project = load_project_config(file_path)?;
    let json = json || project.diagnostics.json;

    let driver = Driver::new(DriverConfig {
        interpret: false,
        emit_target: output,
    });

    let result = if driver.emit_path().is_some() {
        driver.run_source(&source)
    } else {
        driver.translate(&source)
    };

    match result {
        Ok(outcome) => {
            report_diagnostics(
                &outcome.warnings,
                file_path,
                json,
                project.diagnostics.color,
                cli_config,
            )?;
            match driver.emit_path() {
                Some(path) => tracing::info!(path = %path.display(), "emitted"),
                None => print!("{}", outcome.emitted.unwrap_or_default()),
            }
            Ok(())
        }
        Err(diagnostics) => {
            report_diagnostics(
                &diagnostics,
                file_path,
                json,
                project.diagnostics.color,
                cli_config,
            )?;
            bail!("Failed to translate {}", file_path.display())
        }
    }
}
