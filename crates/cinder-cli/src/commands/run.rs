//! Run command - interpret Cinder programs and optionally emit C

use super::{load_project_config, read_source, report_diagnostics};
use crate::config::Config;
use anyhow::{bail, Context, Result};
use cinder_runtime::Driver;
use std::path::{Path, PathBuf};

/// Flags that override the project configuration
#[derive(Debug, Default)]
pub struct RunArgs {
    pub emit: Option<PathBuf>,
    pub no_run: bool,
    pub json: bool,
}

/// Run a Cinder source file
pub fn run(file_path: &Path, args: RunArgs, cli_config: &Config) -> Result<()> {
    let source = read_source(file_path)?;
    let project = load_project_config(file_path)?;

    let mut driver_config = project.driver_config();
    if let Some(base) = args.emit {
        driver_config.emit_target = Some(base);
    }
    if args.no_run {
        driver_config.interpret = false;
    }
    driver_config
        .validate()
        .context("--no-run needs an emit target (--emit, CINDER_EMIT or cinder.toml)")?;

    let json = args.json || project.diagnostics.json;
    let driver = Driver::new(driver_config);
    tracing::info!(file = %file_path.display(), interpret = driver.config().interpret, "running");

    match driver.run_source(&source) {
        Ok(outcome) => {
            report_diagnostics(
                &outcome.warnings,
                file_path,
                json,
                project.diagnostics.color,
                cli_config,
            )?;
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
            bail!("Failed to run {}", file_path.display())
        }
    }
}
