//! Subcommand implementations and the helpers they share

pub mod ast;
pub mod emit;
pub mod run;
pub mod tokens;

use crate::config::Config;
use anyhow::{Context, Result};
use cinder_config::{CinderConfig, ColorSetting, ConfigLoader};
use cinder_runtime::diagnostic::formatter::{ColorMode, DiagnosticFormatter};
use cinder_runtime::Diagnostic;
use std::fs;
use std::path::Path;

/// Read a program file
pub fn read_source(file_path: &Path) -> Result<String> {
    fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read source file: {}", file_path.display()))
}

/// Project configuration for the directory holding `file_path`
pub fn load_project_config(file_path: &Path) -> Result<CinderConfig> {
    let dir = match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir()?,
    };
    let config = ConfigLoader::new()
        .load_from_directory(&dir)
        .context("Failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

/// Print diagnostics to stderr, as JSON lines or human-readable text
pub fn report_diagnostics(
    diagnostics: &[Diagnostic],
    file_path: &Path,
    json: bool,
    color: ColorSetting,
    cli_config: &Config,
) -> Result<()> {
    let file = file_path.display().to_string();
    let diagnostics: Vec<Diagnostic> = diagnostics
        .iter()
        .cloned()
        .map(|d| d.with_file(file.clone()))
        .collect();

    if json {
        for diag in &diagnostics {
            eprintln!("{}", diag.to_json_compact()?);
        }
        return Ok(());
    }

    let mode = if cli_config.no_color {
        ColorMode::Never
    } else {
        match color {
            ColorSetting::Auto => ColorMode::Auto,
            ColorSetting::Always => ColorMode::Always,
            ColorSetting::Never => ColorMode::Never,
        }
    };
    DiagnosticFormatter::new(mode).emit_all(&diagnostics);
    Ok(())
}
