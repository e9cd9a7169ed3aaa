//! Cinder Configuration System
//!
//! Loads `cinder.toml` and applies environment overrides, producing the
//! explicit [`DriverConfig`] the runtime driver is constructed with.
//!
//! # Configuration Hierarchy
//!
//! Later sources override earlier ones:
//! 1. Built-in defaults (interpret, no emission, human diagnostics)
//! 2. Project config (`cinder.toml`, nearest ancestor directory)
//! 3. Environment variables (`CINDER_EMIT`, legacy `Code`, `CINDER_DIAGNOSTICS`)
//! 4. CLI flags (applied by the caller)
//!
//! A relative `emit.target` in `cinder.toml` is resolved against the directory
//! holding that file. Targets from the environment or CLI stay relative to the
//! working directory.
//!
//! # Example
//!
//! ```no_run
//! use cinder_config::ConfigLoader;
//! use std::path::Path;
//!
//! let loader = ConfigLoader::new();
//! let config = loader.load_from_directory(Path::new(".")).unwrap();
//! let driver_config = config.driver_config();
//! driver_config.validate().unwrap();
//! ```

pub mod loader;
pub mod project;

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParseError {
        file: PathBuf,
        error: toml::de::Error,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// What a driver run does: interpret, emit C, or both
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Run the program
    pub interpret: bool,
    /// Base path of the C file to write; `.c` is appended
    pub emit_target: Option<PathBuf>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            interpret: true,
            emit_target: None,
        }
    }
}

impl DriverConfig {
    /// Reject a configuration that neither interprets nor emits.
    ///
    /// Only meaningful once every layer, CLI flags included, has been applied.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.interpret && self.emit_target.is_none() {
            return Err(ConfigError::InvalidValue {
                field: "emit.interpret".to_string(),
                reason: "interpretation disabled with no emit target leaves nothing to do"
                    .to_string(),
            });
        }
        Ok(())
    }
}

pub use loader::{apply_overrides, ConfigLoader, CONFIG_FILE_NAME};
pub use project::{CinderConfig, ColorSetting, DiagnosticsConfig, EmitConfig};
