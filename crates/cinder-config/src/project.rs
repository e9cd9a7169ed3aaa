//! Project Configuration (cinder.toml)

use crate::{ConfigError, ConfigResult, DriverConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project configuration from cinder.toml
///
/// ```toml
/// [emit]
/// target = "build/prog"
/// interpret = false
///
/// [diagnostics]
/// json = true
/// color = "never"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct CinderConfig {
    #[serde(default)]
    pub emit: EmitConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// C emission settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EmitConfig {
    /// Base path of the emitted C file, without the `.c` extension
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<PathBuf>,

    /// Whether to interpret the program as well
    #[serde(default = "default_interpret")]
    pub interpret: bool,
}

fn default_interpret() -> bool {
    true
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            target: None,
            interpret: default_interpret(),
        }
    }
}

/// How diagnostics are presented
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// Emit diagnostics as JSON instead of human-readable text
    #[serde(default)]
    pub json: bool,

    #[serde(default)]
    pub color: ColorSetting,
}

/// Terminal colour preference for human-readable diagnostics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    #[default]
    Auto,
    Always,
    Never,
}

impl CinderConfig {
    /// Load configuration from a file, resolving a relative emit target
    /// against the file's directory
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::IoError(e)
            }
        })?;
        let mut config = Self::parse(&content, path)?;
        if let Some(dir) = path.parent() {
            config.resolve_target(dir);
        }
        Ok(config)
    }

    /// Anchor a relative emit target at `base_dir`
    pub fn resolve_target(&mut self, base_dir: &Path) {
        if let Some(target) = &self.emit.target {
            if target.is_relative() {
                self.emit.target = Some(base_dir.join(target));
            }
        }
    }

    /// Parse TOML text; `path` is only used for error reporting
    pub fn parse(content: &str, path: &Path) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::TomlParseError {
            file: path.to_path_buf(),
            error: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks on the file's own values. Whether the result has anything to do
    /// is decided later by [`DriverConfig::validate`], after overrides.
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(target) = &self.emit.target {
            if target.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "emit.target".to_string(),
                    reason: "target cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// The explicit configuration value handed to the runtime driver
    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            interpret: self.emit.interpret,
            emit_target: self.emit.target.clone(),
        }
    }
}
