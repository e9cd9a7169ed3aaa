//! Configuration Loader
//!
//! Finds `cinder.toml` and layers environment variable overrides on top.

use crate::project::CinderConfig;
use crate::{ConfigError, ConfigResult};
use std::env;
use std::path::{Path, PathBuf};

/// Project configuration file name
pub const CONFIG_FILE_NAME: &str = "cinder.toml";

/// Emit target base path
pub const ENV_EMIT: &str = "CINDER_EMIT";
/// Legacy emit target variable, consulted when `CINDER_EMIT` is unset
pub const ENV_EMIT_LEGACY: &str = "Code";
/// `json` or `human`
pub const ENV_DIAGNOSTICS: &str = "CINDER_DIAGNOSTICS";

/// Configuration loader
///
/// Precedence, lowest first: defaults, `cinder.toml`, environment. CLI flags
/// are applied by the caller on the returned value.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Skip environment overrides (used by tests and embedders)
    ignore_env: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// A loader that never consults the process environment
    pub fn without_env() -> Self {
        Self { ignore_env: true }
    }

    /// Load configuration starting from the given directory
    ///
    /// Walks up the directory tree to the nearest `cinder.toml`; defaults are
    /// used when none exists.
    pub fn load_from_directory(&self, start_dir: &Path) -> ConfigResult<CinderConfig> {
        let config = match Self::find_config_file(start_dir) {
            Some(path) => CinderConfig::load_from_file(&path)?,
            None => CinderConfig::default(),
        };
        self.finish(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(&self, path: &Path) -> ConfigResult<CinderConfig> {
        let config = CinderConfig::load_from_file(path)?;
        self.finish(config)
    }

    /// Nearest `cinder.toml` at or above `start_dir`
    pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
        start_dir
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|path| path.is_file())
    }

    fn finish(&self, config: CinderConfig) -> ConfigResult<CinderConfig> {
        if self.ignore_env {
            return Ok(config);
        }
        let config = apply_overrides(config, |key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }
}

/// Apply environment overrides, reading variables through `lookup`
///
/// Empty values count as unset.
pub fn apply_overrides(
    mut config: CinderConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> ConfigResult<CinderConfig> {
    let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

    if let Some(target) = get(ENV_EMIT).or_else(|| get(ENV_EMIT_LEGACY)) {
        config.emit.target = Some(PathBuf::from(target));
    }

    if let Some(mode) = get(ENV_DIAGNOSTICS) {
        config.diagnostics.json = match mode.to_lowercase().as_str() {
            "json" => true,
            "human" | "text" => false,
            _ => {
                return Err(ConfigError::InvalidValue {
                    field: ENV_DIAGNOSTICS.to_string(),
                    reason: format!("expected `json` or `human`, found `{}`", mode),
                })
            }
        };
    }

    Ok(config)
}
