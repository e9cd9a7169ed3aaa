//! CLI configuration via environment variables
//!
//! Settings that only concern the terminal front end. Everything that
//! shapes a driver run comes from `cinder-config`.

use std::env;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Disable colored output (CINDER_NO_COLOR=1 or NO_COLOR=1)
    pub no_color: bool,
    /// Log level name (CINDER_LOG=debug); `-v` flags take precedence
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            no_color: env::var("CINDER_NO_COLOR").is_ok() || env::var("NO_COLOR").is_ok(),
            log_level: env::var("CINDER_LOG").ok().filter(|v| !v.is_empty()),
        }
    }
}
