//! Core runtime configuration.
//!
//! # Responsibility
//! - Resolve logging settings from the environment with build defaults.
//!
//! # Invariants
//! - Blank or missing values fall back to defaults.
//! - Values are not validated here; `init_logging` owns validation.

use crate::logging::{default_log_level, init_logging};
use std::path::PathBuf;

pub const LOG_LEVEL_ENV: &str = "GENZ_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "GENZ_LOG_DIR";
const DEFAULT_LOG_DIR_NAME: &str = "genz-logs";

/// Logging settings for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
        }
    }
}

impl CoreConfig {
    /// Reads `GENZ_LOG_LEVEL` and `GENZ_LOG_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_blank = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            log_level: non_blank(LOG_LEVEL_ENV).unwrap_or(defaults.log_level),
            log_dir: non_blank(LOG_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
        }
    }

    /// Starts core logging with these settings.
    pub fn init_logging(&self) -> Result<(), String> {
        let log_dir = self
            .log_dir
            .to_str()
            .ok_or_else(|| format!("log_dir is not valid UTF-8: {}", self.log_dir.display()))?;
        init_logging(&self.log_level, log_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use crate::logging::default_log_level;
    use std::path::PathBuf;

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = CoreConfig::from_lookup(|key| match key {
            LOG_LEVEL_ENV => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, CoreConfig::default().log_dir);
    }

    #[test]
    fn explicit_values_are_trimmed() {
        let config = CoreConfig::from_lookup(|key| match key {
            LOG_LEVEL_ENV => Some(" warn ".to_string()),
            LOG_DIR_ENV => Some("/var/log/genz".to_string()),
            _ => None,
        });
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, PathBuf::from("/var/log/genz"));
    }
}
