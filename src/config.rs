//! Application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable naming the settings file.
pub const SETTINGS_ENV: &str = "FLIPBOOK_SETTINGS";

/// Settings file used when nothing else is configured.
pub const DEFAULT_SETTINGS_FILE: &str = "flipbook_settings.json";

/// Top-level configuration for the command-line tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where preferences are persisted
    pub settings_path: PathBuf,
    /// Log at debug level instead of info
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings_path: PathBuf::from(DEFAULT_SETTINGS_FILE),
            verbose: false,
        }
    }
}

impl AppConfig {
    /// Resolve the settings path: explicit flag, then `FLIPBOOK_SETTINGS`,
    /// then the default file in the working directory.
    pub fn resolve(settings_flag: Option<PathBuf>, verbose: bool) -> Self {
        let from_env = std::env::var_os(SETTINGS_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::resolve_with(settings_flag, from_env, verbose)
    }

    fn resolve_with(flag: Option<PathBuf>, env: Option<PathBuf>, verbose: bool) -> Self {
        let settings_path = flag
            .or(env)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));
        Self {
            settings_path,
            verbose,
        }
    }

    /// Default `env_logger` filter for this configuration
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_env() {
        let config = AppConfig::resolve_with(
            Some(PathBuf::from("flag.json")),
            Some(PathBuf::from("env.json")),
            false,
        );
        assert_eq!(config.settings_path, PathBuf::from("flag.json"));
    }

    #[test]
    fn test_env_then_default() {
        let config = AppConfig::resolve_with(None, Some(PathBuf::from("env.json")), false);
        assert_eq!(config.settings_path, PathBuf::from("env.json"));

        let config = AppConfig::resolve_with(None, None, true);
        assert_eq!(config, AppConfig { verbose: true, ..AppConfig::default() });
        assert_eq!(config.log_filter(), "debug");
    }
}
