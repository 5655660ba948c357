use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::args::{launcher_registry, FlagRegistry};
use crate::config::types::Config;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "PKGRUN_CONFIG";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// `PKGRUN_CONFIG` wins when set. Otherwise uses
    /// `~/.config/pkgrun/config.toml` on Unix/macOS, or the equivalent via
    /// `dirs::config_dir()`, falling back to the current directory.
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return PathBuf::from(path);
        }
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pkgrun").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Every configured flag starts with `-` and has a name after the dashes
    /// - No configured flag shadows a built-in one
    /// - No flag name appears twice, across both lists and ignoring dashes
    ///   (`-registry` and `--registry` share the name `registry`)
    pub fn validate(&self) -> Result<(), ConfigError> {
        let builtin = launcher_registry();
        let mut seen: HashSet<String> = builtin.iter().map(|d| d.name().to_string()).collect();

        for def in self.flags.to_flag_defs() {
            let flag = &def.long;
            if !flag.starts_with('-') || def.name().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("'{}' is not a flag", flag),
                });
            }
            if builtin.lookup(flag).is_some() || builtin.iter().any(|b| b.name() == def.name()) {
                return Err(ConfigError::ValidationError {
                    message: format!("'{}' is a built-in flag and cannot be redefined", flag),
                });
            }
            if !seen.insert(def.name().to_string()) {
                return Err(ConfigError::ValidationError {
                    message: format!("'{}' is configured more than once", flag),
                });
            }
        }

        Ok(())
    }

    /// Built-in registry extended with the configured flags.
    pub fn registry(&self) -> FlagRegistry {
        launcher_registry().with_extra(self.flags.to_flag_defs())
    }
}
