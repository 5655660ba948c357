//! Launcher configuration: optional TOML file extending the flag registry.

mod loader;
mod types;

pub use loader::{ConfigError, CONFIG_ENV_VAR};
pub use types::{Config, FlagsConfig};
