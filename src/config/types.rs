use serde::{Deserialize, Serialize};

use crate::args::{FlagArity, FlagDef};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub flags: FlagsConfig,
}

/// Launcher flags the parser should recognize beyond the built-in ones.
///
/// Without an entry here, a flag is assumed to take one value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagsConfig {
    /// Flags that take no value (e.g., "--prefer-offline").
    #[serde(default)]
    pub boolean: Vec<String>,
    /// Flags that take exactly one value (e.g., "--registry").
    #[serde(default)]
    pub valued: Vec<String>,
}

impl FlagsConfig {
    /// Flag definitions to append to the built-in registry.
    pub fn to_flag_defs(&self) -> Vec<FlagDef> {
        let boolean = self
            .boolean
            .iter()
            .map(|f| FlagDef::extra(f, FlagArity::NoValue));
        let valued = self
            .valued
            .iter()
            .map(|f| FlagDef::extra(f, FlagArity::RequiresValue));
        boolean.chain(valued).collect()
    }
}
