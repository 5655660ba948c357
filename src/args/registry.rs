//! Flag registry — single source of truth for launcher flags.

/// What the parser does with a recognized flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagRole {
    /// Names a package to make available (`-p`, `--package`).
    Package,
    /// Carries a whole command line as one string (`-c`, `--call`).
    Call,
    /// Launcher option — recorded, never forwarded to the command.
    Option,
}

/// Whether a flag takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagArity {
    /// Boolean flag, no value (e.g., --ignore-existing, --quiet).
    NoValue,
    /// Requires exactly one value (e.g., --package <NAME>).
    RequiresValue,
}

/// A single flag definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagDef {
    /// Primary long form (e.g., "--package").
    pub long: String,
    /// Optional short form (e.g., "-p").
    pub short: Option<String>,
    /// Does it take a value?
    pub arity: FlagArity,
    /// How the parser handles it.
    pub role: FlagRole,
    /// Human-readable description (for help text).
    pub description: String,
}

impl FlagDef {
    fn builtin(
        long: &str,
        short: Option<&str>,
        arity: FlagArity,
        role: FlagRole,
        description: &str,
    ) -> Self {
        Self {
            long: long.to_string(),
            short: short.map(String::from),
            arity,
            role,
            description: description.to_string(),
        }
    }

    /// Launcher option declared outside the built-in table (e.g. from config).
    pub fn extra(long: &str, arity: FlagArity) -> Self {
        Self::builtin(long, None, arity, FlagRole::Option, "Configured launcher flag")
    }

    /// Check if this definition matches the given argument string.
    pub fn matches(&self, arg: &str) -> bool {
        arg == self.long || self.short.as_deref() == Some(arg)
    }

    /// Long form without its leading dashes (`--cache` → `cache`).
    pub fn name(&self) -> &str {
        self.long.trim_start_matches('-')
    }
}

/// Ordered collection of flag definitions consulted by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagRegistry {
    defs: Vec<FlagDef>,
}

impl FlagRegistry {
    /// Append extra definitions after the existing ones.
    ///
    /// Built-in definitions win on lookup since they come first.
    pub fn with_extra(mut self, extra: impl IntoIterator<Item = FlagDef>) -> Self {
        self.defs.extend(extra);
        self
    }

    /// Find the definition matching a token, if any.
    pub fn lookup(&self, arg: &str) -> Option<&FlagDef> {
        self.defs.iter().find(|d| d.matches(arg))
    }

    /// All definitions in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = &FlagDef> {
        self.defs.iter()
    }
}

impl Default for FlagRegistry {
    fn default() -> Self {
        launcher_registry()
    }
}

/// Build the built-in launcher flag registry.
pub fn launcher_registry() -> FlagRegistry {
    let defs = vec![
        // === Flags that shape the parse result ===
        FlagDef::builtin(
            "--package",
            Some("-p"),
            FlagArity::RequiresValue,
            FlagRole::Package,
            "Package to be installed",
        ),
        FlagDef::builtin(
            "--call",
            Some("-c"),
            FlagArity::RequiresValue,
            FlagRole::Call,
            "Command string to be executed",
        ),
        // === Launcher options with values ===
        FlagDef::builtin(
            "--cache",
            None,
            FlagArity::RequiresValue,
            FlagRole::Option,
            "Location of the package cache",
        ),
        FlagDef::builtin(
            "--userconfig",
            None,
            FlagArity::RequiresValue,
            FlagRole::Option,
            "Path to user configuration file",
        ),
        FlagDef::builtin(
            "--shell",
            None,
            FlagArity::RequiresValue,
            FlagRole::Option,
            "Shell to execute the command with",
        ),
        // === Boolean launcher options ===
        FlagDef::builtin(
            "--ignore-existing",
            None,
            FlagArity::NoValue,
            FlagRole::Option,
            "Ignore existing binaries in $PATH or in the local project",
        ),
        FlagDef::builtin(
            "--no-install",
            None,
            FlagArity::NoValue,
            FlagRole::Option,
            "Skip installation if a package is missing",
        ),
        FlagDef::builtin(
            "--quiet",
            Some("-q"),
            FlagArity::NoValue,
            FlagRole::Option,
            "Suppress launcher output",
        ),
        FlagDef::builtin(
            "--help",
            Some("-h"),
            FlagArity::NoValue,
            FlagRole::Option,
            "Show help",
        ),
        FlagDef::builtin(
            "--version",
            Some("-v"),
            FlagArity::NoValue,
            FlagRole::Option,
            "Show version",
        ),
    ];
    FlagRegistry { defs }
}
