//! Argument parser — argument vector → launch plan.
//!
//! A single left-to-right pass driven by [`ScanState`]. Which tokens are
//! read as flags depends on whether a command has been fixed yet, and on
//! how it was fixed:
//!
//! ```text
//! ScanningFlags --positional / `--` <cmd>--> CommandFixed
//! ScanningFlags --`-c <string>`-----------> CallFixed --`--`--> CommandFixed
//! ```
//!
//! `CallFixed` still honors the package flag (a trailing `-p` names the
//! package) and `--`; every other token becomes a command option.
//! `CommandFixed` copies everything verbatim.

use std::collections::BTreeMap;
use std::slice::Iter;

use serde::Serialize;

use crate::args::classifier::{classify, Token};
use crate::args::registry::{launcher_registry, FlagArity, FlagDef, FlagRegistry, FlagRole};
use crate::args::spec::PackageSpec;

/// Number of leading platform tokens (runtime path, script path) in a raw argv.
pub const PLATFORM_TOKENS: usize = 2;

/// Result of parsing launcher arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedArguments {
    /// Binary or script to execute.
    pub command: String,
    /// Package expected to provide `command`.
    pub package: PackageSpec,
    /// Every requested package in order; `package` is the first one.
    pub packages: Vec<PackageSpec>,
    /// Package came from `-p`/`--package` rather than from the command.
    pub package_requested: bool,
    /// Command token carried its own version (`foo@1.2.3`).
    pub cmd_had_version: bool,
    /// Arguments forwarded verbatim to the command.
    pub cmd_opts: Vec<String>,
    /// Launcher options seen before the command, keyed by long name.
    pub options: BTreeMap<String, Option<String>>,
    /// Notes about degraded input. Never affects the fields above.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

impl ParsedArguments {
    /// Whether the launcher option `name` (long form, no dashes) was given.
    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// No command yet; every flag is interpreted.
    ScanningFlags,
    /// Command fixed by a call-string; only `-p` and `--` still interpreted.
    CallFixed,
    /// Command fixed positionally or past `--`; everything is passthrough.
    CommandFixed,
}

/// How the command was fixed.
#[derive(Debug)]
struct FixedCommand {
    command: String,
    had_version: bool,
    inferred: PackageSpec,
}

/// Accumulator threaded through the scan.
#[derive(Debug, Default)]
struct Scan {
    fixed: Option<FixedCommand>,
    packages: Vec<PackageSpec>,
    cmd_opts: Vec<String>,
    options: BTreeMap<String, Option<String>>,
    warnings: Vec<String>,
}

impl Scan {
    fn warn(&mut self, message: String) {
        tracing::debug!(warning = %message, "degraded input");
        self.warnings.push(message);
    }

    /// Fix the command from a positional token (or the token after `--`).
    ///
    /// Once a package was requested the token is taken literally: it names
    /// a binary inside that package, not a package itself.
    fn fix_positional(&mut self, raw: &str) {
        let spec = PackageSpec::parse(raw);
        let fixed = if self.packages.is_empty() {
            FixedCommand {
                command: spec.command_name().to_string(),
                had_version: spec.had_version,
                inferred: spec,
            }
        } else {
            FixedCommand {
                command: raw.to_string(),
                had_version: false,
                inferred: spec,
            }
        };
        tracing::debug!(command = %fixed.command, "command fixed by positional token");
        self.fixed = Some(fixed);
    }

    /// Fix the command from a call-string. Returns false for a blank string.
    ///
    /// The first word follows the same rules as a positional command.
    fn fix_call(&mut self, call: &str) -> bool {
        let mut words = call.split_whitespace();
        let Some(first) = words.next() else {
            self.warn("--call: empty command string, ignoring".to_string());
            return false;
        };
        self.fix_positional(first);
        self.cmd_opts = words.map(String::from).collect();
        tracing::debug!(call = %call, "command fixed by call-string");
        true
    }

    /// Consume the value of a flag that requires one.
    fn take_value(&mut self, flag: &str, tokens: &mut Iter<'_, String>) -> Option<String> {
        let value = tokens.next().cloned();
        if value.is_none() {
            self.warn(format!("{}: missing required value", flag));
        }
        value
    }

    /// Interpret a registered flag. Returns true when it fixed the command.
    fn apply_flag(&mut self, def: &FlagDef, tokens: &mut Iter<'_, String>) -> bool {
        match (def.role, def.arity) {
            (FlagRole::Package, _) => {
                if let Some(value) = self.take_value(&def.long, tokens) {
                    self.packages.push(PackageSpec::parse(&value));
                }
                false
            }
            (FlagRole::Call, _) => {
                self.take_value(&def.long, tokens)
                    .is_some_and(|value| self.fix_call(&value))
            }
            (FlagRole::Option, FlagArity::NoValue) => {
                self.options.insert(def.name().to_string(), None);
                false
            }
            (FlagRole::Option, FlagArity::RequiresValue) => {
                let value = self.take_value(&def.long, tokens);
                self.options.insert(def.name().to_string(), value);
                false
            }
        }
    }

    /// Unknown flags are assumed to take exactly one value; both are dropped.
    ///
    /// There is no way to tell a valueless unknown flag from one with a
    /// value, so a valueless one swallows the following token.
    fn skip_unknown(&mut self, flag: &str, tokens: &mut Iter<'_, String>) {
        match tokens.next() {
            Some(value) => self.warn(format!("{}: unknown flag, skipping it and '{}'", flag, value)),
            None => self.warn(format!("{}: unknown flag, skipping it", flag)),
        }
    }

    fn finish(self) -> ParsedArguments {
        let (command, cmd_had_version, inferred) = match self.fixed {
            Some(fixed) => (fixed.command, fixed.had_version, fixed.inferred),
            None => (String::new(), false, PackageSpec::parse("")),
        };

        let package_requested = !self.packages.is_empty();
        let packages = if package_requested {
            self.packages
        } else {
            vec![inferred]
        };

        ParsedArguments {
            command,
            package: packages[0].clone(),
            packages,
            package_requested,
            cmd_had_version,
            cmd_opts: self.cmd_opts,
            options: self.options,
            warnings: self.warnings,
        }
    }
}

/// Parse a full process argument vector with the built-in registry.
///
/// The first [`PLATFORM_TOKENS`] entries are dropped unseen.
pub fn parse(argv: &[String]) -> ParsedArguments {
    let args = argv.get(PLATFORM_TOKENS..).unwrap_or(&[]);
    parse_args(args, &launcher_registry())
}

/// Parse launcher arguments (platform tokens already removed).
///
/// Total over all inputs: malformed flag usage degrades into warnings.
pub fn parse_args(args: &[String], registry: &FlagRegistry) -> ParsedArguments {
    let mut scan = Scan::default();
    let mut state = ScanState::ScanningFlags;
    let mut tokens = args.iter();

    while let Some(arg) = tokens.next() {
        state = match (state, classify(arg, registry)) {
            (ScanState::CommandFixed, _) => {
                scan.cmd_opts.push(arg.clone());
                state
            }
            (ScanState::ScanningFlags, Token::Separator) => {
                tracing::debug!("separator reached, flag parsing finished");
                if let Some(next) = tokens.next() {
                    scan.fix_positional(next);
                }
                ScanState::CommandFixed
            }
            (ScanState::CallFixed, Token::Separator) => {
                tracing::debug!("separator reached, flag parsing finished");
                ScanState::CommandFixed
            }
            (ScanState::ScanningFlags, Token::Known(def)) => {
                if scan.apply_flag(def, &mut tokens) {
                    ScanState::CallFixed
                } else {
                    state
                }
            }
            (ScanState::CallFixed, Token::Known(def)) if def.role == FlagRole::Package => {
                scan.apply_flag(def, &mut tokens);
                state
            }
            (ScanState::CallFixed, _) => {
                scan.cmd_opts.push(arg.clone());
                state
            }
            (ScanState::ScanningFlags, Token::Unknown(flag)) => {
                scan.skip_unknown(&flag, &mut tokens);
                state
            }
            (ScanState::ScanningFlags, Token::Positional(word)) => {
                scan.fix_positional(&word);
                ScanState::CommandFixed
            }
        };
    }

    scan.finish()
}
