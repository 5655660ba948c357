//! Usage text rendered from the flag registry.
//!
//! The registry, not clap, decides how arguments are parsed; clap is only
//! used to lay out the help screen.

use clap::{Arg, ArgAction, Command};

use crate::args::{FlagArity, FlagRegistry};

const USAGE: &str = "pkgrun [options] <command>[@version] [command-arg]...
       pkgrun [options] [-p <package>]... -c '<command-string>'
       pkgrun [options] -- <command> [command-arg]...";

/// Build a clap command describing every registered flag.
pub fn help_command(registry: &FlagRegistry) -> Command {
    let mut cmd = Command::new("pkgrun")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve which command to run and which package provides it")
        .override_usage(USAGE)
        .disable_help_flag(true)
        .disable_version_flag(true);

    for def in registry.iter() {
        let name = def.name().to_string();
        let mut arg = Arg::new(name.clone())
            .long(name.clone())
            .help(def.description.clone());

        if let Some(short) = def
            .short
            .as_deref()
            .and_then(|s| s.strip_prefix('-'))
            .and_then(|s| s.chars().next())
        {
            arg = arg.short(short);
        }

        arg = match def.arity {
            FlagArity::NoValue => arg.action(ArgAction::SetTrue),
            FlagArity::RequiresValue => arg
                .action(ArgAction::Set)
                .value_name(name.to_uppercase()),
        };
        cmd = cmd.arg(arg);
    }

    cmd
}

/// Render the help screen.
pub fn render_help(registry: &FlagRegistry) -> String {
    help_command(registry).render_help().to_string()
}
