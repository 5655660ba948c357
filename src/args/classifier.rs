//! Token classifier — raw token → classified token.

use crate::args::registry::{FlagDef, FlagRegistry};

/// A classified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'r> {
    /// The literal `--` separator.
    Separator,
    /// Flag found in the registry.
    Known(&'r FlagDef),
    /// Flag-looking token the registry does not know.
    Unknown(String),
    /// Anything else, including a lone `-`.
    Positional(String),
}

/// Classify a single token against the registry.
///
/// Classification is context-free; whether a token is interpreted at all
/// depends on the parser state.
pub fn classify<'r>(arg: &str, registry: &'r FlagRegistry) -> Token<'r> {
    match arg {
        "--" => Token::Separator,
        "-" => Token::Positional(arg.to_string()),
        s if s.starts_with('-') => match registry.lookup(s) {
            Some(def) => Token::Known(def),
            None => Token::Unknown(s.to_string()),
        },
        _ => Token::Positional(arg.to_string()),
    }
}
