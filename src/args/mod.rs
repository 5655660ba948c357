//! Argument handling for the launcher.
//!
//! ```text
//! argv → drop platform tokens → classify token → scan state machine → ParsedArguments
//! ```
//!
//! Every stage is a pure function; nothing here touches the filesystem or
//! spawns processes.

mod classifier;
mod parser;
mod registry;
mod spec;

pub use classifier::{classify, Token};
pub use parser::{parse, parse_args, ParsedArguments, PLATFORM_TOKENS};
pub use registry::{launcher_registry, FlagArity, FlagDef, FlagRegistry, FlagRole};
pub use spec::{PackageSpec, DEFAULT_VERSION};
