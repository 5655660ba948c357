//! Package specifier — `name@version` with scope awareness.

use std::fmt;

use serde::{Serialize, Serializer};

/// Version used when a specifier does not carry one.
pub const DEFAULT_VERSION: &str = "latest";

/// A package name plus the version or range it was requested at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    /// Bare or scoped name (`foo`, `@user/foo`).
    pub name: String,
    /// Explicit version/range, or `latest`.
    pub version: String,
    /// Whether the raw specifier carried the version itself.
    pub had_version: bool,
}

impl PackageSpec {
    /// Split a raw specifier into name and version.
    ///
    /// The leading `@` of a scoped name is never a version separator:
    /// `@user/foo` has no version, `@user/foo@1.2.3` has `1.2.3`.
    /// An empty version (`foo@`) counts as no version.
    pub fn parse(raw: &str) -> Self {
        let search_from = usize::from(raw.starts_with('@'));
        let split = raw[search_from..]
            .find('@')
            .map(|at| at + search_from)
            .filter(|&at| at + 1 < raw.len());

        match split {
            Some(at) => Self {
                name: raw[..at].to_string(),
                version: raw[at + 1..].to_string(),
                had_version: true,
            },
            None => Self {
                name: raw.strip_suffix('@').unwrap_or(raw).to_string(),
                version: DEFAULT_VERSION.to_string(),
                had_version: false,
            },
        }
    }

    /// Name with any `@scope/` prefix removed.
    pub fn command_name(&self) -> &str {
        match self.name.strip_prefix('@') {
            Some(scoped) => scoped.split_once('/').map_or(&self.name[..], |(_, name)| name),
            None => &self.name,
        }
    }
}

impl fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

impl Serialize for PackageSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
