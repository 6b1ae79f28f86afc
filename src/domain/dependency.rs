//! Dependency declaration structures

use std::fmt;

/// Constraint that accepts any version; never looked up
pub const WILDCARD: &str = "*";

/// Range prefixes stripped from a declared constraint before comparison
const RANGE_PREFIXES: [char; 2] = ['^', '~'];

/// Dependency group of a package.json
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyGroup {
    /// `dependencies`
    Runtime,
    /// `devDependencies`
    Development,
    /// `peerDependencies`
    Peer,
}

impl DependencyGroup {
    /// All groups in the order they are read from a manifest
    pub fn all() -> &'static [DependencyGroup] {
        &[
            DependencyGroup::Runtime,
            DependencyGroup::Development,
            DependencyGroup::Peer,
        ]
    }

    /// Key of this group in package.json
    pub fn manifest_key(&self) -> &'static str {
        match self {
            DependencyGroup::Runtime => "dependencies",
            DependencyGroup::Development => "devDependencies",
            DependencyGroup::Peer => "peerDependencies",
        }
    }
}

impl fmt::Display for DependencyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.manifest_key())
    }
}

/// A declared dependency: name plus the raw version constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Package name
    pub name: String,
    /// Constraint exactly as written in the manifest
    pub constraint: String,
    /// Group the declaration came from
    pub group: DependencyGroup,
}

impl Dependency {
    /// Creates a new dependency declaration
    pub fn new(
        name: impl Into<String>,
        constraint: impl Into<String>,
        group: DependencyGroup,
    ) -> Self {
        Self {
            name: name.into(),
            constraint: constraint.into(),
            group,
        }
    }

    /// Returns true if the constraint is exactly the wildcard token
    pub fn is_wildcard(&self) -> bool {
        self.constraint == WILDCARD
    }

    /// Declared version with a single leading range prefix removed
    pub fn declared_version(&self) -> &str {
        let mut chars = self.constraint.chars();
        match chars.next() {
            Some(c) if RANGE_PREFIXES.contains(&c) => chars.as_str(),
            _ => &self.constraint,
        }
    }

    /// Returns true if `latest` differs textually from the declared version
    pub fn is_outdated_by(&self, latest: &str) -> bool {
        self.declared_version() != latest
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{} ({})", self.name, self.constraint, self.group)
    }
}
