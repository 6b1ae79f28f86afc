//! Results of one manifest check

use std::fmt;
use std::path::PathBuf;

/// A dependency whose declared version differs from the registry's latest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutdatedEntry {
    /// Package name
    pub dependency: String,
    /// Latest published version
    pub version: String,
}

impl OutdatedEntry {
    pub fn new(dependency: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            dependency: dependency.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for OutdatedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.dependency, self.version)
    }
}

/// Outcome of checking one manifest in one cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Manifest the result belongs to
    pub path: PathBuf,
    /// Project name from the manifest
    pub project: String,
    /// Outdated dependencies in declaration order
    pub outdated: Vec<OutdatedEntry>,
}

impl CheckResult {
    pub fn new(path: impl Into<PathBuf>, project: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            project: project.into(),
            outdated: Vec::new(),
        }
    }

    /// Sets the outdated entries (builder pattern)
    pub fn with_outdated(mut self, outdated: Vec<OutdatedEntry>) -> Self {
        self.outdated = outdated;
        self
    }

    pub fn is_up_to_date(&self) -> bool {
        self.outdated.is_empty()
    }
}
