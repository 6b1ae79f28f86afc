//! Parsed package.json contents

use super::{Dependency, DependencyGroup};

/// A package.json as far as update checks are concerned
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manifest {
    /// Project name
    pub name: String,
    /// Declarations in file order, grouped runtime, development, peer
    pub dependencies: Vec<Dependency>,
}

impl Manifest {
    /// Creates an empty manifest for the given project
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dependencies: Vec::new(),
        }
    }

    /// Adds a declaration (builder pattern)
    pub fn with_dependency(
        mut self,
        name: impl Into<String>,
        constraint: impl Into<String>,
        group: DependencyGroup,
    ) -> Self {
        self.dependencies
            .push(Dependency::new(name, constraint, group));
        self
    }

    /// Declarations of one group
    pub fn group(&self, group: DependencyGroup) -> impl Iterator<Item = &Dependency> {
        self.dependencies.iter().filter(move |d| d.group == group)
    }

    /// Declarations that need a registry lookup (wildcards excluded)
    pub fn checkable(&self) -> impl Iterator<Item = &Dependency> {
        self.dependencies.iter().filter(|d| !d.is_wildcard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkable_skips_wildcards() {
        let manifest = Manifest::new("demo")
            .with_dependency("left-pad", "^1.0.0", DependencyGroup::Runtime)
            .with_dependency("lodash", "*", DependencyGroup::Runtime)
            .with_dependency("jest", "*", DependencyGroup::Development);

        let names: Vec<_> = manifest.checkable().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["left-pad"]);
    }

    #[test]
    fn test_group_filter() {
        let manifest = Manifest::new("demo")
            .with_dependency("react", "^18.0.0", DependencyGroup::Peer)
            .with_dependency("jest", "^29.0.0", DependencyGroup::Development);

        assert_eq!(manifest.group(DependencyGroup::Peer).count(), 1);
        assert_eq!(manifest.group(DependencyGroup::Runtime).count(), 0);
    }
}
