//! Staleness check for a single manifest
//!
//! read manifest → drop wildcard declarations → query the registry for every
//! remaining dependency concurrently → keep the ones whose declared version
//! differs from the latest one.
//!
//! Lookups are joined only after every one of them has settled. If any lookup
//! failed, the whole manifest check fails with the first error in declaration
//! order; there is no per-dependency isolation and no retry.

use crate::domain::{CheckResult, Dependency, Manifest, OutdatedEntry};
use crate::error::{CheckError, RegistryError};
use crate::manifest::read_manifest;
use crate::registry::VersionOracle;
use futures::future::join_all;
use std::path::Path;

/// Check one manifest file against the registry
pub async fn check_manifest(
    path: &Path,
    oracle: &dyn VersionOracle,
) -> Result<CheckResult, CheckError> {
    let manifest = read_manifest(path)?;
    let outdated = find_outdated(&manifest, oracle).await?;

    Ok(CheckResult::new(path, manifest.name).with_outdated(outdated))
}

/// Declarations that need a lookup, in declaration order
pub fn collect_declarations(manifest: &Manifest) -> Vec<&Dependency> {
    manifest.checkable().collect()
}

/// Query the registry for every checkable declaration and keep outdated ones
pub async fn find_outdated(
    manifest: &Manifest,
    oracle: &dyn VersionOracle,
) -> Result<Vec<OutdatedEntry>, RegistryError> {
    let lookups = collect_declarations(manifest)
        .into_iter()
        .map(|dep| check_dependency(dep, oracle));

    let settled = join_all(lookups)
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(settled.into_iter().flatten().collect())
}

async fn check_dependency(
    dep: &Dependency,
    oracle: &dyn VersionOracle,
) -> Result<Option<OutdatedEntry>, RegistryError> {
    let latest = oracle.latest_version(&dep.name).await?;
    tracing::debug!(
        "{}: declared {}, latest {}",
        dep.name,
        dep.constraint,
        latest
    );

    if dep.is_outdated_by(&latest) {
        Ok(Some(OutdatedEntry::new(&dep.name, latest)))
    } else {
        Ok(None)
    }
}
