//! package.json reader
//!
//! Handles:
//! - dependencies
//! - devDependencies
//! - peerDependencies

use crate::domain::{Dependency, DependencyGroup, Manifest};
use crate::error::ManifestError;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::Path;

/// Read and parse a manifest straight from disk
///
/// Nothing is cached between calls, so edits are seen on the next read.
pub fn read_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ManifestError::not_found(path),
        _ => ManifestError::read_error(path, e),
    })?;

    parse_manifest(&content, path)
}

/// Parse package.json content; `path` is used for error context and the
/// fallback project name
pub fn parse_manifest(content: &str, path: &Path) -> Result<Manifest, ManifestError> {
    let json: Value = serde_json::from_str(content)
        .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;

    let root = json
        .as_object()
        .ok_or_else(|| ManifestError::invalid_structure(path, "expected a JSON object"))?;

    let name = root
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| fallback_name(path));

    let mut manifest = Manifest::new(name);

    for group in DependencyGroup::all() {
        match root.get(group.manifest_key()) {
            None | Some(Value::Null) => {}
            Some(Value::Object(deps)) => {
                parse_dependency_object(deps, *group, &mut manifest.dependencies)
            }
            Some(_) => {
                return Err(ManifestError::invalid_structure(
                    path,
                    format!("'{}' must be an object", group.manifest_key()),
                ))
            }
        }
    }

    Ok(manifest)
}

fn parse_dependency_object(
    deps: &Map<String, Value>,
    group: DependencyGroup,
    output: &mut Vec<Dependency>,
) {
    for (name, version_value) in deps {
        if let Some(constraint) = version_value.as_str() {
            output.push(Dependency::new(name.clone(), constraint, group));
        }
    }
}

/// Name of the directory holding the manifest
fn fallback_name(path: &Path) -> String {
    path.parent()
        .and_then(|dir| dir.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unnamed".to_string())
}
