//! Manifest path resolution
//!
//! Turns raw command-line paths into the list of package.json files a cycle
//! checks: existing regular files whose name carries the manifest marker,
//! made absolute against the current directory.

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// File name marker identifying a manifest
pub const MANIFEST_MARKER: &str = "package.json";

/// Returns true if a regular file exists at `path`
///
/// Any filesystem error (permission denied, broken symlink) counts as absent.
fn is_existing_file(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

/// Returns true if the final path component contains the manifest marker
pub fn is_manifest_name(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().contains(MANIFEST_MARKER))
        .unwrap_or(false)
}

/// Keep only existing manifest files, preserving order and duplicates
pub fn filter_manifests(paths: &[PathBuf]) -> Vec<PathBuf> {
    paths
        .iter()
        .filter(|path| is_existing_file(path) && is_manifest_name(path))
        .cloned()
        .collect()
}

/// Make each path absolute by joining relative ones onto `base`
pub fn resolve_against(paths: &[PathBuf], base: &Path) -> Vec<PathBuf> {
    paths
        .iter()
        .map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                base.join(path)
            }
        })
        .collect()
}

/// Make each path absolute against the process's current directory
///
/// No existence check happens here. If the current directory cannot be
/// determined, relative paths are returned unchanged.
pub fn resolve_absolute(paths: &[PathBuf]) -> Vec<PathBuf> {
    match std::env::current_dir() {
        Ok(cwd) => resolve_against(paths, &cwd),
        Err(e) => {
            tracing::warn!("cannot determine current directory: {e}");
            paths.to_vec()
        }
    }
}

/// Filter and resolve raw inputs; fails when nothing usable remains
pub fn resolve_manifests(paths: &[PathBuf]) -> Result<Vec<PathBuf>, ConfigError> {
    let manifests = resolve_absolute(&filter_manifests(paths));
    if manifests.is_empty() {
        return Err(ConfigError::NoManifests);
    }
    Ok(manifests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        fs::write(dir.path().join("abc.js"), "").unwrap();
        fs::create_dir(dir.path().join("package.json.d")).unwrap();
        dir
    }

    #[test]
    fn test_filter_keeps_existing_manifests_only() {
        let dir = setup();
        let inputs = vec![
            dir.path().join("abc.js"),
            dir.path().join("package.json"),
            dir.path().join("missing/package.json"),
            // a directory whose name contains the marker
            dir.path().join("package.json.d"),
        ];

        let result = filter_manifests(&inputs);
        assert_eq!(result, vec![dir.path().join("package.json")]);
    }

    #[test]
    fn test_filter_marker_is_substring_match() {
        let dir = TempDir::new().unwrap();
        let backup = dir.path().join("old-package.json.bak");
        fs::write(&backup, "{}").unwrap();

        assert_eq!(filter_manifests(&[backup.clone()]), vec![backup]);
    }

    #[test]
    fn test_filter_preserves_order_and_duplicates() {
        let dir = setup();
        let manifest = dir.path().join("package.json");
        let inputs = vec![manifest.clone(), manifest.clone()];

        assert_eq!(filter_manifests(&inputs), inputs);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let dir = setup();
        let inputs = vec![
            dir.path().join("abc.js"),
            dir.path().join("package.json"),
        ];
        let once = filter_manifests(&inputs);
        let twice = filter_manifests(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_is_manifest_name_uses_final_component() {
        assert!(is_manifest_name(Path::new("/a/b/package.json")));
        assert!(!is_manifest_name(Path::new("/package.json/other.txt")));
    }

    #[test]
    fn test_resolve_against() {
        let base = Path::new("/work");
        let inputs = vec![
            PathBuf::from("./abc.js"),
            PathBuf::from("../package.json"),
            PathBuf::from("/Volumes/Workspace/Project"),
        ];

        let result = resolve_against(&inputs, base);
        assert_eq!(
            result,
            vec![
                base.join("./abc.js"),
                base.join("../package.json"),
                PathBuf::from("/Volumes/Workspace/Project"),
            ]
        );
    }

    #[test]
    fn test_resolve_absolute_is_idempotent() {
        let inputs = vec![PathBuf::from("package.json"), PathBuf::from("/abs/package.json")];
        let once = resolve_absolute(&inputs);
        assert!(once.iter().all(|p| p.is_absolute()));
        assert_eq!(resolve_absolute(&once), once);
    }

    #[test]
    fn test_resolve_manifests_requires_one_manifest() {
        let dir = setup();
        let result = resolve_manifests(&[dir.path().join("abc.js")]);
        assert!(matches!(result, Err(ConfigError::NoManifests)));

        let result = resolve_manifests(&[dir.path().join("package.json")]).unwrap();
        assert_eq!(result, vec![dir.path().join("package.json")]);
    }
}
