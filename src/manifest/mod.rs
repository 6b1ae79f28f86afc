//! Manifest file resolution and parsing
//!
//! This module provides functionality to:
//! - Resolve raw command-line paths to existing package.json files
//! - Read and parse package.json dependency groups fresh from disk

mod package_json;
mod resolver;

pub use package_json::{parse_manifest, read_manifest};
pub use resolver::{
    filter_manifests, is_manifest_name, resolve_absolute, resolve_against, resolve_manifests,
    MANIFEST_MARKER,
};
