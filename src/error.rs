//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with reading or parsing a package.json
//! - RegistryError: Issues with the npm registry lookup
//! - CheckError: Failure of one manifest's staleness check
//! - NotifyError: Failure to deliver a notification
//! - ConfigError: Issues with CLI configuration

use std::path::PathBuf;
use thiserror::Error;

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// Valid JSON, but not shaped like a package.json
    #[error("invalid manifest structure in {path}: {message}")]
    InvalidStructure { path: PathBuf, message: String },
}

/// Errors related to package registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Package not found in registry
    #[error("package '{package}' not found in {registry} registry")]
    PackageNotFound { package: String, registry: String },

    /// Network request failed
    #[error("failed to fetch package '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// Invalid response from registry
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// Package metadata carries no `latest` dist-tag
    #[error("package '{package}' has no latest version in {registry} registry")]
    MissingLatestTag { package: String, registry: String },

    /// Timeout
    #[error("timeout while fetching '{package}' from {registry}")]
    Timeout { package: String, registry: String },
}

/// Failure of a single manifest's check; sibling manifests are unaffected
#[derive(Error, Debug)]
pub enum CheckError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Lookup(#[from] RegistryError),
}

/// Errors raised while delivering a notification
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Writing a console line failed
    #[error("failed to write to console: {0}")]
    Console(#[from] std::io::Error),

    /// The desktop notification service rejected the notification
    #[error("failed to show desktop notification: {message}")]
    Desktop { message: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No usable manifest path was given
    #[error("package.json file required")]
    NoManifests,

    /// Invalid interval value
    #[error("invalid interval '{value}': expected a positive number of milliseconds")]
    InvalidInterval { value: String },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidStructure error
    pub fn invalid_structure(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::InvalidStructure {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::PackageNotFound {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new MissingLatestTag error
    pub fn missing_latest_tag(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::MissingLatestTag {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
            registry: registry.into(),
        }
    }
}
