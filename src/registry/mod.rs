//! Registry adapters answering "what is the latest version of X"
//!
//! This module provides:
//! - HTTP client shared foundation
//! - npm Registry adapter

mod client;
mod npm;

pub use client::HttpClient;
pub use npm::NpmAdapter;

use crate::error::RegistryError;
use async_trait::async_trait;

/// Source of the latest published version of a package
#[async_trait]
pub trait VersionOracle: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Fetch the latest published version string for a package
    async fn latest_version(&self, package: &str) -> Result<String, RegistryError>;
}
