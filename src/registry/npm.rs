//! npm Registry adapter
//!
//! Fetches the latest published version from the npm registry.
//! API endpoint: https://registry.npmjs.org/{package}

use crate::error::RegistryError;
use crate::registry::{HttpClient, VersionOracle};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

/// npm registry base URL
const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// npm Registry adapter
pub struct NpmAdapter {
    client: HttpClient,
}

/// npm package metadata response
#[derive(Debug, Deserialize)]
struct NpmPackageResponse {
    /// Distribution tags (latest, next, ...)
    #[serde(rename = "dist-tags", default)]
    dist_tags: HashMap<String, String>,
}

impl NpmAdapter {
    /// Create a new npm adapter
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Build the URL for a package; the scope separator must be escaped
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}", NPM_REGISTRY_URL, package.replace('/', "%2F"))
    }
}

#[async_trait]
impl VersionOracle for NpmAdapter {
    fn registry_name(&self) -> &'static str {
        "npm"
    }

    async fn latest_version(&self, package: &str) -> Result<String, RegistryError> {
        let url = self.build_url(package);
        let response: NpmPackageResponse = self
            .client
            .get_json(&url, package, self.registry_name())
            .await?;

        latest_tag(response, package)
    }
}

fn latest_tag(mut response: NpmPackageResponse, package: &str) -> Result<String, RegistryError> {
    response
        .dist_tags
        .remove("latest")
        .ok_or_else(|| RegistryError::missing_latest_tag(package, "npm"))
}
