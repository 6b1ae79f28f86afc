//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - Mapping of HTTP failures onto registry errors
//!
//! Requests are sent once; there is no retry or backoff.

use crate::error::RegistryError;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Default timeout for HTTP requests (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("nun/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper over a reqwest client
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                RegistryError::network_error(
                    "",
                    "HTTP client",
                    format!("failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self { client })
    }

    /// Perform a GET request, mapping failures with package context
    pub async fn get_with_context(
        &self,
        url: &str,
        package: &str,
        registry: &str,
    ) -> Result<reqwest::Response, RegistryError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(e, package, registry))?;

        map_status(response.status(), package, registry)?;
        Ok(response)
    }

    /// Perform a GET request and parse the JSON body
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        package: &str,
        registry: &str,
    ) -> Result<T, RegistryError> {
        let response = self.get_with_context(url, package, registry).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(e, package, registry))?;

        decode_json(&body, package, registry)
    }
}

fn transport_error(e: reqwest::Error, package: &str, registry: &str) -> RegistryError {
    if e.is_timeout() {
        RegistryError::timeout(package, registry)
    } else {
        RegistryError::network_error(package, registry, e.to_string())
    }
}

/// Map a response status onto a registry error; any 2xx passes
pub(crate) fn map_status(
    status: StatusCode,
    package: &str,
    registry: &str,
) -> Result<(), RegistryError> {
    match status {
        StatusCode::NOT_FOUND => Err(RegistryError::package_not_found(package, registry)),
        status if !status.is_success() => Err(RegistryError::network_error(
            package,
            registry,
            format!("HTTP {}", status),
        )),
        _ => Ok(()),
    }
}

/// Decode a response body, reporting malformed JSON as an invalid response
pub(crate) fn decode_json<T: serde::de::DeserializeOwned>(
    body: &[u8],
    package: &str,
    registry: &str,
) -> Result<T, RegistryError> {
    serde_json::from_slice(body).map_err(|e| {
        RegistryError::invalid_response(package, registry, format!("failed to parse JSON: {}", e))
    })
}
