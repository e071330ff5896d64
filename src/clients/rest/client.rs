//! REST client implementation.

use std::collections::BTreeMap;

use crate::clients::{HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::config::{ApiVersion, ClientConfig};

/// REST API client for the Shopify Admin API.
///
/// `RestClient` is `Send + Sync`; share one instance (behind `Arc` if
/// needed) between every resource binding that talks to the same shop.
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
    api_version: ApiVersion,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client using the configured API version.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying HTTP client cannot
    /// be created.
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        Self::with_version(config, config.api_version().clone())
    }

    /// Creates a new REST client that overrides the configured API version.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying HTTP client cannot
    /// be created.
    pub fn with_version(config: &ClientConfig, version: ApiVersion) -> Result<Self, HttpError> {
        if &version != config.api_version() {
            tracing::debug!(
                "Rest client overriding default API version {} with {}",
                config.api_version(),
                version
            );
        }

        let http_client = HttpClient::new(format!("/admin/api/{version}"), config)?;

        Ok(Self {
            http_client,
            api_version: version,
        })
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidPath`] without sending anything if the
    /// path is empty, and any error of [`HttpClient::request`].
    pub async fn get(
        &self,
        path: &str,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::get(normalize_path(path)?).with_query(query);
        self.http_client.request(request).await
    }

    /// Sends a PUT request with a JSON body to `path`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get`].
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::put(normalize_path(path)?, body).with_query(query);
        self.http_client.request(request).await
    }
}

/// Strips leading `/`, strips a trailing `.json`, then appends `.json`.
fn normalize_path(path: &str) -> Result<String, HttpError> {
    let trimmed = path.trim_start_matches('/');
    let trimmed = trimmed.strip_suffix(".json").unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(HttpError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(format!("{trimmed}.json"))
}
