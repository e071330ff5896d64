//! Errors raised by the shared client layer.
//!
//! Everything below the resource bindings reports a single [`HttpError`]:
//! a non-2xx answer, a 2xx answer whose body is not JSON, a path that
//! normalizes to nothing, or a transport failure.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_inventory::HttpError;
//!
//! match client.get("inventory_items/808950810", None).await {
//!     Ok(response) => println!("Body: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the API answers with a non-successful status.
///
/// `message` holds a compact JSON summary of the `errors` / `error` /
/// `error_description` fields of the response body, plus an
/// `error_reference` line when the response carried an `X-Request-Id`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Error type for the shared client layer.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API answered with a non-2xx status.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The API answered 2xx but the body is not JSON (truncated, HTML, ...).
    #[error("Response with status {code} has an unreadable body: {source}")]
    InvalidBody {
        /// The HTTP status code of the response.
        code: u16,
        /// The JSON parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// The request path is empty once normalized; nothing was sent.
    #[error("Invalid REST API path: {path:?}")]
    InvalidPath {
        /// The path as given by the caller.
        path: String,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code when a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::InvalidBody { code, .. } => Some(*code),
            Self::InvalidPath { .. } | Self::Network(_) => None,
        }
    }
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
