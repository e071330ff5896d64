//! Resource-level error types.
//!
//! The shared client reports failures as [`HttpError`]; resource bindings
//! add semantics on top:
//!
//! - **404**: [`ResourceError::NotFound`]
//! - **422**: [`ResourceError::ValidationFailed`] with the per-field messages
//! - a 2xx body that is not JSON, or does not match the envelope:
//!   [`ResourceError::Decode`]
//! - unreadable `Link` header: [`ResourceError::Pagination`]
//! - any other failure of the shared client: [`ResourceError::Http`]
//!
//! Operations built on top of other operations tag failures with
//! [`ResourceError::Context`]; [`ResourceError::root_cause`] looks through
//! those tags.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_inventory::rest::ResourceError;
//!
//! match service.list_with_pagination(None).await {
//!     Ok((items, pagination)) => { /* ... */ }
//!     Err(ResourceError::Pagination(e)) => {
//!         println!("items arrived but the next page is unknown: {e}");
//!     }
//!     Err(e) => println!("list failed: {e}"),
//! }
//! ```

use std::collections::HashMap;

use crate::clients::HttpError;
use crate::rest::PaginationError;
use thiserror::Error;

/// Failure of an inventory item operation.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// Resource name, e.g. `InventoryItem`.
        resource: &'static str,
        /// Requested id, or `unknown` for collection calls.
        id: String,
    },

    /// The platform rejected the payload (HTTP 422).
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Messages per field; record-level messages sit under `base`.
        errors: HashMap<String, Vec<String>>,
        /// `X-Request-Id` of the rejected call.
        request_id: Option<String>,
    },

    /// The response body was not JSON or did not match the expected envelope.
    #[error("Failed to decode {resource} response: {source}")]
    Decode {
        /// Resource name.
        resource: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A request body or query could not be serialized.
    #[error("Failed to encode {resource} request: {source}")]
    Encode {
        /// Resource name.
        resource: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The list succeeded but its `Link` header could not be parsed.
    #[error("error getting pagination from link header: {0}")]
    Pagination(#[from] PaginationError),

    /// A failure from an inner operation, tagged with the outer one.
    #[error("error in {context}: {source}")]
    Context {
        /// The operation that observed the failure (e.g., "list").
        context: &'static str,
        /// The original error.
        #[source]
        source: Box<ResourceError>,
    },

    /// A shared-client error that has no resource-specific meaning.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Maps a shared-client error to its resource-level meaning.
    ///
    /// 404 becomes `NotFound` (using `id` when one is known), 422 becomes
    /// `ValidationFailed`, an unreadable 2xx body becomes `Decode`, and
    /// everything else stays `Http`.
    #[must_use]
    pub fn from_http(error: HttpError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            HttpError::Response(response) if response.code == 404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            },
            HttpError::Response(response) if response.code == 422 => {
                let body = serde_json::from_str(&response.message).unwrap_or_default();
                Self::ValidationFailed {
                    errors: parse_validation_errors(&body),
                    request_id: response.error_reference,
                }
            }
            HttpError::InvalidBody { source, .. } => Self::Decode { resource, source },
            other => Self::Http(other),
        }
    }

    /// Wraps this error with the name of the operation that observed it.
    #[must_use]
    pub fn context(self, context: &'static str) -> Self {
        Self::Context {
            context,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error beneath any [`ResourceError::Context`] tags.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = source;
        }
        current
    }

    /// Returns the `X-Request-Id` of the failed call, when the platform sent one.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self.root_cause() {
            Self::ValidationFailed { request_id, .. } => request_id.as_deref(),
            Self::Http(HttpError::Response(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

/// Parses Shopify validation errors.
///
/// The `errors` member is either an object of field -> messages, an array
/// of messages (stored under `base`), or a single string (also `base`).
fn parse_validation_errors(body: &serde_json::Value) -> HashMap<String, Vec<String>> {
    let mut result = HashMap::new();

    let strings = |arr: &[serde_json::Value]| -> Vec<String> {
        arr.iter()
            .filter_map(|v| v.as_str().map(ToString::to_string))
            .collect()
    };

    match body.get("errors") {
        Some(serde_json::Value::Object(map)) => {
            for (field, messages) in map {
                let msgs = match messages {
                    serde_json::Value::Array(arr) => strings(arr),
                    serde_json::Value::String(s) => vec![s.clone()],
                    other => vec![other.to_string()],
                };
                result.insert(field.clone(), msgs);
            }
        }
        Some(serde_json::Value::Array(arr)) => {
            let msgs = strings(arr);
            if !msgs.is_empty() {
                result.insert("base".to_string(), msgs);
            }
        }
        Some(serde_json::Value::String(s)) => {
            result.insert("base".to_string(), vec![s.clone()]);
        }
        _ => {}
    }

    result
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
