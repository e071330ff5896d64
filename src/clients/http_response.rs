//! HTTP response type.
//!
//! The shared client hands resource bindings the whole response, so
//! header-driven metadata such as the `Link` pagination header is available
//! next to the decoded body.

use std::collections::HashMap;

/// An HTTP response from the Admin API.
///
/// Header names are stored lowercase; a header may carry several values.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed JSON body (`{}` for an empty body).
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    ///
    /// Header names are lowercased so lookups are case-insensitive.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, values)| (name.to_lowercase(), values))
            .collect();
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the named header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the raw `Link` header, or `""` when the response has none.
    ///
    /// Several `Link` header lines are joined with `,` as RFC 7230 allows.
    #[must_use]
    pub fn link_header(&self) -> String {
        self.headers
            .get("link")
            .map(|values| values.join(", "))
            .unwrap_or_default()
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value, if present.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }
}
