//! The request handed to [`HttpClient`](crate::clients::HttpClient).

use std::collections::BTreeMap;
use std::fmt;

/// HTTP methods used by the inventory item endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Read a collection or a single record.
    Get,
    /// Replace the fields of a single record.
    Put,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "get",
            Self::Put => "put",
        })
    }
}

/// A single Admin API call: method, path below the versioned base path,
/// optional query and optional JSON body.
///
/// A PUT always carries a body because [`HttpRequest::put`] is the only
/// way to make one. The query map is sorted, so the encoded URL is
/// deterministic, and an empty map is dropped.
///
/// # Example
///
/// ```rust
/// use shopify_inventory::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let query = [("ids".to_string(), "1,2,3".to_string())].into_iter().collect();
/// let get = HttpRequest::get("inventory_items.json").with_query(Some(query));
/// assert_eq!(get.method, HttpMethod::Get);
///
/// let put = HttpRequest::put(
///     "inventory_items/1.json",
///     json!({"inventory_item": {"tracked": true}}),
/// );
/// assert!(put.body.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// Path relative to the versioned base path, e.g. `inventory_items.json`.
    pub path: String,
    /// JSON body; always present for PUT.
    pub body: Option<serde_json::Value>,
    /// Query parameters appended to the URL.
    pub query: Option<BTreeMap<String, String>>,
}

impl HttpRequest {
    /// A GET of `path`.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            body: None,
            query: None,
        }
    }

    /// A PUT of `body` to `path`.
    #[must_use]
    pub fn put(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: HttpMethod::Put,
            path: path.into(),
            body: Some(body),
            query: None,
        }
    }

    /// Attaches `query`, ignoring it when it is `None` or empty.
    #[must_use]
    pub fn with_query(mut self, query: Option<BTreeMap<String, String>>) -> Self {
        self.query = query.filter(|q| !q.is_empty());
        self
    }
}
