//! Shared HTTP client layer.
//!
//! Resource bindings never talk to reqwest directly; they go through the
//! types in this module, which own authentication headers, base URL
//! construction, JSON bodies, and error normalization.
//!
//! - [`HttpClient`]: one authenticated round trip per [`HttpRequest`]
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: status, lowercase headers and the parsed JSON body
//! - [`HttpMethod`]: GET and PUT
//! - [`rest::RestClient`]: path-normalizing REST client used by resources
//! - [`HttpError`]: every failure of this layer
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_inventory::clients::{HttpClient, HttpRequest};
//!
//! let client = HttpClient::new("/admin/api/2025-10", &config)?;
//! let query = [("ids".to_string(), "808950810".to_string())].into_iter().collect();
//! let request = HttpRequest::get("inventory_items.json").with_query(Some(query));
//!
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest};
pub use http_response::HttpResponse;

pub use rest::RestClient;
