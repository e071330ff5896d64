//! Configuration error types.
//!
//! Every configuration constructor returns `Result<T, ConfigError>`, so a
//! bad shop domain or an empty token is caught before any request is made.
//!
//! # Example
//!
//! ```rust
//! use shopify_inventory::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors raised while building a [`ClientConfig`](crate::ClientConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The access token is empty or whitespace.
    #[error("Access token is empty; pass the shop's Admin API access token")]
    EmptyAccessToken,

    /// The shop domain is not a `myshopify.com` shop.
    #[error("Invalid shop domain '{domain}'; use 'my-store' or 'my-store.myshopify.com'")]
    InvalidShopDomain {
        /// The rejected domain, trimmed and lowercased.
        domain: String,
    },

    /// The API version is not a release quarter or `unstable`.
    #[error("Invalid API version '{version}'; use a release quarter such as '2025-10', or 'unstable'")]
    InvalidApiVersion {
        /// The rejected version, trimmed and lowercased.
        version: String,
    },

    /// A required builder field was never set.
    #[error("ClientConfig is missing required field '{field}'")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The API host override has no scheme or no host.
    #[error("Invalid API host '{url}'; expected a URL such as 'https://proxy.example.com'")]
    InvalidHostUrl {
        /// The rejected URL.
        url: String,
    },
}
