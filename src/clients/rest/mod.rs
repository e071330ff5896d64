//! REST API client for the Shopify Admin API.
//!
//! [`RestClient`] is the shared client resource bindings call into. It
//! offers `get()` and `put()` over the lower-level
//! [`HttpClient`](crate::clients::HttpClient), and returns the full
//! [`HttpResponse`](crate::clients::HttpResponse) so callers can read both
//! the JSON body and response headers.
//!
//! # Path Normalization
//!
//! - Leading slashes are stripped: `/inventory_items` -> `inventory_items`
//! - `.json` is appended exactly once: `inventory_items.json` -> `inventory_items.json`
//! - An empty path is rejected with
//!   [`HttpError::InvalidPath`](crate::clients::HttpError::InvalidPath)
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_inventory::{AccessToken, ClientConfig, RestClient, ShopDomain};
//!
//! let config = ClientConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config)?;
//! let response = client.get("inventory_items/808950810", None).await?;
//! println!("{}", response.body);
//! ```

mod client;

pub use client::RestClient;
