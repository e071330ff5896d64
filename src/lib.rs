//! # Shopify Inventory
//!
//! A typed Rust binding for the inventory items resource of the Shopify
//! Admin REST API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for the shop domain, access token and host override
//! - A shared REST client ([`RestClient`]) that owns authentication headers,
//!   base URL construction and error normalization
//! - [`InventoryItemService`] with `list`, `list_with_pagination`, `get` and
//!   `update`
//! - Cursor pagination parsed from the `Link` response header ([`Pagination`])
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_inventory::{AccessToken, ApiVersion, ClientConfig, ShopDomain};
//!
//! let config = ClientConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_uri(), "https://my-store.myshopify.com");
//! ```
//!
//! ## Working With Inventory Items
//!
//! ```rust,ignore
//! use shopify_inventory::{InventoryItemListParams, RestClient};
//!
//! let client = RestClient::new(&config)?;
//! let service = client.inventory_items();
//!
//! let params = InventoryItemListParams {
//!     ids: Some(vec![808950810, 39072856]),
//!     ..Default::default()
//! };
//! let (items, pagination) = service.list_with_pagination(Some(params)).await?;
//!
//! if let Some(next) = &pagination.next {
//!     let more = service.list(Some(next.into())).await?;
//! }
//!
//! let mut item = service.get(808950810, None).await?.expect("item exists");
//! item.tracked = Some(true);
//! let saved = service.update(&item).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: Clients are `Send + Sync` and can be shared across tasks
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No hidden retries**: Each operation is exactly one HTTP round trip

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, ApiVersion, ClientConfig, ClientConfigBuilder, HostUrl, ShopDomain};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, HttpResponseError, RestClient,
};

// Re-export resource types
pub use rest::resources::{
    CountryHarmonizedSystemCode, InventoryItem, InventoryItemFindParams, InventoryItemListParams,
    InventoryItemService,
};
pub use rest::{PageCursor, Pagination, PaginationError, ResourceError};
