//! REST resource bindings for the Shopify Admin API.
//!
//! This module sits on top of [`RestClient`](crate::clients::RestClient)
//! and turns raw JSON responses into typed records:
//!
//! - [`resources`]: version-specific resource bindings (e.g., inventory items)
//! - [`Pagination`] and [`PageCursor`]: cursors parsed from the `Link` header
//! - [`ResourceError`]: semantic error types for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_inventory::rest::resources::v2025_10::InventoryItemListParams;
//!
//! let service = client.inventory_items();
//! let mut params = Some(InventoryItemListParams {
//!     ids: Some(vec![808950810]),
//!     ..Default::default()
//! });
//!
//! while let Some(current) = params.take() {
//!     let (items, pagination) = service.list_with_pagination(Some(current)).await?;
//!     for item in &items {
//!         println!("{:?}", item.sku);
//!     }
//!     params = pagination.next.as_ref().map(Into::into);
//! }
//! ```

mod errors;
mod pagination;
mod query;

pub mod resources;

pub use errors::ResourceError;
pub use pagination::{PageCursor, Pagination, PaginationError};
