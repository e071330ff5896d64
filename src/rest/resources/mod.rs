//! Version-specific REST resource implementations.
//!
//! Resources are grouped by the API version whose shape they follow:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports latest version)
//!   v2025_10/
//!     mod.rs         <- Version-specific resources
//! ```
//!
//! The latest version is re-exported here, so both paths work:
//!
//! ```rust,ignore
//! use shopify_inventory::rest::resources::InventoryItem;
//! use shopify_inventory::rest::resources::v2025_10::InventoryItem;
//! ```

pub mod v2025_10;

pub use v2025_10::*;
