//! REST resources for API version 2025-10.
//!
//! ## Inventory Item Resource
//!
//! - [`InventoryItem`] - Cost, SKU, tracking and customs data behind a variant
//! - [`CountryHarmonizedSystemCode`] - A per-country customs code
//! - [`InventoryItemService`] - List, get and update operations
//! - [`InventoryItemListParams`] - Parameters for listing inventory items
//! - [`InventoryItemFindParams`] - Parameters for fetching a single item
//! - [`InventoryItemEnvelope`] / [`InventoryItemsEnvelope`] - Wire envelopes

mod inventory_item;

pub use inventory_item::{
    CountryHarmonizedSystemCode, InventoryItem, InventoryItemEnvelope, InventoryItemFindParams,
    InventoryItemListParams, InventoryItemService, InventoryItemsEnvelope,
};
