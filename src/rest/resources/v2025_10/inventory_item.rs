//! Inventory items: records, envelopes, params and the endpoint service.
//!
//! An inventory item holds the stock-keeping facts behind a product
//! variant: SKU, unit cost, whether quantities are tracked, and customs
//! codes. Variants link to their item through `Variant.inventory_item_id`.
//!
//! Inventory items cannot be created or deleted directly, so the binding
//! offers listing, fetching and updating only:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`InventoryItemService::list`] | `GET inventory_items.json` |
//! | [`InventoryItemService::list_with_pagination`] | `GET inventory_items.json` |
//! | [`InventoryItemService::get`] | `GET inventory_items/{id}.json` |
//! | [`InventoryItemService::update`] | `PUT inventory_items/{id}.json` |
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_inventory::rest::resources::v2025_10::{InventoryItemListParams, InventoryItemService};
//!
//! let service = InventoryItemService::new(&client);
//!
//! let params = InventoryItemListParams {
//!     ids: Some(vec![808950810, 39072856]),
//!     limit: Some(50),
//!     ..Default::default()
//! };
//! let (items, pagination) = service.list_with_pagination(Some(params)).await?;
//!
//! if let Some(next) = &pagination.next {
//!     let more = service.list(Some(next.into())).await?;
//! }
//!
//! let mut item = service.get(808950810, None).await?.expect("item exists");
//! item.cost = Some("25.00".parse()?);
//! let saved = service.update(&item).await?;
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::query::serialize_to_query;
use crate::rest::{PageCursor, Pagination, ResourceError};

/// An HS code that applies when shipping into one country.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CountryHarmonizedSystemCode {
    /// HS code used by that country's customs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harmonized_system_code: Option<String>,

    /// Destination country, ISO 3166-1 alpha-2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// The stock-keeping record behind one product variant.
///
/// Every optional field is left out of the encoded JSON when it is `None`,
/// so an item that was decoded and re-encoded carries exactly the fields
/// the platform sent. `id` is left out when it is `0`.
///
/// `cost` is a [`Decimal`] and travels as a JSON string (`"25.00"`) in
/// both directions. A JSON number is rejected when decoding, since it
/// would have to pass through `f64` and lose digits.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InventoryItem {
    /// Platform identifier; `0` for an item that was never stored.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: u64,

    /// Merchant SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Creation time, set by the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last modification time, set by the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Unit cost in the shop currency.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub cost: Option<Decimal>,

    /// Whether the platform counts stock for this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracked: Option<bool>,

    /// `gid://shopify/InventoryItem/{id}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,

    /// Whether the item is a physical good.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,

    /// Where the item was made, ISO 3166-1 alpha-2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code_of_origin: Option<String>,

    /// Province or state of origin, ISO 3166-2 subdivision code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code_of_origin: Option<String>,

    /// Default HS tariff code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harmonized_system_code: Option<String>,

    /// Per-destination overrides of `harmonized_system_code`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_harmonized_system_codes: Option<Vec<CountryHarmonizedSystemCode>>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero(id: &u64) -> bool {
    *id == 0
}

impl InventoryItem {
    /// Resource name used in error messages.
    pub const NAME: &'static str = "InventoryItem";
    /// Collection path segment.
    pub const PLURAL: &'static str = "inventory_items";
}

/// Single-item body: `{"inventory_item": {...}}`.
///
/// A `null` or missing `inventory_item` decodes to `None`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InventoryItemEnvelope {
    /// The wrapped item.
    #[serde(default)]
    pub inventory_item: Option<InventoryItem>,
}

/// Collection body: `{"inventory_items": [...]}`.
///
/// A missing `inventory_items` decodes to an empty list.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InventoryItemsEnvelope {
    /// The wrapped items.
    #[serde(default)]
    pub inventory_items: Vec<InventoryItem>,
}

/// Parameters for fetching a single inventory item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InventoryItemFindParams {
    /// Restrict the response to these fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

/// Parameters for listing inventory items.
///
/// The platform expects `ids` on list requests; when following a
/// pagination cursor, `page_info` and `limit` are the only parameters it
/// accepts.
///
/// # Example
///
/// ```rust
/// use shopify_inventory::rest::resources::v2025_10::InventoryItemListParams;
///
/// let params = InventoryItemListParams {
///     ids: Some(vec![123, 456, 789]),
///     limit: Some(50),
///     ..Default::default()
/// };
/// assert!(params.page_info.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InventoryItemListParams {
    /// Inventory item IDs to retrieve, sent comma-separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,

    /// Page size; the platform defaults to 50 and caps at 250.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return only items after the specified ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Opaque cursor taken from a `Link` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,

    /// Restrict the response to these fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl From<&PageCursor> for InventoryItemListParams {
    fn from(cursor: &PageCursor) -> Self {
        Self {
            page_info: Some(cursor.page_info.clone()),
            limit: cursor.limit,
            ..Self::default()
        }
    }
}

/// Typed access to the `inventory_items` endpoints.
///
/// The service only borrows the shared [`RestClient`], so it is cheap to
/// create per call site and can be copied freely.
#[derive(Debug, Clone, Copy)]
pub struct InventoryItemService<'a> {
    client: &'a RestClient,
}

impl<'a> InventoryItemService<'a> {
    /// Creates a service bound to `client`.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists inventory items, discarding pagination.
    ///
    /// # Errors
    ///
    /// Any failure of [`Self::list_with_pagination`], tagged with the
    /// `list` context.
    pub async fn list(
        &self,
        params: Option<InventoryItemListParams>,
    ) -> Result<Vec<InventoryItem>, ResourceError> {
        let (items, _) = self
            .list_with_pagination(params)
            .await
            .map_err(|e| e.context("list"))?;
        Ok(items)
    }

    /// Lists inventory items and the cursors for adjacent pages.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request fails,
    /// [`ResourceError::Decode`] if the body is not JSON or not an
    /// `inventory_items` envelope and [`ResourceError::Pagination`] if the
    /// `Link` header cannot be parsed. No items are returned in that case.
    pub async fn list_with_pagination(
        &self,
        params: Option<InventoryItemListParams>,
    ) -> Result<(Vec<InventoryItem>, Pagination), ResourceError> {
        let path = format!("{}.json", InventoryItem::PLURAL);
        let query = encode_query(params.as_ref())?;

        let response = self
            .client
            .get(&path, query)
            .await
            .map_err(|e| ResourceError::from_http(e, InventoryItem::NAME, None))?;

        let link_header = response.link_header();
        let envelope: InventoryItemsEnvelope = decode(response.body)?;
        let pagination = Pagination::from_link_header(&link_header)?;

        tracing::debug!(
            count = envelope.inventory_items.len(),
            has_next_page = pagination.has_next_page(),
            "Listed inventory items"
        );

        Ok((envelope.inventory_items, pagination))
    }

    /// Fetches a single inventory item.
    ///
    /// Returns `Ok(None)` when the platform answers with a `null`
    /// `inventory_item`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] for a 404, plus the request and
    /// decode errors of [`Self::list_with_pagination`].
    pub async fn get(
        &self,
        id: u64,
        params: Option<InventoryItemFindParams>,
    ) -> Result<Option<InventoryItem>, ResourceError> {
        let path = format!("{}/{id}.json", InventoryItem::PLURAL);
        let query = encode_query(params.as_ref())?;

        let response = self
            .client
            .get(&path, query)
            .await
            .map_err(|e| {
                ResourceError::from_http(e, InventoryItem::NAME, Some(id.to_string().as_str()))
            })?;

        let envelope: InventoryItemEnvelope = decode(response.body)?;
        Ok(envelope.inventory_item)
    }

    /// Sends `item` to the platform and returns the stored version.
    ///
    /// The request body is `{"inventory_item": item}` with unset fields
    /// left out. `item.id` selects the target; it is not checked locally.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] for a 422,
    /// [`ResourceError::NotFound`] for a 404, plus the request and decode
    /// errors of [`Self::get`].
    pub async fn update(&self, item: &InventoryItem) -> Result<Option<InventoryItem>, ResourceError> {
        let path = format!("{}/{}.json", InventoryItem::PLURAL, item.id);
        let body = serde_json::to_value(InventoryItemEnvelope {
            inventory_item: Some(item.clone()),
        })
        .map_err(|source| ResourceError::Encode {
            resource: InventoryItem::NAME,
            source,
        })?;

        let response = self
            .client
            .put(&path, body, None)
            .await
            .map_err(|e| {
                ResourceError::from_http(e, InventoryItem::NAME, Some(item.id.to_string().as_str()))
            })?;

        let envelope: InventoryItemEnvelope = decode(response.body)?;

        tracing::debug!(id = item.id, "Updated inventory item");

        Ok(envelope.inventory_item)
    }
}

impl RestClient {
    /// Returns an [`InventoryItemService`] bound to this client.
    #[must_use]
    pub const fn inventory_items(&self) -> InventoryItemService<'_> {
        InventoryItemService::new(self)
    }
}

fn encode_query<P: Serialize>(
    params: Option<&P>,
) -> Result<Option<std::collections::BTreeMap<String, String>>, ResourceError> {
    params
        .map(serialize_to_query)
        .transpose()
        .map_err(|source| ResourceError::Encode {
            resource: InventoryItem::NAME,
            source,
        })
}

fn decode<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, ResourceError> {
    serde_json::from_value(body).map_err(|source| ResourceError::Decode {
        resource: InventoryItem::NAME,
        source,
    })
}
