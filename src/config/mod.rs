//! Client configuration.
//!
//! - [`ClientConfig`]: everything the shared REST client needs to reach a shop
//! - [`ClientConfigBuilder`]: validating builder for [`ClientConfig`]
//! - [`AccessToken`], [`ShopDomain`], [`HostUrl`]: validated newtypes
//! - [`ApiVersion`]: the Admin API version used in request paths
//!
//! # Example
//!
//! ```rust
//! use shopify_inventory::{AccessToken, ApiVersion, ClientConfig, ShopDomain};
//!
//! let config = ClientConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .api_version("2025-07".parse::<ApiVersion>().unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_uri(), "https://my-store.myshopify.com");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, HostUrl, ShopDomain};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for a [`RestClient`](crate::RestClient).
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    shop: ShopDomain,
    access_token: AccessToken,
    api_version: ApiVersion,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the scheme and authority requests are sent to.
    ///
    /// This is the API host override when one is set, and
    /// `https://{shop}` otherwise.
    #[must_use]
    pub fn base_uri(&self) -> String {
        self.api_host.as_ref().map_or_else(
            || format!("https://{}", self.shop.as_ref()),
            |host| host.as_ref().to_string(),
        )
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for [`ClientConfig`].
///
/// `shop` and `access_token` are required. `api_version` defaults to
/// [`ApiVersion::latest`].
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    shop: Option<ShopDomain>,
    access_token: Option<AccessToken>,
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the Admin API access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Routes requests through `host` instead of `https://{shop}`.
    ///
    /// The shop domain is still sent in the `Host` header.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop` or
    /// `access_token` are not set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(ClientConfig {
            shop,
            access_token,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
