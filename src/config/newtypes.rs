//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper validates its contents on construction, so a
//! [`ClientConfig`](crate::ClientConfig) can only hold usable values.

use crate::error::ConfigError;
use std::fmt;

/// An Admin API access token for a single shop.
///
/// The token is attached to every request as `X-Shopify-Access-Token`.
/// Obtaining it (OAuth, custom app install) happens outside this crate.
///
/// The `Debug` implementation masks the value so the token never ends up
/// in logs.
///
/// # Example
///
/// ```rust
/// use shopify_inventory::AccessToken;
///
/// let token = AccessToken::new("shpat_123").unwrap();
/// assert_eq!(token.as_ref(), "shpat_123");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty or
    /// only whitespace.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A shop's `*.myshopify.com` domain.
///
/// Accepts the bare shop handle (`my-store`) or the full domain, in any
/// case, and always holds the lowercase full domain. It is the default
/// request host and the `Host` header value under an
/// [`api_host`](crate::ClientConfigBuilder::api_host) override.
///
/// # Example
///
/// ```rust
/// use shopify_inventory::ShopDomain;
///
/// let domain = ShopDomain::new("My-Store").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// assert!(ShopDomain::new("my-store.example.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain(String);

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a validated shop domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] unless the handle is made
    /// of lowercase letters, digits and inner hyphens, and any domain part
    /// is exactly `myshopify.com`.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into().trim().to_lowercase();
        let handle = domain.strip_suffix(Self::SUFFIX).unwrap_or(&domain);

        let valid = !handle.is_empty()
            && !handle.starts_with('-')
            && !handle.ends_with('-')
            && handle
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid {
            return Err(ConfigError::InvalidShopDomain { domain });
        }

        Ok(Self(format!("{handle}{}", Self::SUFFIX)))
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A base URL that replaces `https://{shop}` for API calls.
///
/// Used when requests go through a proxy, or against a local mock server
/// in tests. A trailing slash is removed so paths can be appended.
///
/// # Example
///
/// ```rust
/// use shopify_inventory::HostUrl;
///
/// let url = HostUrl::new("http://localhost:3000/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:3000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl(String);

impl HostUrl {
    /// Creates a validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] when the scheme or host is
    /// missing.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().trim_end_matches('/').to_string();

        let valid = url.split_once("://").is_some_and(|(scheme, rest)| {
            !scheme.is_empty()
                && scheme.chars().all(|c| c.is_ascii_alphabetic())
                && !rest.starts_with([':', '/', '?', '#'])
                && !rest.is_empty()
        });
        if !valid {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        Ok(Self(url))
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_empty_string() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(matches!(
            AccessToken::new("   "),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("shpat_super_secret").unwrap();
        let debug_output = format!("{token:?}");
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super_secret"));
    }

    #[test]
    fn test_shop_domain_accepts_handle_or_full_domain() {
        assert_eq!(
            ShopDomain::new("My-Store").unwrap().as_ref(),
            "my-store.myshopify.com"
        );
        assert_eq!(
            ShopDomain::new(" shop2.MyShopify.com ").unwrap().as_ref(),
            "shop2.myshopify.com"
        );
    }

    #[test]
    fn test_shop_domain_rejects_invalid_domains() {
        for input in [
            "",
            ".myshopify.com",
            "my store",
            "my_store",
            "-my-store",
            "my-store-",
            "my-store.otherdomain.com",
        ] {
            assert!(
                matches!(
                    ShopDomain::new(input),
                    Err(ConfigError::InvalidShopDomain { .. })
                ),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_host_url_strips_trailing_slash() {
        let url = HostUrl::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        for input in ["proxy.example.com", "https://", "://example.com", "http://:8080"] {
            assert!(HostUrl::new(input).is_err(), "expected {input:?} to be rejected");
        }
    }
}
