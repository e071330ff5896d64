//! Admin API version selection.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Admin API version used in the request base path
/// (`/admin/api/{version}/`).
///
/// Versions are quarterly releases written `YYYY-MM` with a month of
/// `01`, `04`, `07` or `10`, or the literal `unstable`. The inventory item
/// binding targets [`ApiVersion::latest`].
///
/// # Example
///
/// ```rust
/// use shopify_inventory::ApiVersion;
///
/// let version: ApiVersion = "2025-07".parse().unwrap();
/// assert_eq!(version.as_ref(), "2025-07");
/// assert_eq!(ApiVersion::latest().to_string(), "2025-10");
/// assert!("2025-08".parse::<ApiVersion>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiVersion(String);

impl ApiVersion {
    const LATEST: &'static str = "2025-10";

    /// Creates a validated API version. Surrounding whitespace and case
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] for anything other than a
    /// release quarter or `unstable`.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into().trim().to_lowercase();
        if version == "unstable" || is_release_quarter(&version) {
            Ok(Self(version))
        } else {
            Err(ConfigError::InvalidApiVersion { version })
        }
    }

    /// The version the inventory item records are modelled on.
    #[must_use]
    pub fn latest() -> Self {
        Self(Self::LATEST.to_string())
    }
}

fn is_release_quarter(s: &str) -> bool {
    let Some((year, month)) = s.split_once('-') else {
        return false;
    };
    year.len() == 4
        && year.chars().all(|c| c.is_ascii_digit())
        && matches!(month, "01" | "04" | "07" | "10")
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
