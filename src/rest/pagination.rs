//! Cursor pagination extracted from the `Link` response header.
//!
//! Shopify paginates list endpoints with opaque `page_info` cursors carried
//! in the `Link` header:
//!
//! ```text
//! <https://shop.myshopify.com/admin/api/2025-10/inventory_items.json?limit=50&page_info=abc>; rel="next"
//! ```
//!
//! [`Pagination::from_link_header`] turns that header into a [`Pagination`]
//! whose cursors can be handed straight back to the next list call.
//!
//! # Example
//!
//! ```rust
//! use shopify_inventory::rest::Pagination;
//!
//! let header = r#"<https://x/y?page_info=abc&limit=50>; rel="next""#;
//! let pagination = Pagination::from_link_header(header).unwrap();
//!
//! let next = pagination.next.unwrap();
//! assert_eq!(next.page_info, "abc");
//! assert_eq!(next.limit, Some(50));
//! assert!(pagination.previous.is_none());
//! ```

use std::borrow::Cow;

use thiserror::Error;

/// A cursor pointing at one page of a list result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageCursor {
    /// Opaque cursor token from the `page_info` query parameter.
    pub page_info: String,
    /// Page size carried by the link, if it had a `limit` parameter.
    pub limit: Option<u32>,
}

/// Cursors for the pages adjacent to the one just fetched.
///
/// Both cursors are `None` when the header was empty, which means the
/// result fit in a single page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Cursor for the following page.
    pub next: Option<PageCursor>,
    /// Cursor for the preceding page.
    pub previous: Option<PageCursor>,
}

/// Error returned when a `Link` header cannot be turned into a [`Pagination`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// An entry was not of the form `<url>; rel="next|previous"`.
    #[error("could not extract pagination link header from '{entry}'")]
    MalformedLink {
        /// The offending entry.
        entry: String,
    },

    /// The `rel` value was neither `next` nor `previous`.
    #[error("unknown pagination relation '{rel}'")]
    UnknownRelation {
        /// The unrecognized relation.
        rel: String,
    },

    /// The link URL had no non-empty `page_info` query parameter.
    #[error("page_info is missing from pagination link '{url}'")]
    MissingPageInfo {
        /// The link URL.
        url: String,
    },

    /// The link URL carried a `limit` that is not a non-negative integer.
    #[error("invalid limit '{limit}' in pagination link '{url}'")]
    InvalidLimit {
        /// The link URL.
        url: String,
        /// The raw `limit` value.
        limit: String,
    },
}

impl Pagination {
    /// Parses a `Link` header value.
    ///
    /// The value is split on `,` and every entry must look like
    /// `<url>; rel="next"` or `<url>; rel="previous"`, with optional
    /// surrounding whitespace. An empty or blank value yields an empty
    /// `Pagination`. If a relation appears more than once, the last entry
    /// wins.
    ///
    /// # Errors
    ///
    /// Returns a [`PaginationError`] for the first entry that is malformed,
    /// names an unknown relation, lacks `page_info`, or has a non-numeric
    /// `limit`. No partial result is returned.
    pub fn from_link_header(header: &str) -> Result<Self, PaginationError> {
        let mut pagination = Self::default();

        if header.trim().is_empty() {
            return Ok(pagination);
        }

        for entry in header.split(',') {
            let (url, rel) = split_link_entry(entry)?;

            let slot = match rel {
                "next" => &mut pagination.next,
                "previous" => &mut pagination.previous,
                other => {
                    return Err(PaginationError::UnknownRelation {
                        rel: other.to_string(),
                    })
                }
            };

            *slot = Some(cursor_from_url(url)?);
        }

        Ok(pagination)
    }

    /// Returns `true` if there is a following page.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next.is_some()
    }

    /// Returns `true` if there is a preceding page.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.previous.is_some()
    }
}

/// Splits `<url>; rel="value"` into its URL and relation.
fn split_link_entry(entry: &str) -> Result<(&str, &str), PaginationError> {
    let malformed = || PaginationError::MalformedLink {
        entry: entry.trim().to_string(),
    };

    let trimmed = entry.trim();
    let rest = trimmed.strip_prefix('<').ok_or_else(malformed)?;
    let (url, params) = rest.split_once('>').ok_or_else(malformed)?;
    if url.is_empty() {
        return Err(malformed());
    }

    let rel = params
        .trim_start()
        .strip_prefix(';')
        .map(str::trim_start)
        .and_then(|p| p.strip_prefix("rel=\""))
        .and_then(|p| p.strip_suffix('"'))
        .ok_or_else(malformed)?;
    if rel.is_empty() || rel.contains('"') {
        return Err(malformed());
    }

    Ok((url, rel))
}

/// Reads `page_info` and `limit` from a link URL's query string.
fn cursor_from_url(url: &str) -> Result<PageCursor, PaginationError> {
    let query = url
        .split_once('?')
        .map_or("", |(_, query)| query)
        .split('#')
        .next()
        .unwrap_or_default();

    let mut page_info = None;
    let mut limit = None;

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match decode(key).as_ref() {
            "page_info" if page_info.is_none() => page_info = Some(decode(value).into_owned()),
            "limit" if limit.is_none() => limit = Some(decode(value).into_owned()),
            _ => {}
        }
    }

    let page_info = page_info
        .filter(|p| !p.is_empty())
        .ok_or_else(|| PaginationError::MissingPageInfo {
            url: url.to_string(),
        })?;

    let limit = limit
        .map(|raw| {
            raw.parse::<u32>()
                .map_err(|_| PaginationError::InvalidLimit {
                    url: url.to_string(),
                    limit: raw.clone(),
                })
        })
        .transpose()?;

    Ok(PageCursor { page_info, limit })
}

fn decode(value: &str) -> Cow<'_, str> {
    urlencoding::decode(value).unwrap_or(Cow::Borrowed(value))
}
