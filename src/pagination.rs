//! This module defines how listings are paged with `offset` and `limit`.

use serde::Deserialize;

use crate::Error;

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The maximum number of items to return when a request does not specify a limit.
    pub default_limit: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { default_limit: 20 }
    }
}

/// A window into an insertion-ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// The number of items to skip.
    pub offset: u64,
    /// The maximum number of items to return.
    pub limit: u64,
}

/// The raw `offset` and `limit` query parameters.
///
/// The values are kept as strings so that a bad value can be reported as an
/// [Error::InvalidQuery] instead of axum's default
/// plain text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// The number of items to skip.
    pub offset: Option<String>,
    /// The maximum number of items to return.
    pub limit: Option<String>,
}

impl PageQuery {
    /// Resolve the query into a [Page], falling back to offset 0 and the
    /// configured default limit.
    ///
    /// # Errors
    /// Returns an [Error::InvalidQuery] if either
    /// parameter is not a non-negative integer.
    pub fn resolve(&self, config: &PaginationConfig) -> Result<Page, Error> {
        let offset = parse_param("offset", self.offset.as_deref())?.unwrap_or(0);
        let limit = parse_param("limit", self.limit.as_deref())?.unwrap_or(config.default_limit);

        Ok(Page { offset, limit })
    }
}

fn parse_param(name: &str, value: Option<&str>) -> Result<Option<u64>, Error> {
    match value {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| {
            Error::InvalidQuery(format!(
                "{name} must be a non-negative integer, got \"{raw}\""
            ))
        }),
    }
}
