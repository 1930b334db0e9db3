//! Pagination Contract
//!
//! List endpoints take 1-indexed `page` / `limit` query parameters and
//! answer with a uniform [`Paginated`] envelope.

use serde::{Deserialize, Serialize};

use crate::error::app_error::{AppError, AppResult};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Validated `page` / `limit` pair. Both are always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageParams {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageParams {
    /// Parse raw query values, defaulting absent or blank ones.
    ///
    /// ## Errors
    /// `400 Bad Request` when a supplied value is not a positive integer.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> AppResult<Self> {
        Ok(Self {
            page: parse_positive("page", page, DEFAULT_PAGE)?,
            limit: parse_positive("limit", limit, DEFAULT_LIMIT)?,
        })
    }
}

fn parse_positive(name: &'static str, raw: Option<&str>, default: u32) -> AppResult<u32> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(default),
        Some(raw) => raw,
    };

    match raw.parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(AppError::bad_request(format!("Invalid `{name}` parameter"))
            .with_detail(format!("`{name}` must be a positive integer, got {raw:?}"))),
    }
}

/// Uniform list envelope returned by every paginated backend endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub docs: Vec<T>,
    pub total_docs: u64,
    pub limit: u32,
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    #[serde(default)]
    pub next_page: Option<u32>,
    #[serde(default)]
    pub prev_page: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_when_absent() {
        assert_eq!(PageParams::from_raw(None, None).unwrap(), PageParams::default());
        assert_eq!(
            PageParams::from_raw(Some(""), Some("  ")).unwrap(),
            PageParams { page: 1, limit: 10 }
        );
    }

    #[test]
    fn test_explicit_values() {
        let params = PageParams::from_raw(Some("2"), Some("5")).unwrap();
        assert_eq!(params, PageParams { page: 2, limit: 5 });
    }

    #[test]
    fn test_rejects_non_positive() {
        for bad in ["0", "-1", "abc", "1.5"] {
            let err = PageParams::from_raw(Some(bad), None).unwrap_err();
            assert_eq!(err.status_code(), 400, "page={bad:?}");
        }
        assert!(PageParams::from_raw(None, Some("0")).is_err());
    }

    #[test]
    fn test_paginated_deserialize() {
        let raw = json!({
            "docs": [{ "name": "crypto" }],
            "totalDocs": 11,
            "limit": 10,
            "page": 1,
            "totalPages": 2,
            "hasNextPage": true,
            "hasPrevPage": false,
            "nextPage": 2,
            "prevPage": null
        });
        let page: Paginated<serde_json::Value> = serde_json::from_value(raw).unwrap();
        assert_eq!(page.total_docs, 11);
        assert!(page.has_next_page);
        assert_eq!(page.next_page, Some(2));
        assert_eq!(page.prev_page, None);
    }
}
