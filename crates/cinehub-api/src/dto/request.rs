//! Request DTOs.
//!
//! Query parameters keep the original camelCase names (`minLength`,
//! `titlePrefix`, `pageSize`). `page` deserializes as a signed integer so
//! that negative values reach the explicit validation check instead of
//! failing extraction.

use rust_decimal::Decimal;
use serde::Deserialize;

use cinehub_core::error::AppError;
use cinehub_core::types::pagination::DEFAULT_PAGE_SIZE;

/// Query parameters for the v1 paged listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PagedFilmsParams {
    /// Zero-based page number.
    #[serde(default)]
    pub page: i64,
    /// Minimum film length in minutes (exclusive).
    #[serde(default, rename = "minLength")]
    pub min_length: i32,
}

/// Query parameters for the v2 paged listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PagedFilmsV2Params {
    /// Zero-based page number.
    #[serde(default)]
    pub page: i64,
    /// Minimum film length in minutes (exclusive).
    #[serde(default, rename = "minLength")]
    pub min_length: i32,
    /// Items per page.
    #[serde(default = "default_page_size", rename = "pageSize")]
    pub page_size: u64,
}

/// Query parameters for title-prefix search.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchFilmsParams {
    /// Case-sensitive title prefix; empty matches every title.
    #[serde(default, rename = "titlePrefix")]
    pub title_prefix: String,
    /// Minimum film length in minutes (exclusive).
    #[serde(default, rename = "minLength")]
    pub min_length: i32,
}

/// Query parameters for the bulk rental-rate update.
#[derive(Debug, Clone, Deserialize)]
pub struct RentalRateParams {
    /// Minimum film length in minutes (exclusive).
    #[serde(default, rename = "minLength")]
    pub min_length: i32,
    /// The new rental rate. Required; validated downstream.
    pub rate: Option<Decimal>,
}

/// Query parameters carrying only a minimum-length filter.
#[derive(Debug, Clone, Deserialize)]
pub struct MinLengthParams {
    /// Minimum film length in minutes (exclusive).
    #[serde(default, rename = "minLength")]
    pub min_length: i32,
}

/// Query parameters for the formatted film view.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattedFilmParams {
    /// One of `standard`, `short`, `detailed`.
    #[serde(default = "default_format")]
    pub format: String,
}

/// Reject negative page numbers before they reach the query layer.
pub fn ensure_non_negative_page(page: i64) -> Result<u64, AppError> {
    u64::try_from(page).map_err(|_| AppError::validation("Page must be non-negative"))
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

fn default_format() -> String {
    "standard".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_page_rejected() {
        assert!(ensure_non_negative_page(-1).is_err());
        assert_eq!(ensure_non_negative_page(0).unwrap(), 0);
        assert_eq!(ensure_non_negative_page(7).unwrap(), 7);
    }

    #[test]
    fn test_param_defaults() {
        let params: PagedFilmsV2Params = serde_json::from_str("{}").unwrap();
        assert_eq!(params.page, 0);
        assert_eq!(params.min_length, 0);
        assert_eq!(params.page_size, DEFAULT_PAGE_SIZE);

        let params: SearchFilmsParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.title_prefix, "");

        let params: RentalRateParams = serde_json::from_str("{}").unwrap();
        assert!(params.rate.is_none());
    }
}
