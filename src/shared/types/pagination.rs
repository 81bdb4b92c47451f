//! Offset-based pagination: query-parameter resolution and the page
//! envelope returned by list endpoints.

use serde::Serialize;
use utoipa::ToSchema;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 20;
pub const MIN_LIMIT: u64 = 1;
pub const MAX_LIMIT: u64 = 100;

/// Resolved pagination query parameters.
///
/// Always in-bounds: `page >= 1`, `1 <= limit <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: u64,
    pub limit: u64,
}

impl PaginationParams {
    /// Resolve raw query values into bounded parameters.
    ///
    /// Total over all inputs — missing, non-numeric or non-positive values
    /// fall back to the defaults, an oversized limit is clamped to
    /// [`MAX_LIMIT`]. Never errors.
    pub fn resolve(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = match page.and_then(|p| p.parse::<u64>().ok()) {
            Some(p) if p > 0 => p,
            _ => DEFAULT_PAGE,
        };

        let limit = match limit.and_then(|l| l.parse::<u64>().ok()) {
            // The lower clamp is unreachable through the positive-only
            // guard, kept as defensive bounds enforcement.
            Some(l) if l > 0 => l.clamp(MIN_LIMIT, MAX_LIMIT),
            _ => DEFAULT_LIMIT,
        };

        Self { page, limit }
    }

    /// Database offset for this page.
    ///
    /// Saturates rather than overflowing: any parseable `u64` page is
    /// accepted by `resolve`, so the product must stay defined all the
    /// way up to `u64::MAX`.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResult<T> {
    /// The requested page of records.
    pub data: Vec<T>,
    pub page: u64,
    pub limit: u64,
    /// Total record count across all pages.
    pub total_items: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> PaginatedResult<T> {
    pub fn new(data: Vec<T>, total_items: u64, params: PaginationParams) -> Self {
        let total_pages = total_items.div_ceil(params.limit);
        Self {
            data,
            page: params.page,
            limit: params.limit,
            total_items,
            total_pages,
            has_next: params.page < total_pages,
            has_prev: params.page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_params_use_defaults() {
        let params = PaginationParams::resolve(None, None);
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 20);
    }

    #[test]
    fn non_numeric_params_use_defaults() {
        let params = PaginationParams::resolve(Some("abc"), Some("xyz"));
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 20);
    }

    #[test]
    fn non_positive_page_defaults_to_one() {
        assert_eq!(PaginationParams::resolve(Some("0"), None).page, 1);
        assert_eq!(PaginationParams::resolve(Some("-3"), None).page, 1);
    }

    #[test]
    fn oversized_limit_clamps_to_max() {
        let params = PaginationParams::resolve(None, Some("500"));
        assert_eq!(params.limit, 100);
    }

    #[test]
    fn limit_of_exactly_max_is_kept() {
        assert_eq!(PaginationParams::resolve(None, Some("100")).limit, 100);
    }

    #[test]
    fn non_positive_limit_defaults() {
        assert_eq!(PaginationParams::resolve(None, Some("0")).limit, 20);
        assert_eq!(PaginationParams::resolve(None, Some("-1")).limit, 20);
    }

    #[test]
    fn offset_is_zero_based() {
        let params = PaginationParams::resolve(Some("2"), Some("10"));
        assert_eq!(params.offset(), 10);
        assert_eq!(PaginationParams::default().offset(), 0);
    }

    #[test]
    fn oversized_page_saturates_instead_of_overflowing() {
        let params = PaginationParams::resolve(Some("18446744073709551615"), Some("100"));
        assert_eq!(params.page, u64::MAX);
        assert_eq!(params.limit, 100);
        assert_eq!(params.offset(), u64::MAX);
    }

    #[test]
    fn page_envelope_flags() {
        let params = PaginationParams { page: 2, limit: 10 };
        let result = PaginatedResult::new(vec![0u8; 10], 25, params);
        assert_eq!(result.total_pages, 3);
        assert!(result.has_next);
        assert!(result.has_prev);

        let last = PaginatedResult::new(vec![0u8; 5], 25, PaginationParams { page: 3, limit: 10 });
        assert!(!last.has_next);
        assert!(last.has_prev);

        let empty = PaginatedResult::new(Vec::<u8>::new(), 0, PaginationParams::default());
        assert_eq!(empty.total_pages, 0);
        assert!(!empty.has_next);
        assert!(!empty.has_prev);
    }
}
