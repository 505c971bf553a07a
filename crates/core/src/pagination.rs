//! Pagination constants and helpers.
//!
//! This module lives in `core` (zero internal deps) so it can be used by both
//! the API layer (envelope math) and the repository layer (LIMIT/OFFSET).

/// Default number of items per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Maximum number of items per page.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Clamp an optional per-page limit into `1..=max`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

/// Clamp an optional 1-based page number to at least 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Compute the row offset for a 1-based page number.
pub fn page_offset(page: i64, limit: i64) -> i64 {
    (page - 1) * limit
}

/// Number of pages needed to hold `total` rows at `limit` rows per page.
///
/// An empty result set still has 1 page so clients can always render page 1.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total == 0 {
        1
    } else {
        (total + limit - 1) / limit
    }
}
