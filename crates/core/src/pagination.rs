//! Page-based pagination arithmetic.
//!
//! Pages are 1-indexed. A [`PageRequest`] is always normalized on
//! construction so that `page_number >= 1` and `page_size >= 1`; every
//! downstream computation (offset, page count) can rely on that.

use serde::Serialize;

/// Page number used when the caller does not supply one.
pub const DEFAULT_PAGE_NUMBER: i64 = 1;

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: i64 = 30;

/// A normalized request for one page of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: i64,
    page_size: i64,
}

impl PageRequest {
    /// Build a request, clamping non-positive inputs to `1`.
    pub fn new(page_number: i64, page_size: i64) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Build a request from optional inputs, applying the defaults first.
    pub fn from_optional(page_number: Option<i64>, page_size: Option<i64>) -> Self {
        Self::new(
            page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
            page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }

    pub fn page_number(&self) -> i64 {
        self.page_number
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Number of rows to skip: `(page_number - 1) * page_size`.
    ///
    /// Saturates instead of overflowing for absurdly large page numbers; such
    /// a page is simply empty.
    pub fn offset(&self) -> i64 {
        (self.page_number - 1).saturating_mul(self.page_size)
    }

    /// Maximum number of rows on this page (the SQL `LIMIT`).
    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE)
    }
}

/// `ceil(total_records / page_size)`, which is `0` when there are no records.
///
/// `page_size` must already be normalized (`>= 1`).
pub fn total_pages(total_records: i64, page_size: i64) -> i64 {
    debug_assert!(page_size >= 1, "page_size must be normalized");
    if total_records <= 0 {
        return 0;
    }
    total_records / page_size + i64::from(total_records % page_size != 0)
}

/// One page of records plus the metadata needed to walk the collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    /// Count of all matching rows, independent of pagination.
    pub total_records: i64,
    /// Number of pages of `page_size` needed to hold `total_records`.
    pub total_pages: i64,
    /// The (normalized) page that was requested.
    pub current_page: i64,
    /// The (normalized) page size that was requested.
    pub page_size: i64,
    /// Records on the requested page, in collection order.
    pub records: Vec<T>,
}

impl<T> PageResult<T> {
    /// Assemble a page from the slice query and the count query.
    ///
    /// The two inputs come from independent queries, so `records` is trusted
    /// as-is; it is never padded or truncated here.
    pub fn new(request: PageRequest, total_records: i64, records: Vec<T>) -> Self {
        Self {
            total_records,
            total_pages: total_pages(total_records, request.page_size()),
            current_page: request.page_number(),
            page_size: request.page_size(),
            records,
        }
    }
}
