//! Shared query parameter types for API handlers.

use serde::Deserialize;
use taskdeck_core::pagination::PageRequest;

/// Page-based pagination parameters (`?pageNumber=&pageSize=`).
///
/// Missing values fall back to page 1 of 30; non-positive values are clamped
/// to 1 by [`PageRequest`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

impl PaginationParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_optional(self.page_number, self.page_size)
    }
}
