//! Offset/limit pagination for the admin listing pages.

pub const PER_PAGE: i64 = 10;

/// Pagination state computed from a total row count and the requested page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub current: i64,
    pub total_pages: i64,
    pub total_rows: i64,
}

impl Page {
    pub fn new(requested: i64, total_rows: i64) -> Self {
        Self {
            current: requested.max(1),
            total_pages: total_pages(total_rows),
            total_rows,
        }
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.current - 1) * PER_PAGE
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }
}

/// Ceiling division of the row count by the page size; an empty result set
/// still renders as one page.
pub fn total_pages(total_rows: i64) -> i64 {
    ((total_rows + PER_PAGE - 1) / PER_PAGE).max(1)
}
