//! Page navigation derived from row counts.
//!
//! [`Pagination::compute`] turns a total row count, page size, and requested
//! page into first/previous/next pointers plus the LIMIT/OFFSET window for
//! the row fetch. Pointers are `None` at the boundaries ("no such page"),
//! so list templates can render or suppress each link directly.

use serde::Serialize;

/// Default number of rows per admin list page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum number of rows per admin list page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp a user-provided page size to valid bounds.
pub fn clamp_page_size(size: Option<i64>) -> i64 {
    size.unwrap_or(DEFAULT_PAGE_SIZE).max(1).min(MAX_PAGE_SIZE)
}

/// Clamp a user-provided page number to at least 1.
///
/// `compute` additionally clamps against the last page once the row count
/// is known.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Navigation state for one page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub total_rows: i64,
    pub page_size: i64,
    /// The page actually served, after clamping into `[1, last_page]`.
    pub current_page: i64,
    /// Highest valid page number; 0 when there are no rows.
    pub last_page: i64,
    /// `None` when already on the first page.
    pub first: Option<i64>,
    /// `None` when already on the first page.
    pub previous: Option<i64>,
    /// `None` when already on the last page.
    pub next: Option<i64>,
}

impl Pagination {
    /// Derive pagination state for `current_page` of a listing with
    /// `total_rows` rows at `page_size` rows per page.
    ///
    /// Out-of-range inputs are clamped rather than rejected: a page size
    /// below 1 becomes 1, and the requested page is forced into
    /// `[1, last_page]`. Zero rows yields `last_page == 0` with every
    /// pointer `None`.
    pub fn compute(total_rows: i64, page_size: i64, current_page: i64) -> Self {
        let total_rows = total_rows.max(0);
        let page_size = page_size.max(1);
        let last_page = (total_rows + page_size - 1) / page_size;

        if last_page == 0 {
            return Self {
                total_rows,
                page_size,
                current_page: 1,
                last_page: 0,
                first: None,
                previous: None,
                next: None,
            };
        }

        let current_page = current_page.clamp(1, last_page);
        let at_first = current_page == 1;
        let at_last = current_page == last_page;

        Self {
            total_rows,
            page_size,
            current_page,
            last_page,
            first: if at_first { None } else { Some(1) },
            previous: if at_first { None } else { Some(current_page - 1) },
            next: if at_last { None } else { Some(current_page + 1) },
        }
    }

    /// SQL OFFSET for the current page's row fetch.
    pub fn offset(&self) -> i64 {
        (self.current_page - 1) * self.page_size
    }

    /// SQL LIMIT for the current page's row fetch.
    pub fn limit(&self) -> i64 {
        self.page_size
    }
}
