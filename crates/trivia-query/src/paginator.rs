//! Page-number to offset/limit conversion.

use trivia_core::ids::{DEFAULT_PAGE_SIZE, FIRST_PAGE};

use crate::error::QueryError;

/// The offset/limit slice for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub offset: u64,
    pub limit: u64,
}

/// Converts 1-based page numbers into [`PageWindow`]s of a fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: u32,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Paginator {
    /// A paginator with `page_size` items per page. Zero is raised to one.
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// `offset = (page - 1) * page_size`, `limit = page_size`.
    ///
    /// There is no upper bound on `page`; a window past the data is simply
    /// empty and callers decide what that means.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::BadRequest` for page 0.
    pub fn window(&self, page: u32) -> Result<PageWindow, QueryError> {
        if page < FIRST_PAGE {
            return Err(QueryError::BadRequest(format!(
                "page must be at least {FIRST_PAGE}, got {page}"
            )));
        }
        let size = u64::from(self.page_size);
        Ok(PageWindow {
            page,
            offset: u64::from(page - 1).saturating_mul(size),
            limit: size,
        })
    }
}

/// One page of results plus the total number of matching rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Rows matching the predicate across all pages.
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of pages needed to show `total` rows.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.page_size.max(1)))
    }
}
