//! Page arithmetic for catalog listings.

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Pagination metadata returned with every listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total_count: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// Compute metadata for `page` (1-based) over `total_count` items.
    #[must_use]
    pub fn new(page: u32, total_count: usize, page_size: u32) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_count.div_ceil(page_size as usize);
        Self {
            page,
            page_size,
            total_count,
            total_pages,
            has_next: (page as usize) < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first item on this page.
    #[must_use]
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.page_size as usize
    }
}

/// One page of items plus its metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    /// Cut one page out of an already filtered and sorted list.
    ///
    /// Pages start at 1. A page past the end is empty, not an error.
    pub fn slice(all: Vec<T>, page: u32, page_size: u32) -> Result<Self> {
        if page < 1 {
            return Err(Error::InvalidPage(page));
        }
        let pagination = Pagination::new(page, all.len(), page_size);
        let items = all
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.page_size as usize)
            .collect();
        Ok(Self { items, pagination })
    }

    /// Number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
