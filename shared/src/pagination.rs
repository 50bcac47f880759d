//! Pagination types
//!
//! List endpoints answer with `{ items, meta }`. Pages are 1-based.

use serde::{Deserialize, Serialize};

/// Pagination metadata of one list response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Current page (1-based)
    pub page: u32,
    /// Total number of pages
    pub total_pages: u32,
    /// Total number of matching records
    pub total_items: u64,
    /// Page size
    pub limit: u32,
}

impl PaginationMeta {
    pub fn new(page: u32, total_items: u64, limit: u32) -> Self {
        let total_pages = if limit > 0 {
            total_items.div_ceil(limit as u64) as u32
        } else {
            1
        };

        Self {
            page,
            total_pages,
            total_items,
            limit,
        }
    }

    /// Highest addressable page (an empty result still has page 1)
    pub fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }

    /// Copy of this metadata with `page` forced into `[1, max(total_pages, 1)]`
    pub fn clamped(self) -> Self {
        Self {
            page: self.page.clamp(1, self.last_page()),
            ..self
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// One page of a list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, meta: PaginationMeta) -> Self {
        Self { items, meta }
    }
}
