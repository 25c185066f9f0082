//! Fixed-size pagination over the filtered result list.
//!
//! Pages are 1-based. `Paginator` keeps `1 ≤ page ≤ total_pages` for whatever
//! item count it is told about; `paginate` itself is total and clamps instead
//! of failing when handed an out-of-range page.

use std::num::NonZeroUsize;

/// Default number of cards per page.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

/// One page worth of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'s, T> {
    pub items: &'s [T],
    pub total_pages: usize,
}

/// Number of pages for `len` items; an empty list still has one (empty) page.
pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// Slice out page `page` (1-based) of `items`.
///
/// Pages past the end yield an empty slice; page 0 is treated as page 1.
pub fn paginate<T>(items: &[T], page: usize, page_size: NonZeroUsize) -> Page<'_, T> {
    let size = page_size.get();
    let start = page.max(1).saturating_sub(1).saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());

    Page {
        items: &items[start..end],
        total_pages: total_pages(items.len(), page_size),
    }
}

/// Current page tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    page_size: NonZeroUsize,
}

impl Paginator {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self { page: 1, page_size }
    }

    /// Current 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Advance one page. No-op on the last page.
    ///
    /// Returns true if the page changed.
    pub fn next(&mut self, item_count: usize) -> bool {
        self.clamp(item_count);
        if self.page < total_pages(item_count, self.page_size) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. No-op on the first page.
    ///
    /// Returns true if the page changed.
    pub fn prev(&mut self, item_count: usize) -> bool {
        self.clamp(item_count);
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Back to page 1, used whenever a query edit changes the result set.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Pull the page back into range after the item count shrank.
    pub fn clamp(&mut self, item_count: usize) {
        self.page = self.page.clamp(1, total_pages(item_count, self.page_size));
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
