//! Paging for carousels and listing grids

use serde::{Deserialize, Serialize};

/// Items on page `page` (zero-based), clamped to the input
///
/// A page size of zero, or a page past the end, yields an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Current page of a carousel whose navigation wraps around
///
/// # Example
///
/// ```
/// use eschool_core::Paginator;
///
/// let mut pager = Paginator::new(3, 7);
/// assert_eq!(pager.total_pages(), 3);
/// pager.prev_page();
/// assert_eq!(pager.page(), 2);
/// pager.next_page();
/// assert_eq!(pager.page(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PaginatorState")]
pub struct Paginator {
    page: usize,
    page_size: usize,
    total_items: usize,
}

/// Paginator fields as stored, before the page is checked
#[derive(Deserialize)]
struct PaginatorState {
    page: usize,
    page_size: usize,
    total_items: usize,
}

impl From<PaginatorState> for Paginator {
    fn from(state: PaginatorState) -> Self {
        let mut pager = Paginator::new(state.page_size, state.total_items);
        pager.go_to(state.page);
        pager
    }
}

impl Paginator {
    /// Create a paginator on the first page
    pub fn new(page_size: usize, total_items: usize) -> Self {
        Self {
            page: 0,
            page_size,
            total_items,
        }
    }

    /// Get the current page (zero-based)
    pub fn page(&self) -> usize {
        self.page
    }

    /// Get the number of items per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages; zero when the page size is zero
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            0
        } else {
            self.total_items.div_ceil(self.page_size)
        }
    }

    /// Navigation controls are disabled when there is nothing to page through
    pub fn can_navigate(&self) -> bool {
        self.total_pages() > 0
    }

    /// Advance one page, wrapping to the first
    pub fn next_page(&mut self) {
        let total = self.total_pages();
        if total > 0 {
            self.page = (self.page.min(total - 1) + 1) % total;
        }
    }

    /// Go back one page, wrapping to the last
    pub fn prev_page(&mut self) {
        let total = self.total_pages();
        if total > 0 {
            self.page = (self.page.min(total - 1) + total - 1) % total;
        }
    }

    /// Jump to a page; out-of-range pages are ignored
    pub fn go_to(&mut self, page: usize) {
        if page < self.total_pages() {
            self.page = page;
        }
    }

    /// Update the item count after the list changed
    ///
    /// Resets to the first page when the current one no longer exists.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        if self.page >= self.total_pages() {
            self.page = 0;
        }
    }

    /// Items on the current page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.page, self.page_size)
    }
}
