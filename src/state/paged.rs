//! Fixed-size paged view over an ordered collection.
//!
//! The window wraps at both ends and is safe over empty collections:
//! `page_count` is clamped to 1 so there is never a division by zero or
//! an out-of-range current page.

// ===== Direction =====

/// Navigation direction for paging and slide transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    Prev,
}

// ===== PageLabel =====

/// One element of the compact page-index summary (1-indexed pages).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    /// A clickable page number.
    Page(usize),
    /// A gap in the sequence, rendered as "…".
    Ellipsis,
}

// ===== PagedWindow =====

/// Windowed view over an ordered sequence with wraparound navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedWindow<T> {
    items: Vec<T>,
    page_size: usize,
    current_page: usize,
}

impl<T> PagedWindow<T> {
    /// Create a window positioned on the first page.
    ///
    /// `page_size` is clamped to at least 1.
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            page_size: page_size.max(1),
            current_page: 0,
        }
    }

    /// All items, in window order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items across all pages.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the window holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current page, 0-indexed. Always `< page_count()`.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Total pages: `ceil(len / page_size)`, at least 1 even when empty.
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size).max(1)
    }

    /// Whether navigation controls are worth rendering.
    pub fn has_multiple_pages(&self) -> bool {
        self.page_count() > 1
    }

    /// The slice visible on the current page, clamped to available items.
    /// Empty when the window is empty.
    pub fn visible_slice(&self) -> &[T] {
        let start = self.current_page * self.page_size;
        if start >= self.items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Move one page forward or back, wrapping at either end.
    /// A no-op on a single page (wraps onto itself).
    pub fn advance(&mut self, direction: Direction) {
        let count = self.page_count();
        self.current_page = match direction {
            Direction::Next => (self.current_page + 1) % count,
            Direction::Prev => (self.current_page + count - 1) % count,
        };
    }

    /// Jump to a 0-indexed page. Out-of-range requests are ignored.
    pub fn jump_to(&mut self, page: usize) {
        if page < self.page_count() {
            self.current_page = page;
        }
    }

    /// Compact page-index summary for navigation controls, 1-indexed.
    ///
    /// Five or fewer pages are listed in full. Otherwise the summary
    /// anchors the first and last page and windows around the current
    /// one, with ellipsis markers standing in for the gaps:
    ///
    /// - near the start: `1 2 3 4 … N`
    /// - near the end: `1 … N-3 N-2 N-1 N`
    /// - in the middle: `1 … c-1 c c+1 … N`
    pub fn visible_page_labels(&self) -> Vec<PageLabel> {
        use PageLabel::{Ellipsis, Page};

        let count = self.page_count();
        let displayed = self.current_page + 1;

        if count <= 5 {
            return (1..=count).map(Page).collect();
        }
        if displayed <= 3 {
            return vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(count)];
        }
        if displayed >= count - 2 {
            return vec![
                Page(1),
                Ellipsis,
                Page(count - 3),
                Page(count - 2),
                Page(count - 1),
                Page(count),
            ];
        }
        vec![
            Page(1),
            Ellipsis,
            Page(displayed - 1),
            Page(displayed),
            Page(displayed + 1),
            Ellipsis,
            Page(count),
        ]
    }
}

#[cfg(test)]
#[path = "paged_tests.rs"]
mod tests;
