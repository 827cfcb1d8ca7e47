//! Search overlay state.
//!
//! Owns the query state and a paged window over the current results.
//! Results are recomputed on every input or filter change; the window
//! resets to the first page whenever the result set changes.
//!
//! Opening and closing the overlay dims the rest of the screen. That
//! side effect goes through the injected [`OverlayController`] capability
//! instead of mutating any global, so the overlay logic stays pure and
//! testable.

use crate::model::{CatalogItem, ItemKind, ItemStatus};
use crate::query::{search, QueryState};
use crate::state::paged::{Direction, PageLabel, PagedWindow};

/// Default results shown per overlay page.
pub const SEARCH_PAGE_SIZE: usize = 6;

// ===== OverlayController =====

/// Capability to dim or restore the content behind the overlay.
pub trait OverlayController {
    fn set_dimmed(&mut self, dimmed: bool);
}

/// Plain dim flag; the rendering layer reads it to shade the background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Backdrop {
    dimmed: bool,
}

impl Backdrop {
    pub fn is_dimmed(self) -> bool {
        self.dimmed
    }
}

impl OverlayController for Backdrop {
    fn set_dimmed(&mut self, dimmed: bool) {
        self.dimmed = dimmed;
    }
}

// ===== SearchOverlayState =====

/// State of the free-text search overlay.
#[derive(Debug)]
pub struct SearchOverlayState {
    query: QueryState,
    window: PagedWindow<CatalogItem>,
    page_size: usize,
    active: bool,
}

/// Snapshot handed to the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView<'a> {
    pub input: &'a str,
    pub kind_filter: Option<ItemKind>,
    pub status_filter: Option<ItemStatus>,
    pub current_page_items: &'a [CatalogItem],
    pub page_labels: Vec<PageLabel>,
    /// Displayed (1-indexed) current page.
    pub current_page: usize,
    pub total_pages: usize,
    pub total_results: usize,
}

impl SearchOverlayState {
    /// Closed overlay with an empty query.
    pub fn new(page_size: usize) -> Self {
        Self {
            query: QueryState::default(),
            window: PagedWindow::new(Vec::new(), page_size),
            page_size,
            active: false,
        }
    }

    /// Whether the overlay is open.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current query state.
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Open the overlay and dim the background.
    pub fn open(&mut self, overlay: &mut dyn OverlayController) {
        self.active = true;
        overlay.set_dimmed(true);
    }

    /// Close the overlay and restore the background. `keep_input` leaves
    /// the query in place (click-outside behavior); otherwise input and
    /// filters reset.
    pub fn close(
        &mut self,
        keep_input: bool,
        catalog: &[CatalogItem],
        overlay: &mut dyn OverlayController,
    ) {
        if !keep_input {
            self.query.clear();
        }
        self.active = false;
        self.recompute(catalog);
        overlay.set_dimmed(false);
    }

    /// Append a typed character and recompute.
    pub fn push_char(&mut self, c: char, catalog: &[CatalogItem]) {
        self.query.raw_input.push(c);
        self.recompute(catalog);
    }

    /// Delete the last typed character and recompute.
    pub fn pop_char(&mut self, catalog: &[CatalogItem]) {
        self.query.raw_input.pop();
        self.recompute(catalog);
    }

    /// Replace the whole input (paste) and recompute.
    pub fn set_input(&mut self, input: &str, catalog: &[CatalogItem]) {
        self.query.raw_input = input.to_string();
        self.recompute(catalog);
    }

    /// Cycle the kind filter: all → Manga → Manhwa → Anime → all.
    pub fn cycle_kind_filter(&mut self, catalog: &[CatalogItem]) {
        self.query.kind_filter = ItemKind::cycle(self.query.kind_filter);
        self.recompute(catalog);
    }

    /// Cycle the status filter: all → Ongoing → Completed → Paused → all.
    pub fn cycle_status_filter(&mut self, catalog: &[CatalogItem]) {
        self.query.status_filter = ItemStatus::cycle(self.query.status_filter);
        self.recompute(catalog);
    }

    /// Page through the current results.
    pub fn advance_page(&mut self, direction: Direction) {
        self.window.advance(direction);
    }

    /// Jump to a 0-indexed results page.
    pub fn jump_to_page(&mut self, page: usize) {
        self.window.jump_to(page);
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> SearchView<'_> {
        SearchView {
            input: &self.query.raw_input,
            kind_filter: self.query.kind_filter,
            status_filter: self.query.status_filter,
            current_page_items: self.window.visible_slice(),
            page_labels: self.window.visible_page_labels(),
            current_page: self.window.current_page() + 1,
            total_pages: self.window.page_count(),
            total_results: self.window.len(),
        }
    }

    fn recompute(&mut self, catalog: &[CatalogItem]) {
        // Rebuilding the window resets to the first page, which is what a
        // changed result set wants.
        self.window = PagedWindow::new(search(catalog, &self.query), self.page_size);
    }
}

#[cfg(test)]
#[path = "search_overlay_tests.rs"]
mod tests;
