//! Per-genre carousel state.
//!
//! A carousel pairs one genre bucket's paged window with its own slide
//! machine. Carousels are fully independent: each owns its window and
//! machine, and timers are routed by token so one carousel's expiration
//! can never touch another.

use crate::model::CatalogItem;
use crate::state::genre::GenreBucket;
use crate::state::paged::{Direction, PagedWindow};
use crate::state::slide::{SlideClass, SlideMachine};
use crate::timer::{TimerHost, TimerToken};
use tracing::debug;

/// Default items shown per carousel page.
pub const CAROUSEL_PAGE_SIZE: usize = 4;

// ===== CarouselState =====

/// One genre row on the home screen.
#[derive(Debug)]
pub struct CarouselState {
    genre: String,
    window: PagedWindow<CatalogItem>,
    machine: SlideMachine,
}

/// Snapshot handed to the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView<'a> {
    pub genre: &'a str,
    pub visible_items: &'a [CatalogItem],
    pub visual_class: Option<SlideClass>,
    pub has_multiple_pages: bool,
    /// (displayed page, total pages), 1-indexed.
    pub page_indicator: (usize, usize),
}

impl CarouselState {
    /// Build a carousel from a grouped bucket.
    pub fn new(bucket: GenreBucket, page_size: usize, machine: SlideMachine) -> Self {
        let genre = bucket.name().to_string();
        Self {
            genre,
            window: PagedWindow::new(bucket.into_items(), page_size),
            machine,
        }
    }

    /// The genre this carousel shows.
    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Read access to the underlying window.
    pub fn window(&self) -> &PagedWindow<CatalogItem> {
        &self.window
    }

    /// Forward a navigation request to the slide machine. Ignored while a
    /// transition is running or when there is only one page.
    pub fn request(&mut self, direction: Direction, timers: &mut dyn TimerHost) -> bool {
        if !self.window.has_multiple_pages() {
            return false;
        }
        let accepted = self.machine.request(direction, timers);
        if accepted {
            if let Some(class) = self.machine.visual_class() {
                debug!(genre = self.genre.as_str(), class = class.name(), "slide started");
            }
        }
        accepted
    }

    /// Offer a timer expiration. Returns `true` when this carousel owned
    /// the token.
    pub fn timer_fired(&mut self, token: TimerToken, timers: &mut dyn TimerHost) -> bool {
        self.machine.timer_fired(token, &mut self.window, timers)
    }

    /// Cancel any in-flight transition (teardown path).
    pub fn teardown(&mut self, timers: &mut dyn TimerHost) {
        self.machine.cancel(timers);
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> CarouselView<'_> {
        CarouselView {
            genre: &self.genre,
            visible_items: self.window.visible_slice(),
            visual_class: self.machine.visual_class(),
            has_multiple_pages: self.window.has_multiple_pages(),
            page_indicator: (self.window.current_page() + 1, self.window.page_count()),
        }
    }
}

#[cfg(test)]
#[path = "carousel_tests.rs"]
mod tests;
