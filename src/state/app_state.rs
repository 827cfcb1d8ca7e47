//! Application state and transitions.
//!
//! `AppState` is the root state: the read-only catalog, the grouped genre
//! carousels, and the search overlay. All transitions are pure apart from
//! timer scheduling, which goes through the injected [`TimerHost`].

use rand::Rng;

use crate::model::CatalogItem;
use crate::state::carousel::CarouselState;
use crate::state::genre::group_by_genre;
use crate::state::paged::Direction;
use crate::state::search_overlay::{Backdrop, SearchOverlayState};
use crate::state::slide::SlideMachine;
use crate::timer::{TimerHost, TimerToken};

use std::time::Duration;

/// Page sizes and delays resolved from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowseSettings {
    pub carousel_page_size: usize,
    pub search_page_size: usize,
    pub slide_out_delay: Duration,
    pub slide_in_delay: Duration,
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self {
            carousel_page_size: crate::state::carousel::CAROUSEL_PAGE_SIZE,
            search_page_size: crate::state::search_overlay::SEARCH_PAGE_SIZE,
            slide_out_delay: crate::state::slide::SLIDE_OUT_DELAY,
            slide_in_delay: crate::state::slide::SLIDE_IN_DELAY,
        }
    }
}

// ===== AppState =====

/// Root application state.
#[derive(Debug)]
pub struct AppState {
    catalog: Vec<CatalogItem>,
    carousels: Vec<CarouselState>,
    search: SearchOverlayState,
    backdrop: Backdrop,
    /// Carousel row that has keyboard focus on the home screen.
    selected: usize,
    should_quit: bool,
}

impl AppState {
    /// Group the catalog and build one carousel per non-empty genre.
    /// Grouping (and its shuffle) runs once here; the buckets stay fixed
    /// for the lifetime of the state.
    pub fn new<R: Rng + ?Sized>(
        catalog: Vec<CatalogItem>,
        genre_names: &[String],
        settings: BrowseSettings,
        rng: &mut R,
    ) -> Self {
        let carousels = group_by_genre(&catalog, genre_names, rng)
            .into_iter()
            .map(|bucket| {
                CarouselState::new(
                    bucket,
                    settings.carousel_page_size,
                    SlideMachine::with_delays(settings.slide_out_delay, settings.slide_in_delay),
                )
            })
            .collect();
        Self {
            catalog,
            carousels,
            search: SearchOverlayState::new(settings.search_page_size),
            backdrop: Backdrop::default(),
            selected: 0,
            should_quit: false,
        }
    }

    /// The full, read-only catalog.
    pub fn catalog(&self) -> &[CatalogItem] {
        &self.catalog
    }

    /// Genre carousels in display order.
    pub fn carousels(&self) -> &[CarouselState] {
        &self.carousels
    }

    /// Search overlay state.
    pub fn search(&self) -> &SearchOverlayState {
        &self.search
    }

    /// Whether the home screen is dimmed behind the overlay.
    pub fn is_dimmed(&self) -> bool {
        self.backdrop.is_dimmed()
    }

    /// Focused carousel row index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the event loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // ===== Home screen =====

    /// Move row focus down, stopping at the last carousel.
    pub fn select_next_carousel(&mut self) {
        if self.selected + 1 < self.carousels.len() {
            self.selected += 1;
        }
    }

    /// Move row focus up, stopping at the first carousel.
    pub fn select_prev_carousel(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Ask the focused carousel to slide. Ignored mid-transition.
    pub fn request_slide(&mut self, direction: Direction, timers: &mut dyn TimerHost) {
        if let Some(carousel) = self.carousels.get_mut(self.selected) {
            carousel.request(direction, timers);
        }
    }

    /// Route a timer expiration to its owning carousel.
    pub fn timer_fired(&mut self, token: TimerToken, timers: &mut dyn TimerHost) {
        for carousel in &mut self.carousels {
            if carousel.timer_fired(token, timers) {
                return;
            }
        }
        // Token belonged to a torn-down carousel; already cancelled.
    }

    /// Cancel every in-flight transition (app teardown).
    pub fn teardown(&mut self, timers: &mut dyn TimerHost) {
        for carousel in &mut self.carousels {
            carousel.teardown(timers);
        }
    }

    // ===== Search overlay =====

    /// Open the search overlay, dimming the home screen.
    pub fn open_search(&mut self) {
        self.search.open(&mut self.backdrop);
    }

    /// Close the overlay. `keep_input` preserves the query text.
    pub fn close_search(&mut self, keep_input: bool) {
        self.search.close(keep_input, &self.catalog, &mut self.backdrop);
    }

    /// Type into the overlay input.
    pub fn search_push_char(&mut self, c: char) {
        self.search.push_char(c, &self.catalog);
    }

    /// Delete from the overlay input.
    pub fn search_pop_char(&mut self) {
        self.search.pop_char(&self.catalog);
    }

    /// Cycle the kind filter.
    pub fn search_cycle_kind(&mut self) {
        self.search.cycle_kind_filter(&self.catalog);
    }

    /// Cycle the status filter.
    pub fn search_cycle_status(&mut self) {
        self.search.cycle_status_filter(&self.catalog);
    }

    /// Page through search results.
    pub fn search_advance_page(&mut self, direction: Direction) {
        self.search.advance_page(direction);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
