//! Keyboard action mapping and dispatch.
//!
//! Raw crossterm key events are mapped to [`KeyAction`]s, then applied to
//! [`AppState`]. Mapping depends on whether the search overlay is open:
//! printable characters feed the query while it is, and drive navigation
//! shortcuts while it is not.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::state::app_state::AppState;
use crate::state::paged::Direction;
use crate::timer::TimerHost;

/// One user intent, decoupled from the physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    OpenSearch,
    CloseSearch,
    SearchInput(char),
    SearchBackspace,
    SearchCycleKind,
    SearchCycleStatus,
    SearchPage(Direction),
    SelectCarouselDown,
    SelectCarouselUp,
    Slide(Direction),
}

impl KeyAction {
    /// Map a key event given the current overlay mode. Returns `None` for
    /// keys with no binding (and for release/repeat events).
    pub fn from_key_event(event: KeyEvent, search_active: bool) -> Option<Self> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        if search_active {
            match event.code {
                KeyCode::Esc => Some(Self::CloseSearch),
                KeyCode::Backspace => Some(Self::SearchBackspace),
                KeyCode::Tab => Some(Self::SearchCycleKind),
                KeyCode::BackTab => Some(Self::SearchCycleStatus),
                KeyCode::Left => Some(Self::SearchPage(Direction::Prev)),
                KeyCode::Right => Some(Self::SearchPage(Direction::Next)),
                KeyCode::Char(c) => Some(Self::SearchInput(c)),
                _ => None,
            }
        } else {
            match event.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Self::Quit),
                KeyCode::Char('/') | KeyCode::Char('s') => Some(Self::OpenSearch),
                KeyCode::Up => Some(Self::SelectCarouselUp),
                KeyCode::Down => Some(Self::SelectCarouselDown),
                KeyCode::Left => Some(Self::Slide(Direction::Prev)),
                KeyCode::Right => Some(Self::Slide(Direction::Next)),
                _ => None,
            }
        }
    }
}

/// Apply one action to the application state.
pub fn handle_key_action(state: &mut AppState, action: KeyAction, timers: &mut dyn TimerHost) {
    match action {
        KeyAction::Quit => state.quit(),
        KeyAction::OpenSearch => state.open_search(),
        KeyAction::CloseSearch => state.close_search(false),
        KeyAction::SearchInput(c) => state.search_push_char(c),
        KeyAction::SearchBackspace => state.search_pop_char(),
        KeyAction::SearchCycleKind => state.search_cycle_kind(),
        KeyAction::SearchCycleStatus => state.search_cycle_status(),
        KeyAction::SearchPage(direction) => state.search_advance_page(direction),
        KeyAction::SelectCarouselDown => state.select_next_carousel(),
        KeyAction::SelectCarouselUp => state.select_prev_carousel(),
        KeyAction::Slide(direction) => state.request_slide(direction, timers),
    }
}
