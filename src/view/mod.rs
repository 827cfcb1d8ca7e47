//! Rendering layer (impure shell).
//!
//! Stateless widgets fed by state snapshots. No module here mutates
//! application state.

pub mod carousel;
pub mod search_overlay;
pub mod styles;

use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

use crate::state::AppState;
use styles::Palette;

/// Draw one full frame: the home screen, plus the search overlay when
/// open (the home screen renders dimmed behind it).
pub fn render(frame: &mut Frame, app: &AppState, palette: &Palette) {
    let area = frame.area();
    carousel::render_home(frame, area, app, palette);
    if app.search().is_active() {
        search_overlay::render_search(frame, area, app, palette);
    }
}

/// Truncate to a display width, appending an ellipsis when cut.
pub(crate) fn fit_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}
