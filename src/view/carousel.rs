//! Home screen rendering: stacked genre carousels.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, CarouselView};
use crate::view::fit_width;
use crate::view::styles::Palette;

/// Terminal lines per carousel row: title, cards, indicator.
const ROW_HEIGHT: u16 = 3;

/// Render the stacked carousels, keeping the focused row in view.
pub fn render_home(frame: &mut Frame, area: Rect, app: &AppState, palette: &Palette) {
    let dim = if app.is_dimmed() {
        palette.dimmed()
    } else {
        Style::default()
    };

    let visible_rows = (area.height / ROW_HEIGHT) as usize;
    if visible_rows == 0 || app.carousels().is_empty() {
        return;
    }
    let first = app
        .selected()
        .saturating_sub(visible_rows.saturating_sub(1));

    for (offset, (index, carousel)) in app
        .carousels()
        .iter()
        .enumerate()
        .skip(first)
        .take(visible_rows)
        .enumerate()
    {
        let row = Rect {
            x: area.x,
            y: area.y + (offset as u16) * ROW_HEIGHT,
            width: area.width,
            height: ROW_HEIGHT,
        };
        render_row(
            frame,
            row,
            &carousel.view(),
            index == app.selected(),
            palette,
            dim,
        );
    }
}

fn render_row(
    frame: &mut Frame,
    area: Rect,
    view: &CarouselView,
    focused: bool,
    palette: &Palette,
    dim: Style,
) {
    let marker = if focused { "▸ " } else { "  " };
    let title_line = Line::from(vec![
        Span::styled(marker, palette.selected_marker()),
        Span::styled(view.genre.to_string(), palette.genre_title()),
    ]);

    let slide_style = view
        .visual_class
        .map(|class| palette.slide(class))
        .unwrap_or_default();
    let card_width = ((area.width as usize).saturating_sub(4) / view.visible_items.len().max(1))
        .saturating_sub(3);
    let mut card_spans: Vec<Span> = vec![Span::raw("  ")];
    for (i, item) in view.visible_items.iter().enumerate() {
        if i > 0 {
            card_spans.push(Span::styled(" │ ", palette.card_meta()));
        }
        card_spans.push(Span::styled(
            fit_width(&item.title, card_width),
            palette.card_title().patch(slide_style),
        ));
    }
    let cards_line = Line::from(card_spans);

    let indicator_line = if view.has_multiple_pages {
        let (current, total) = view.page_indicator;
        Line::from(Span::styled(
            format!("  ‹ {current}/{total} ›"),
            palette.page_indicator(),
        ))
    } else {
        Line::default()
    };

    let paragraph =
        Paragraph::new(vec![title_line, cards_line, indicator_line]).style(dim);
    frame.render_widget(paragraph, area);
}
