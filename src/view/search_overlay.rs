//! Search overlay rendering.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::state::{AppState, PageLabel, SearchView};
use crate::view::fit_width;
use crate::view::styles::Palette;

/// Render the centered search overlay on top of the home screen.
pub fn render_search(frame: &mut Frame, area: Rect, app: &AppState, palette: &Palette) {
    let view = app.search().view();
    let overlay = centered(area);

    frame.render_widget(Clear, overlay);
    let block = Block::bordered().title(" Search ");
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let mut lines = Vec::with_capacity(inner.height as usize);
    lines.push(input_line(&view, palette));
    lines.push(filter_line(&view, palette));
    lines.push(Line::default());

    if view.current_page_items.is_empty() {
        let message = if view.input.trim().is_empty() {
            "Type to search by title, description, or author"
        } else {
            "No results found..."
        };
        lines.push(Line::from(Span::styled(message, palette.card_meta())));
    } else {
        for item in view.current_page_items {
            lines.push(result_line(item, inner.width as usize, palette));
        }
    }

    // Pagination footer pinned under the results.
    if view.total_pages > 1 {
        while lines.len() + 1 < inner.height as usize {
            lines.push(Line::default());
        }
        lines.push(pagination_line(&view, palette));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn centered(area: Rect) -> Rect {
    let width = (area.width * 4 / 5).max(20).min(area.width);
    let height = (area.height * 3 / 4).max(10).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn input_line<'a>(view: &SearchView<'a>, palette: &Palette) -> Line<'a> {
    Line::from(vec![
        Span::styled("Search: ", palette.card_meta()),
        Span::styled(view.input.to_string(), palette.card_title()),
        Span::styled("█", palette.active_page()),
    ])
}

fn filter_line<'a>(view: &SearchView<'a>, palette: &Palette) -> Line<'a> {
    let kind = view
        .kind_filter
        .map_or("All".to_string(), |k| k.to_string());
    let status = view
        .status_filter
        .map_or("All".to_string(), |s| s.to_string());
    Line::from(Span::styled(
        format!("Type: {kind} (Tab)   Status: {status} (Shift-Tab)   {} results", view.total_results),
        palette.card_meta(),
    ))
}

fn result_line<'a>(
    item: &'a crate::model::CatalogItem,
    width: usize,
    palette: &Palette,
) -> Line<'a> {
    let date = item
        .date
        .map_or(String::new(), |d| format!("  {}", d.format("%Y-%m-%d")));
    let title_width = width.saturating_sub(30);
    Line::from(vec![
        Span::styled(fit_width(&item.title, title_width), palette.card_title()),
        Span::styled(format!("  [{}]", item.kind), palette.kind_tag(item.kind)),
        Span::styled(format!(" [{}]", item.status), palette.status_tag(item.status)),
        Span::styled(date, palette.card_meta()),
    ])
}

fn pagination_line<'a>(view: &SearchView<'a>, palette: &Palette) -> Line<'a> {
    let mut spans = vec![Span::styled("Pages: ", palette.card_meta())];
    for (i, label) in view.page_labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        match label {
            PageLabel::Ellipsis => spans.push(Span::styled("…", palette.page_indicator())),
            PageLabel::Page(n) => {
                let style = if *n == view.current_page {
                    palette.active_page()
                } else {
                    palette.page_indicator()
                };
                spans.push(Span::styled(n.to_string(), style));
            }
        }
    }
    Line::from(spans)
}
